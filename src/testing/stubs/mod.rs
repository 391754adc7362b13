mod constant_classifier;

pub use constant_classifier::ConstantClassifier;
