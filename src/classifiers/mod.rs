pub mod classifier;
pub mod id3;

pub use classifier::Classifier;
pub use id3::DecisionTree;
