pub mod arff;
