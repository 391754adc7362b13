mod train_and_predict;

pub use train_and_predict::{TrainAndPredict, TrainingOutcome};
