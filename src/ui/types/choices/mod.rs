mod dataset_choice;
mod dump_format;
mod task_choice;

pub use dataset_choice::DatasetChoice;
pub use dump_format::DumpFormat;
pub use task_choice::{OutputOptions, QuerySource, TaskChoice, TrainingSource};
