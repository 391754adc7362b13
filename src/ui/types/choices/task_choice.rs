use crate::ui::types::choices::{DatasetChoice, DumpFormat};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrainingSource {
    Builtin(DatasetChoice),
    Arff(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    /// The five unlabeled smartphone queries.
    BuiltinQueries,
    /// Every training row, label included.
    TrainingRows,
    Arff(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub show_defaults: bool,
    pub dump_file: Option<PathBuf>,
    pub dump_format: DumpFormat,
}

/// A fully resolved request to train a tree and classify queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChoice {
    pub training: TrainingSource,
    pub queries: QuerySource,
    /// Candidate attribute names; empty means every input attribute.
    pub attributes: Vec<String>,
    pub output: OutputOptions,
}

impl TaskChoice {
    pub fn demo(dataset: DatasetChoice) -> Self {
        Self {
            training: TrainingSource::Builtin(dataset),
            queries: QuerySource::BuiltinQueries,
            attributes: Vec::new(),
            output: OutputOptions::default(),
        }
    }

    pub fn title(&self) -> String {
        match &self.training {
            TrainingSource::Builtin(choice) => format!("built-in dataset '{choice}'"),
            TrainingSource::Arff(path) => format!("{}", path.display()),
        }
    }
}
