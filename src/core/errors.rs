use thiserror::Error;

/// Errors raised while assembling datasets or routing a row through a trained tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("header must declare at least the class attribute")]
    EmptyHeader,

    #[error("row #{row} has {found} values, expected {expected}")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("attribute '{0}' is declared more than once")]
    DuplicateAttribute(String),

    #[error("attribute '{0}' is not part of the header")]
    UnknownAttribute(String),

    #[error("attribute index {index} is out of range for {count} input attributes")]
    AttributeIndexOutOfRange { index: usize, count: usize },

    #[error("row has no value for attribute '{attribute}' (index {index})")]
    MissingValue { attribute: String, index: usize },
}
