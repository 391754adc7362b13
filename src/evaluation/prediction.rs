use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One classified query: its attribute values, the predicted label and the
/// expected label when the query carried one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub values: Vec<String>,
    pub predicted: String,
    pub actual: Option<String>,
}

impl Prediction {
    pub fn new(values: Vec<String>, predicted: String, actual: Option<String>) -> Self {
        Self {
            values,
            predicted,
            actual,
        }
    }

    /// `None` for unlabeled queries.
    pub fn is_correct(&self) -> Option<bool> {
        self.actual.as_deref().map(|actual| actual == self.predicted)
    }

    /// Writes `['v1', 'v2', ...]`.
    pub(crate) fn fmt_values(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{value}'")?;
        }
        write!(f, "]")
    }
}

impl Display for Prediction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.fmt_values(f)?;
        write!(f, " -> {}", self.predicted)?;
        if let Some(actual) = &self.actual {
            write!(f, " (expected {actual})")?;
        }
        Ok(())
    }
}
