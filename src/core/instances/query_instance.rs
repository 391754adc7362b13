use crate::core::instances::DenseInstance;

/// A row to classify. The expected label is present when the query source
/// carried one (for accuracy reporting) and absent otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInstance {
    values: Vec<String>,
    expected: Option<String>,
}

impl QueryInstance {
    pub fn new(values: Vec<String>, expected: Option<String>) -> QueryInstance {
        QueryInstance { values, expected }
    }

    pub fn unlabeled<S: AsRef<str>>(values: &[S]) -> QueryInstance {
        QueryInstance::new(values.iter().map(|v| v.as_ref().to_string()).collect(), None)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn is_labeled(&self) -> bool {
        self.expected.is_some()
    }
}

impl From<DenseInstance> for QueryInstance {
    fn from(instance: DenseInstance) -> Self {
        QueryInstance::new(
            instance.attribute_values().to_vec(),
            Some(instance.label().to_string()),
        )
    }
}
