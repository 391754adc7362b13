use crate::classifiers::Classifier;
use crate::core::{DatasetError, InstanceHeader};
use std::sync::Arc;

/// Rejects every query as if the row were missing its first attribute.
pub struct FailingClassifier {
    header: Arc<InstanceHeader>,
}

impl FailingClassifier {
    pub fn new(header: Arc<InstanceHeader>) -> Self {
        Self { header }
    }
}

impl Classifier for FailingClassifier {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn predict_values(&self, _values: &[String]) -> Result<String, DatasetError> {
        let attribute = self
            .header
            .attribute_names()
            .next()
            .unwrap_or_default()
            .to_string();
        Err(DatasetError::MissingValue {
            attribute,
            index: 0,
        })
    }
}
