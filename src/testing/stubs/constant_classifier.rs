use crate::classifiers::Classifier;
use crate::core::{DatasetError, InstanceHeader};
use std::sync::Arc;

/// Answers every query with the same label.
pub struct ConstantClassifier {
    header: Arc<InstanceHeader>,
    label: String,
}

impl ConstantClassifier {
    pub fn new(header: Arc<InstanceHeader>, label: &str) -> Self {
        Self {
            header,
            label: label.to_string(),
        }
    }
}

impl Classifier for ConstantClassifier {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn predict_values(&self, _values: &[String]) -> Result<String, DatasetError> {
        Ok(self.label.clone())
    }
}
