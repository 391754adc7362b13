use crate::core::{DatasetError, InstanceHeader};

pub trait Classifier {
    /// Header whose attribute order the classifier expects in query rows.
    fn header(&self) -> &InstanceHeader;
    fn predict_values(&self, values: &[String]) -> Result<String, DatasetError>;
}
