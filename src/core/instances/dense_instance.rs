/// A labeled training row: nominal attribute values plus the trailing class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseInstance {
    values: Vec<String>,
    label: String,
}

impl DenseInstance {
    pub fn new(values: Vec<String>, label: String) -> DenseInstance {
        DenseInstance { values, label }
    }

    /// Splits a full row into attribute values and the trailing label.
    /// Returns `None` for an empty row.
    pub fn from_row(mut row: Vec<String>) -> Option<DenseInstance> {
        let label = row.pop()?;
        Some(DenseInstance::new(row, label))
    }

    pub fn value_at_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn attribute_values(&self) -> &[String] {
        &self.values
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    /// Attribute values followed by the label.
    pub fn to_vec(&self) -> Vec<String> {
        let mut row = self.values.clone();
        row.push(self.label.clone());
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn from_row_takes_last_value_as_label() {
        let inst = DenseInstance::from_row(row(&["Oppo", "6GB", "Ya"])).unwrap();
        assert_eq!(inst.label(), "Ya");
        assert_eq!(inst.attribute_values(), &row(&["Oppo", "6GB"])[..]);
        assert_eq!(inst.number_of_attributes(), 2);
        assert_eq!(inst.to_vec(), row(&["Oppo", "6GB", "Ya"]));
    }

    #[test]
    fn from_empty_row_is_none() {
        assert!(DenseInstance::from_row(Vec::new()).is_none());
    }

    #[test]
    fn value_at_index_out_of_bounds_is_none() {
        let inst = DenseInstance::new(row(&["a"]), "x".into());
        assert_eq!(inst.value_at_index(0), Some("a"));
        assert_eq!(inst.value_at_index(1), None);
    }
}
