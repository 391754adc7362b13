use std::collections::HashMap;

/// A categorical attribute together with its value domain.
///
/// Values keep the order in which they were declared (ARFF) or first observed
/// (row literals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let mut attribute = NominalAttribute::new(name);
        for value in values {
            attribute.add_value(&value);
        }
        attribute
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `value` in the domain, returning its index. Known values are not duplicated.
    pub fn add_value(&mut self, value: &str) -> usize {
        if let Some(&idx) = self.label_to_index.get(value) {
            return idx;
        }
        let idx = self.values.len();
        self.values.push(value.to_string());
        self.label_to_index.insert(value.to_string(), idx);
        idx
    }

    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.label_to_index.get(value).copied()
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.label_to_index.contains_key(value)
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn arff_representation(&self) -> String {
        format!("@attribute {} {{ {} }}", self.name, self.values.join(", "))
    }
}
