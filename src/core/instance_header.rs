use crate::core::attributes::NominalAttribute;
use crate::core::errors::DatasetError;
use std::fmt;

/// Attribute name table for a dataset.
///
/// Input attributes occupy indices `0..class_index`; the class attribute is
/// always the last one. A trained tree keeps the header it was built with and
/// resolves attribute names through it at prediction time.
#[derive(Clone, PartialEq, Eq)]
pub struct InstanceHeader {
    relation_name: String,
    attributes: Vec<NominalAttribute>,
    class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<NominalAttribute>,
    ) -> Result<InstanceHeader, DatasetError> {
        let class_index = attributes
            .len()
            .checked_sub(1)
            .ok_or(DatasetError::EmptyHeader)?;
        for (i, attr) in attributes.iter().enumerate() {
            if attributes[..i].iter().any(|earlier| earlier.name == attr.name) {
                return Err(DatasetError::DuplicateAttribute(attr.name.clone()));
            }
        }
        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn attributes(&self) -> &[NominalAttribute] {
        &self.attributes
    }

    /// Number of declared attributes, class included.
    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn number_of_input_attributes(&self) -> usize {
        self.class_index
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.attributes[self.class_index]
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute().number_of_values()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index)
    }

    /// Looks `name` up among the input attributes only.
    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.input_attributes().iter().position(|attr| attr.name == name)
    }

    pub fn input_attributes(&self) -> &[NominalAttribute] {
        &self.attributes[..self.class_index]
    }

    pub fn input_attribute_indices(&self) -> Vec<usize> {
        (0..self.class_index).collect()
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.input_attributes().iter().map(|attr| attr.name())
    }

    /// Resolves attribute names to indices, preserving the given order.
    pub fn indices_of_attributes<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<Vec<usize>, DatasetError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.index_of_attribute(name)
                    .ok_or_else(|| DatasetError::UnknownAttribute(name.to_string()))
            })
            .collect()
    }
}

impl fmt::Debug for InstanceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceHeader")
            .field("relation_name", &self.relation_name)
            .field("class_index", &self.class_index)
            .field("n_attributes", &self.attributes.len())
            .finish()
    }
}
