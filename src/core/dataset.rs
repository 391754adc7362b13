use crate::core::attributes::NominalAttribute;
use crate::core::errors::DatasetError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

/// An ordered, arity-checked collection of labeled rows sharing one header.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(
        header: Arc<InstanceHeader>,
        instances: Vec<DenseInstance>,
    ) -> Result<Dataset, DatasetError> {
        let expected = header.number_of_input_attributes();
        for (row, instance) in instances.iter().enumerate() {
            if instance.number_of_attributes() != expected {
                return Err(DatasetError::ArityMismatch {
                    row,
                    expected: expected + 1,
                    found: instance.number_of_attributes() + 1,
                });
            }
        }
        Ok(Dataset { header, instances })
    }

    /// Builds a dataset from row literals whose last value is the label.
    /// Attribute domains are collected in first-seen order.
    pub fn from_rows<S: AsRef<str>, R: AsRef<[S]>>(
        relation_name: &str,
        attribute_names: &[&str],
        class_name: &str,
        rows: &[R],
    ) -> Result<Dataset, DatasetError> {
        let mut attributes: Vec<NominalAttribute> = attribute_names
            .iter()
            .chain(std::iter::once(&class_name))
            .map(|name| NominalAttribute::new(name.to_string()))
            .collect();

        let mut instances = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != attributes.len() {
                return Err(DatasetError::ArityMismatch {
                    row: idx,
                    expected: attributes.len(),
                    found: row.len(),
                });
            }
            for (attribute, value) in attributes.iter_mut().zip(row) {
                attribute.add_value(value.as_ref());
            }
            let values: Vec<String> = row.iter().map(|v| v.as_ref().to_string()).collect();
            if let Some(instance) = DenseInstance::from_row(values) {
                instances.push(instance);
            }
        }

        let header = InstanceHeader::new(relation_name.to_string(), attributes)?;
        Dataset::new(Arc::new(header), instances)
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DenseInstance> {
        self.instances.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DenseInstance;
    type IntoIter = std::slice::Iter<'a, DenseInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}
