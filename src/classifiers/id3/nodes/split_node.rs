use crate::classifiers::id3::nodes::node::Node;
use crate::core::{DatasetError, InstanceHeader};

/// One outgoing edge of a [`SplitNode`], keyed by an observed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    value: String,
    child: Node,
}

impl Branch {
    pub fn new(value: String, child: Node) -> Self {
        Self { value, child }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn child(&self) -> &Node {
        &self.child
    }
}

/// Internal node testing one nominal attribute with a multiway split.
///
/// `default_label` is the majority label of the training rows that reached
/// this node and answers queries whose value has no branch here.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    attribute_name: String,
    default_label: String,
    branches: Vec<Branch>,
}

impl SplitNode {
    pub fn new(attribute_name: String, default_label: String, branches: Vec<Branch>) -> Self {
        Self {
            attribute_name,
            default_label,
            branches,
        }
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn num_children(&self) -> usize {
        self.branches.len()
    }

    pub fn get_child(&self, value: &str) -> Option<&Node> {
        self.branches
            .iter()
            .find(|branch| branch.value == value)
            .map(Branch::child)
    }

    /// Child matching the query's value for this node's attribute, or `None`
    /// when that value was never observed here.
    pub fn instance_child<S: AsRef<str>>(
        &self,
        header: &InstanceHeader,
        values: &[S],
    ) -> Result<Option<&Node>, DatasetError> {
        let index = header
            .index_of_attribute(&self.attribute_name)
            .ok_or_else(|| DatasetError::UnknownAttribute(self.attribute_name.clone()))?;
        let value = values.get(index).ok_or_else(|| DatasetError::MissingValue {
            attribute: self.attribute_name.clone(),
            index,
        })?;
        Ok(self.get_child(value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;

    fn header() -> std::sync::Arc<InstanceHeader> {
        Dataset::from_rows("toy", &["F1", "F2"], "class", &[["A", "X", "Yes"]])
            .unwrap()
            .header()
            .clone()
    }

    fn node() -> SplitNode {
        SplitNode::new(
            "F2".into(),
            "Yes".into(),
            vec![
                Branch::new("X".into(), Node::leaf("Yes")),
                Branch::new("Y".into(), Node::leaf("No")),
            ],
        )
    }

    #[test]
    fn get_child_by_value() {
        let n = node();
        assert_eq!(n.num_children(), 2);
        assert_eq!(n.get_child("Y"), Some(&Node::leaf("No")));
        assert_eq!(n.get_child("Z"), None);
    }

    #[test]
    fn instance_child_routes_by_header_position() {
        let n = node();
        let h = header();
        assert_eq!(n.instance_child(&h, &["B", "X"]).unwrap(), Some(&Node::leaf("Yes")));
        assert_eq!(n.instance_child(&h, &["B", "W"]).unwrap(), None);
    }

    #[test]
    fn instance_child_reports_short_rows() {
        let n = node();
        let h = header();
        let err = n.instance_child(&h, &["B"]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::MissingValue {
                attribute: "F2".into(),
                index: 1
            }
        );
    }

    #[test]
    fn instance_child_reports_unknown_attribute() {
        let n = SplitNode::new("Colour".into(), "Yes".into(), vec![]);
        let h = header();
        let err = n.instance_child(&h, &["A", "X"]).unwrap_err();
        assert_eq!(err, DatasetError::UnknownAttribute("Colour".into()));
    }
}
