use crate::classifiers::id3::nodes::split_node::SplitNode;
use crate::core::{DatasetError, InstanceHeader};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf { label: String },
    Split(SplitNode),
}

impl Node {
    pub fn leaf(label: impl Into<String>) -> Self {
        Node::Leaf {
            label: label.into(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Walks `values` down to a leaf.
    ///
    /// At a split whose attribute value has no branch, the split's default
    /// label is returned instead of descending further.
    pub fn predict<'n, S: AsRef<str>>(
        &'n self,
        header: &InstanceHeader,
        values: &[S],
    ) -> Result<&'n str, DatasetError> {
        match self {
            Node::Leaf { label } => Ok(label.as_str()),
            Node::Split(split) => match split.instance_child(header, values)? {
                Some(child) => child.predict(header, values),
                None => {
                    trace!(
                        attribute = split.attribute_name(),
                        default = split.default_label(),
                        "unseen value, falling back to node default"
                    );
                    Ok(split.default_label())
                }
            },
        }
    }

    /// Number of split levels on the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split(split) => {
                1 + split
                    .branches()
                    .iter()
                    .map(|b| b.child().depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn decision_node_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split(split) => {
                1 + split
                    .branches()
                    .iter()
                    .map(|b| b.child().decision_node_count())
                    .sum::<usize>()
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split(split) => split
                .branches()
                .iter()
                .map(|b| b.child().leaf_count())
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::id3::nodes::Branch;
    use crate::core::Dataset;
    use std::sync::Arc;

    fn header() -> Arc<InstanceHeader> {
        Dataset::from_rows("toy", &["F1", "F2"], "class", &[["A", "X", "Yes"]])
            .unwrap()
            .header()
            .clone()
    }

    // F1 = A -> (F2 = X -> Yes, F2 = Y -> No), F1 = B -> Yes
    fn tree() -> Node {
        Node::Split(SplitNode::new(
            "F1".into(),
            "Yes".into(),
            vec![
                Branch::new(
                    "A".into(),
                    Node::Split(SplitNode::new(
                        "F2".into(),
                        "Yes".into(),
                        vec![
                            Branch::new("X".into(), Node::leaf("Yes")),
                            Branch::new("Y".into(), Node::leaf("No")),
                        ],
                    )),
                ),
                Branch::new("B".into(), Node::leaf("Yes")),
            ],
        ))
    }

    #[test]
    fn leaf_predicts_its_label_for_any_row() {
        let h = header();
        let leaf = Node::leaf("Ya");
        assert_eq!(leaf.predict(&h, &["whatever", "else"]).unwrap(), "Ya");
        let empty: [&str; 0] = [];
        assert_eq!(leaf.predict(&h, &empty).unwrap(), "Ya");
    }

    #[test]
    fn predict_follows_matching_branches() {
        let h = header();
        let t = tree();
        assert_eq!(t.predict(&h, &["A", "X"]).unwrap(), "Yes");
        assert_eq!(t.predict(&h, &["A", "Y"]).unwrap(), "No");
        assert_eq!(t.predict(&h, &["B", "Y"]).unwrap(), "Yes");
    }

    #[test]
    fn predict_falls_back_to_default_on_unseen_value() {
        let h = header();
        let t = tree();
        assert_eq!(t.predict(&h, &["C", "Y"]).unwrap(), "Yes");
        assert_eq!(t.predict(&h, &["A", "Z"]).unwrap(), "Yes");
    }

    #[test]
    fn predict_accepts_full_labeled_rows() {
        let h = header();
        assert_eq!(tree().predict(&h, &["A", "Y", "ignored"]).unwrap(), "No");
    }

    #[test]
    fn counts_and_depth() {
        let t = tree();
        assert_eq!(t.depth(), 2);
        assert_eq!(t.decision_node_count(), 2);
        assert_eq!(t.leaf_count(), 3);
        assert!(!t.is_leaf());
        assert_eq!(Node::leaf("x").depth(), 0);
    }
}
