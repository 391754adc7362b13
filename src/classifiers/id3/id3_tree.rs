use crate::classifiers::Classifier;
use crate::classifiers::id3::nodes::Node;
use crate::classifiers::id3::tree_builder::build_tree;
use crate::classifiers::id3::tree_printer::TreePrinter;
use crate::core::{Dataset, DatasetError, InstanceHeader};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// A trained ID3 tree together with the header it was trained on.
///
/// The tree never changes after `fit`, so a shared reference can serve
/// predictions from many threads at once.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    header: Arc<InstanceHeader>,
    root: Node,
}

impl DecisionTree {
    /// Trains on every input attribute of `dataset`.
    pub fn fit(dataset: &Dataset) -> Result<Self, DatasetError> {
        Self::fit_on_attributes(dataset, &dataset.header().input_attribute_indices())
    }

    /// Trains using only the attributes at `attributes` as split candidates.
    /// Their order decides which attribute wins an exact gain tie.
    pub fn fit_on_attributes(
        dataset: &Dataset,
        attributes: &[usize],
    ) -> Result<Self, DatasetError> {
        if dataset.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        let header = Arc::clone(dataset.header());
        let root = build_tree(dataset.instances(), attributes, &header)?;
        let tree = Self { header, root };
        info!(
            relation = tree.header.relation_name(),
            rows = dataset.len(),
            candidates = attributes.len(),
            depth = tree.depth(),
            decision_nodes = tree.decision_node_count(),
            leaves = tree.leaf_count(),
            "trained decision tree"
        );
        Ok(tree)
    }

    pub fn fit_on_named_attributes<S: AsRef<str>>(
        dataset: &Dataset,
        names: &[S],
    ) -> Result<Self, DatasetError> {
        let attributes = dataset.header().indices_of_attributes(names)?;
        Self::fit_on_attributes(dataset, &attributes)
    }

    /// Predicts the label of `values`, given in header attribute order. A
    /// trailing label, if present, is ignored.
    pub fn predict<S: AsRef<str>>(&self, values: &[S]) -> Result<&str, DatasetError> {
        self.root.predict(&self.header, values)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn decision_node_count(&self) -> usize {
        self.root.decision_node_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn render(&self, printer: TreePrinter) -> String {
        printer.render(&self.root)
    }
}

impl Classifier for DecisionTree {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn predict_values(&self, values: &[String]) -> Result<String, DatasetError> {
        self.predict(values).map(str::to_string)
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::new().write(f, &self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{smartphone, smartphone_extended, smartphone_queries};

    fn toy() -> Dataset {
        Dataset::from_rows(
            "toy",
            &["F1", "F2"],
            "class",
            &[
                ["A", "X", "Yes"],
                ["A", "Y", "No"],
                ["B", "X", "Yes"],
                ["B", "Y", "Yes"],
            ],
        )
        .unwrap()
    }

    #[test]
    fn toy_exact_match_and_unseen_value() {
        let tree = DecisionTree::fit(&toy()).unwrap();
        assert_eq!(tree.predict(&["A", "X"]).unwrap(), "Yes");
        assert_eq!(tree.predict(&["A", "Y"]).unwrap(), "No");
        assert_eq!(tree.predict(&["C", "X"]).unwrap(), "Yes");
    }

    #[test]
    fn single_label_training_always_predicts_that_label() {
        let ds = Dataset::from_rows(
            "one",
            &["F1", "F2"],
            "class",
            &[["A", "X", "Ya"], ["B", "Y", "Ya"], ["C", "X", "Ya"]],
        )
        .unwrap();
        let tree = DecisionTree::fit(&ds).unwrap();
        assert!(tree.root().is_leaf());
        for query in [["A", "X"], ["Q", "Z"], ["", ""]] {
            assert_eq!(tree.predict(&query).unwrap(), "Ya");
        }
    }

    #[test]
    fn smartphone_regression_fixture() {
        let tree = DecisionTree::fit(&smartphone().unwrap()).unwrap();
        assert_eq!(tree.predict(&["Oppo", "6GB", "64GB", "Murah"]).unwrap(), "Tidak");

        let predicted: Vec<_> = smartphone_queries()
            .iter()
            .map(|q| tree.predict(q.values()).unwrap().to_string())
            .collect();
        assert_eq!(predicted, vec!["Tidak", "Ya", "Tidak", "Tidak", "Tidak"]);
    }

    #[test]
    fn smartphone_unseen_values_use_node_defaults() {
        let tree = DecisionTree::fit(&smartphone().unwrap()).unwrap();
        // Unknown brand under Harga = Murah: majority of the Murah rows.
        assert_eq!(tree.predict(&["Nokia", "4GB", "64GB", "Murah"]).unwrap(), "Tidak");
        // Oppo + Murah splits on RAM; 12GB is unseen, Oppo/Murah rows tie and Ya came first.
        assert_eq!(tree.predict(&["Oppo", "12GB", "64GB", "Murah"]).unwrap(), "Ya");
        // Unseen root value: root default.
        assert_eq!(tree.predict(&["Oppo", "6GB", "64GB", "Gratis"]).unwrap(), "Ya");
    }

    #[test]
    fn smartphone_tree_renders_expected_shape() {
        let tree = DecisionTree::fit(&smartphone().unwrap()).unwrap();
        let expected = "\
[Harga = Mahal]
  [RAM = 6GB]
    --> Ya
  [RAM = 8GB]
    [Brand = iPhone]
      --> Ya
    [Brand = Samsung]
      --> Tidak
  [RAM = 4GB]
    --> Tidak
[Harga = Murah]
  [Brand = Samsung]
    --> Tidak
  [Brand = Xiaomi]
    --> Tidak
  [Brand = Oppo]
    [RAM = 4GB]
      --> Ya
    [RAM = 6GB]
      --> Tidak
[Harga = Sedang]
  --> Ya
";
        assert_eq!(tree.to_string(), expected);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.decision_node_count(), 5);
        assert_eq!(tree.leaf_count(), 9);
    }

    #[test]
    fn extended_smartphone_regression() {
        let tree = DecisionTree::fit(&smartphone_extended().unwrap()).unwrap();
        match tree.root() {
            Node::Split(root) => {
                assert_eq!(root.attribute_name(), "RAM");
                assert_eq!(root.default_label(), "Ya");
            }
            Node::Leaf { .. } => panic!("expected a split at the root"),
        }
        let predicted: Vec<_> = smartphone_queries()
            .iter()
            .map(|q| tree.predict(q.values()).unwrap().to_string())
            .collect();
        assert_eq!(predicted, vec!["Tidak", "Ya", "Tidak", "Tidak", "Tidak"]);
        assert!(tree.depth() <= tree.header().number_of_input_attributes());
    }

    #[test]
    fn restricting_attributes_limits_splits() {
        let ds = smartphone().unwrap();
        let tree = DecisionTree::fit_on_named_attributes(&ds, &["Brand"]).unwrap();
        assert!(tree.depth() <= 1);
        match tree.root() {
            Node::Split(root) => assert_eq!(root.attribute_name(), "Brand"),
            Node::Leaf { .. } => panic!("expected Brand split"),
        }

        let err = DecisionTree::fit_on_named_attributes(&ds, &["Colour"]).unwrap_err();
        assert_eq!(err, DatasetError::UnknownAttribute("Colour".into()));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let rows: Vec<[&str; 2]> = Vec::new();
        let ds = Dataset::from_rows("e", &["F1"], "class", &rows).unwrap();
        assert_eq!(DecisionTree::fit(&ds).unwrap_err(), DatasetError::EmptyDataset);
    }

    #[test]
    fn short_query_is_an_error_not_a_panic() {
        let tree = DecisionTree::fit(&toy()).unwrap();
        let empty: [&str; 0] = [];
        assert!(matches!(
            tree.predict(&empty),
            Err(DatasetError::MissingValue { index: 0, .. })
        ));
    }

    #[test]
    fn classifier_trait_returns_owned_label() {
        let tree = DecisionTree::fit(&toy()).unwrap();
        let classifier: &dyn Classifier = &tree;
        assert_eq!(
            classifier.predict_values(&["B".into(), "Y".into()]).unwrap(),
            "Yes"
        );
        assert_eq!(classifier.header().relation_name(), "toy");
    }

    #[test]
    fn tree_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecisionTree>();

        let tree = DecisionTree::fit(&smartphone().unwrap()).unwrap();
        let queries = smartphone_queries();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        queries
                            .iter()
                            .map(|q| tree.predict(q.values()).unwrap().to_string())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), vec!["Tidak", "Ya", "Tidak", "Tidak", "Tidak"]);
            }
        });
    }
}
