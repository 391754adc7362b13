pub mod class_distribution;
pub mod id3_tree;
pub mod nodes;
pub mod split_criteria;
pub mod splitter;
pub mod tree_builder;
pub mod tree_printer;

pub use class_distribution::{ClassDistribution, entropy, majority_label};
pub use id3_tree::DecisionTree;
pub use nodes::{Branch, Node, SplitNode};
pub use splitter::{distinct_values, split_rows};
pub use tree_builder::{TreeBuilder, build_tree};
pub use tree_printer::TreePrinter;
