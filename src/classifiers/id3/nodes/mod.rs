mod node;
mod split_node;

pub use node::Node;
pub use split_node::{Branch, SplitNode};
