use crate::classifiers::id3::nodes::Node;
use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// Renders a tree depth-first as `[attribute = value]` lines, leaves as `--> label`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreePrinter {
    show_defaults: bool,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print each split's fallback label as `(default: label)` above its branches.
    pub fn with_defaults(mut self, show_defaults: bool) -> Self {
        self.show_defaults = show_defaults;
        self
    }

    pub fn write<W: Write>(&self, out: &mut W, node: &Node) -> fmt::Result {
        self.write_node(out, node, 0)
    }

    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write(&mut out, node).ok();
        out
    }

    fn write_node<W: Write>(&self, out: &mut W, node: &Node, depth: usize) -> fmt::Result {
        let indent = INDENT.repeat(depth);
        match node {
            Node::Leaf { label } => writeln!(out, "{indent}--> {label}"),
            Node::Split(split) => {
                if self.show_defaults {
                    writeln!(out, "{indent}(default: {})", split.default_label())?;
                }
                for branch in split.branches() {
                    writeln!(
                        out,
                        "{indent}[{} = {}]",
                        split.attribute_name(),
                        branch.value()
                    )?;
                    self.write_node(out, branch.child(), depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::new().write(f, self)
    }
}
