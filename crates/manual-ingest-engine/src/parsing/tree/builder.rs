use crate::models::Node;

use super::{callout::CalloutBlock, classify::LineClass, stack::IndentStack};

/// State machine that turns classified lines into a forest of nodes.
pub struct TreeBuilder {
    stack: IndentStack,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            stack: IndentStack::new(),
        }
    }

    pub fn push(&mut self, line: &LineClass) {
        let indent = line.indent;

        // Back out to the ancestor level of this line.
        self.stack.close_while(|top| top > indent);

        // A node at the same level replaces its sibling instead of nesting.
        if line.starts_node() && self.stack.top_indent() == Some(indent) {
            self.stack.close_top();
        }

        match line.title {
            Some(title) => self.stack.open(Node::new(title, indent)),
            None => {
                // Text before the first node has nowhere to go.
                if let Some(node) = self.stack.top_mut() {
                    node.append_content(line.continuation_text());
                }
            }
        }
    }

    /// Attaches a callout's nodes under the nearest node indented strictly
    /// less than the opening delimiter.
    pub fn splice(&mut self, block: CalloutBlock<'_>) {
        if block.is_empty() {
            return;
        }
        let indent = block.indent;
        let nodes = block.into_nodes();
        self.stack.close_while(|top| top >= indent);
        self.stack.append(nodes);
    }

    pub fn finish(self) -> Vec<Node> {
        self.stack.finish()
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
