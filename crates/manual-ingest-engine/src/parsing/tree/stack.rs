use crate::models::Node;

/// Ancestor chain of open nodes above a finished forest.
///
/// The bottom of the chain is the synthetic root (indentation -1): `roots`.
/// Each open node is attached to its parent when it is closed, so a node's
/// children are always complete before the node is moved into place.
#[derive(Debug, Default)]
pub struct IndentStack {
    roots: Vec<Node>,
    open: Vec<Node>,
}

impl IndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indentation of the innermost open node, `None` at the synthetic root.
    pub fn top_indent(&self) -> Option<usize> {
        self.open.last().map(|node| node.indent)
    }

    pub fn top_mut(&mut self) -> Option<&mut Node> {
        self.open.last_mut()
    }

    /// Closes open nodes while `pred` holds for the innermost one.
    pub fn close_while(&mut self, pred: impl Fn(usize) -> bool) {
        while self.top_indent().is_some_and(&pred) {
            self.close_top();
        }
    }

    /// Opens `node` as the innermost frame.
    pub fn open(&mut self, node: Node) {
        self.open.push(node);
    }

    /// Adds finished nodes to the innermost frame's children.
    pub fn append(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.children_mut().extend(nodes);
    }

    pub fn finish(mut self) -> Vec<Node> {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.roots
    }

    /// Closes the innermost open node, if any.
    pub fn close_top(&mut self) {
        if let Some(node) = self.open.pop() {
            self.children_mut().push(node);
        }
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.roots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_finishes_empty() {
        assert!(IndentStack::new().finish().is_empty());
    }

    #[test]
    fn closing_attaches_to_parent_in_order() {
        let mut stack = IndentStack::new();
        stack.open(Node::new("parent", 0));
        stack.open(Node::new("first", 2));
        stack.close_while(|indent| indent >= 2);
        stack.open(Node::new("second", 2));

        let roots = stack.finish();
        assert_eq!(roots.len(), 1);
        let titles: Vec<_> = roots[0].children.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn close_while_stops_at_synthetic_root() {
        let mut stack = IndentStack::new();
        stack.open(Node::new("a", 0));
        stack.close_while(|_| true);
        assert_eq!(stack.top_indent(), None);
        assert_eq!(stack.finish().len(), 1);
    }

    #[test]
    fn append_goes_to_innermost_open_node() {
        let mut stack = IndentStack::new();
        stack.open(Node::new("a", 0));
        stack.append([Node::new("x", 4), Node::new("y", 4)]);

        let roots = stack.finish();
        assert_eq!(roots[0].children.len(), 2);
    }
}
