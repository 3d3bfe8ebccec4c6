use serde::{Deserialize, Serialize};

use super::{Grade, RESTRICTED_MARKER};

/// A titled element of a manual's structured content.
///
/// Each node exclusively owns its children, so a forest of nodes is acyclic
/// by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Single-line title as it appeared in the source (list marker removed).
    pub title: String,
    /// Continuation lines joined with `\n`, in encounter order.
    pub content: String,
    /// Child nodes in document order.
    pub children: Vec<Node>,
    /// Set on the top-level nodes produced from the interior of a callout block.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_callout: bool,
    /// Present iff the restricted marker was seen in the title or content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_level: Option<Grade>,
    /// Leading whitespace of the line that opened this node. Fixed at creation.
    #[serde(skip)]
    pub indent: usize,
}

impl Node {
    /// Creates a node for a title line, tagging it when the title is restricted.
    pub fn new(title: impl Into<String>, indent: usize) -> Self {
        let title = title.into();
        let security_level = title.contains(RESTRICTED_MARKER).then_some(Grade::RESTRICTED);
        Self {
            title,
            content: String::new(),
            children: Vec::new(),
            is_callout: false,
            security_level,
            indent,
        }
    }

    /// Appends one continuation line to the content.
    pub fn append_content(&mut self, text: &str) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(text);

        if text.contains(RESTRICTED_MARKER) {
            self.security_level = Some(Grade::RESTRICTED);
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.security_level == Some(Grade::RESTRICTED)
    }

    /// Depth-first, pre-order walk over this node and all of its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            pending.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

impl Drop for Node {
    /// Releases descendants from an explicit worklist so depth never grows the call stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
