use crate::models::Node;
use crate::parsing::markers::Callout;

use super::{build_tree, classify::leading_whitespace};

/// The interior of one `<aside>` ... `</aside>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutBlock<'a> {
    /// Indentation of the opening delimiter line.
    pub indent: usize,
    /// Non-blank lines between the delimiters, untrimmed.
    pub interior: Vec<&'a str>,
    /// Index of the first line after the closing delimiter.
    pub resume_at: usize,
    /// False when input ended before a closing delimiter.
    pub closed: bool,
}

impl<'a> CalloutBlock<'a> {
    /// Collects the block opened at `lines[open_at]`.
    ///
    /// An unmatched opener consumes everything to the end of `lines`.
    pub fn collect<S: AsRef<str>>(lines: &'a [S], open_at: usize) -> Self {
        let indent = lines
            .get(open_at)
            .map(|line| leading_whitespace(line.as_ref()))
            .unwrap_or_default();

        let mut interior = Vec::new();
        let mut closed = false;
        let mut i = open_at + 1;
        while i < lines.len() {
            let line = lines[i].as_ref();
            if Callout::closes(line) {
                closed = true;
                break;
            }
            if !line.trim().is_empty() {
                interior.push(line);
            }
            i += 1;
        }

        Self {
            indent,
            interior,
            resume_at: (i + 1).min(lines.len()),
            closed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.interior.is_empty()
    }

    /// Builds the interior as its own forest and flags its top-level nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        let mut nodes = build_tree(&self.interior);
        for node in &mut nodes {
            node.is_callout = true;
        }
        nodes
    }
}
