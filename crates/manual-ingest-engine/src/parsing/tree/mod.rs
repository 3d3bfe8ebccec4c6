//! # Indent Tree Building
//!
//! Turns the lines of one section (or of one callout interior) into an ordered
//! forest of [`Node`]s.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each non-blank line yields a
//!    [`LineClass`] with its indentation, trimmed text and, if it starts a
//!    node, the node title.
//! 2. **Tree Construction** (`builder`): a [`TreeBuilder`] keeps an explicit
//!    [`IndentStack`] of open nodes and attaches nodes and continuation text
//!    by indentation.
//!
//! Callout blocks (`callout`) are the one place that recurses: their interior
//! is built as a separate forest and spliced into the surrounding tree.
//!
//! ## Key Invariants
//!
//! - Depth of ordinary nesting is bounded by input size, not the call stack
//! - A node's indentation is fixed when it is opened
//! - Children keep source order
//! - Every continuation line lands in exactly one node, or is dropped when no
//!   node is open yet

pub mod builder;
pub mod callout;
pub mod classify;
pub mod stack;

pub use builder::TreeBuilder;
pub use callout::CalloutBlock;
pub use classify::LineClass;
pub use stack::IndentStack;

use crate::models::Node;
use crate::parsing::markers::Callout;

/// Builds the forest for an ordered list of lines.
pub fn build_tree<S: AsRef<str>>(lines: &[S]) -> Vec<Node> {
    let mut builder = TreeBuilder::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();

        if Callout::opens(line) {
            let block = CalloutBlock::collect(lines, i);
            i = block.resume_at;
            builder.splice(block);
            continue;
        }

        if let Some(class) = LineClass::classify(line) {
            builder.push(&class);
        }
        i += 1;
    }

    builder.finish()
}
