//! # Manual Parsing
//!
//! Sequential pipeline from the lines of one exported manual to a
//! [`ManualDocument`]:
//!
//! 1. **Header** (`header`): line 0 yields identifier, title and grade, then
//!    the override table is applied.
//! 2. **Shape**: callout-only documents go straight to `callout_only` and
//!    skip everything below.
//! 3. **Sections** (`sections`): the remaining lines are partitioned at
//!    `## [<label>]` headings.
//! 4. **Trees** (`tree`): entry, guide and notes lines are built into node
//!    forests.

pub mod callout_only;
pub mod header;
pub mod markers;
pub mod sections;
pub mod tree;

#[cfg(test)]
pub(crate) mod tests;

use thiserror::Error;

use crate::models::{CALLOUT_ONLY_OVERVIEW, Grade, ManualDocument, Node, OverrideTable};

pub use header::Header;
pub use sections::{SectionSplit, split_sections};
pub use tree::build_tree;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Document is empty")]
    EmptyDocument,
    #[error("Unrecognized title line: {line:?}")]
    UnrecognizedHeader { line: String },
}

/// Parses the full text of an exported manual.
pub fn parse_manual(text: &str, overrides: &OverrideTable) -> Result<ManualDocument, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, overrides)
}

/// Parses a manual already split into lines. Line 0 must be the header.
pub fn parse_lines<S: AsRef<str>>(
    lines: &[S],
    overrides: &OverrideTable,
) -> Result<ManualDocument, ParseError> {
    let (first, body) = lines.split_first().ok_or(ParseError::EmptyDocument)?;
    let first = first.as_ref();

    let header = Header::parse(first).ok_or_else(|| ParseError::UnrecognizedHeader {
        line: first.trim_end().to_string(),
    })?;
    let mut doc = header.into_document(overrides);

    if overrides.is_callout_only(&doc.id) {
        log::debug!("{}: callout-only document", doc.id);
        doc.callout_only_mode = true;
        doc.callouts = Some(callout_only::extract_callouts(body));
        doc.overview = CALLOUT_ONLY_OVERVIEW.to_string();
        return Ok(doc);
    }

    log::debug!("{}: splitting sections", doc.id);
    let split = split_sections(body, &overrides.headings_for(&doc.id));

    doc.entry_method_security_level = section_security_level(&split.entry_text);
    doc.special_notes_security_level = section_security_level(&split.notes_text);
    doc.overview = split.overview;
    doc.entry_method = split.entry_text;
    doc.special_notes = split.notes_text;
    doc.exploration_guide = build_tree(&split.guide_lines);
    doc.entry_nodes = optional_tree(&split.entry_lines);
    doc.special_note_nodes = optional_tree(&split.note_lines);

    Ok(doc)
}

/// Raising a section to `C` on the restricted marker is a rule of this crate; earlier
/// records kept both section levels at `D`.
fn section_security_level(raw: &str) -> Grade {
    if raw.contains(markers::RESTRICTED_MARKER) {
        Grade::RESTRICTED
    } else {
        Grade::default()
    }
}

/// A forest only when the section had lines and they produced a node.
fn optional_tree(lines: &[String]) -> Option<Vec<Node>> {
    if lines.is_empty() {
        return None;
    }
    let nodes = build_tree(lines);
    (!nodes.is_empty()).then_some(nodes)
}
