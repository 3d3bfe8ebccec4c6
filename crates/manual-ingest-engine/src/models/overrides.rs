use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Grade, Status};

/// One of the four named regions of a manual body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Overview,
    Entry,
    Guide,
    Notes,
}

/// Maps a `## [<label>]` heading onto a section. Matching is by substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingLabel {
    pub label: String,
    pub section: SectionKind,
}

impl HeadingLabel {
    pub fn new(label: impl Into<String>, section: SectionKind) -> Self {
        Self {
            label: label.into(),
            section,
        }
    }

    pub fn matches(&self, heading: &str) -> bool {
        heading.contains(self.label.as_str())
    }
}

/// Labels every document understands, checked before any per-document label.
pub fn canonical_headings() -> Vec<HeadingLabel> {
    vec![
        HeadingLabel::new("1. 개요", SectionKind::Overview),
        HeadingLabel::new("2. 진입 방법", SectionKind::Entry),
        HeadingLabel::new("3. 탐사 가이드", SectionKind::Guide),
        HeadingLabel::new("4. 특이사항", SectionKind::Notes),
    ]
}

/// Per-document adjustments keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// The body is a sequence of callout blocks rather than sections.
    pub callout_only: bool,
    /// Alternate heading spellings for this document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<HeadingLabel>,
}

/// Identifier-keyed override table.
///
/// New documents are onboarded by adding entries here (or in the config
/// file), never by adding conditionals to the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideTable(BTreeMap<String, DocumentOverride>);

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The overrides for documents already known to need them.
    pub fn builtin() -> Self {
        let mut table = Self::new();

        table.insert(
            "Qterw-B-11",
            DocumentOverride {
                department: Some("현장탐사팀 A조".to_string()),
                headings: vec![
                    HeadingLabel::new("2. 진입 방법 (Entry Protocol)", SectionKind::Entry),
                    HeadingLabel::new("3. 탐사 가이드 (Exploration Guide)", SectionKind::Guide),
                    HeadingLabel::new("4. 특이사항 (Special Notes)", SectionKind::Notes),
                ],
                ..Default::default()
            },
        );
        table.insert(
            "Qterw-D-16",
            DocumentOverride {
                headings: vec![
                    HeadingLabel::new("2. 정차역 유형별 분석", SectionKind::Entry),
                    HeadingLabel::new("3. 이레귤러 상황 및 안내방송 대응", SectionKind::Guide),
                ],
                ..Default::default()
            },
        );
        table.insert(
            "Qterw-B-666",
            DocumentOverride {
                callout_only: true,
                ..Default::default()
            },
        );

        table
    }

    pub fn insert(&mut self, id: impl Into<String>, entry: DocumentOverride) {
        self.0.insert(id.into(), entry);
    }

    pub fn get(&self, id: &str) -> Option<&DocumentOverride> {
        self.0.get(id)
    }

    /// Entries from `other` replace entries with the same identifier.
    pub fn extend(&mut self, other: impl IntoIterator<Item = (String, DocumentOverride)>) {
        self.0.extend(other);
    }

    pub fn is_callout_only(&self, id: &str) -> bool {
        self.get(id).is_some_and(|entry| entry.callout_only)
    }

    /// Canonical labels followed by the document's alternates, in match order.
    pub fn headings_for(&self, id: &str) -> Vec<HeadingLabel> {
        let mut labels = canonical_headings();
        if let Some(entry) = self.get(id) {
            labels.extend(entry.headings.iter().cloned());
        }
        labels
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
