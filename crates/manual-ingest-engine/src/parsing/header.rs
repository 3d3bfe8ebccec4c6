use crate::models::{Grade, ManualDocument, OverrideTable};

use super::markers;

/// Fields carried by the leading `# [<id>] <title> 매뉴얼` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: String,
    pub title: String,
    /// From a `(<letter>등급)` tag in the title, if one was present.
    pub grade: Option<Grade>,
}

impl Header {
    /// Parses the title line. Returns `None` when the line is not a manual header.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = markers::header().captures(line)?;
        let id = caps[1].to_string();
        let raw_title = &caps[2];

        let grade = markers::grade_tag()
            .captures(raw_title)
            .and_then(|tag| tag[1].chars().next())
            .and_then(Grade::from_letter);
        let title = match grade {
            Some(_) => markers::grade_tag().replace(raw_title, " ").trim().to_string(),
            None => raw_title.to_string(),
        };

        Some(Self { id, title, grade })
    }

    /// Builds the initial record, applying any override for this identifier.
    pub fn into_document(self, overrides: &OverrideTable) -> ManualDocument {
        let mut doc = ManualDocument::new(self.id, self.title);
        let entry = overrides.get(&doc.id);

        let grade = entry
            .and_then(|e| e.grade)
            .or(self.grade)
            .unwrap_or_default();
        doc.set_grade(grade);

        if let Some(entry) = entry {
            if let Some(department) = &entry.department {
                doc.department = department.clone();
            }
            if let Some(status) = entry.status {
                doc.status = status;
            }
        }

        doc
    }
}
