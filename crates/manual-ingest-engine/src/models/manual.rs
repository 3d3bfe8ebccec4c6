use serde::{Deserialize, Serialize};

use super::Node;

/// Classification grade, also used for security-level tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    #[default]
    D,
    E,
    F,
}

impl Grade {
    /// Tag applied to nodes and sections carrying the restricted marker.
    pub const RESTRICTED: Grade = Grade::C;

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' => Some(Grade::S),
            'A' => Some(Grade::A),
            'B' => Some(Grade::B),
            'C' => Some(Grade::C),
            'D' => Some(Grade::D),
            'E' => Some(Grade::E),
            'F' => Some(Grade::F),
            _ => None,
        }
    }

    /// Documents of this grade are shown behind an access warning.
    pub fn requires_clearance(self) -> bool {
        matches!(self, Grade::S | Grade::A)
    }
}

/// Management status of the documented subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Isolated,
    Disposed,
}

pub const DEFAULT_DEPARTMENT: &str = "미정";

/// Tag marking access-restricted content.
pub const RESTRICTED_MARKER: &str = "[열람 제한]";

/// Overview text stored for documents that only consist of callout blocks.
pub const CALLOUT_ONLY_OVERVIEW: &str = "본 문서는 특수 형식으로 작성되었습니다.";

/// The normalized record produced from one exported manual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualDocument {
    pub id: String,
    pub title: String,
    pub grade: Grade,
    pub status: Status,
    pub department: String,
    pub overview: String,
    pub entry_method: String,
    pub entry_method_security_level: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_nodes: Option<Vec<Node>>,
    pub exploration_guide: Vec<Node>,
    pub special_notes: String,
    pub special_notes_security_level: Grade,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_note_nodes: Option<Vec<Node>>,
    pub is_restricted: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub callout_only_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callouts: Option<Vec<String>>,
}

impl ManualDocument {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            grade: Grade::default(),
            status: Status::default(),
            department: DEFAULT_DEPARTMENT.to_string(),
            overview: String::new(),
            entry_method: String::new(),
            entry_method_security_level: Grade::default(),
            entry_nodes: None,
            exploration_guide: Vec::new(),
            special_notes: String::new(),
            special_notes_security_level: Grade::default(),
            special_note_nodes: None,
            is_restricted: false,
            callout_only_mode: false,
            callouts: None,
        }
    }

    /// Sets the grade and keeps the restriction flag in step with it.
    pub fn set_grade(&mut self, grade: Grade) {
        self.grade = grade;
        self.is_restricted = grade.requires_clearance();
    }
}
