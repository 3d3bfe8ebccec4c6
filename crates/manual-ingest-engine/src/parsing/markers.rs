//! Literal markers and line patterns shared by the parsing stages.

use std::sync::OnceLock;

use regex::Regex;

pub use crate::models::RESTRICTED_MARKER;

/// Prefix of a list item line after trimming.
pub const LIST_MARKER: &str = "- ";

/// Prefix of a line that continues a node rather than starting one.
pub const CONTINUATION_PREFIX: &str = ": ";

/// `# [<id>] <title> 매뉴얼`
pub fn header() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"# \[(.*?)\] (.*) 매뉴얼").expect("Invalid header regex"))
}

/// `(B등급)` style grade tag inside a header title.
pub fn grade_tag() -> &'static Regex {
    static GRADE_TAG: OnceLock<Regex> = OnceLock::new();
    GRADE_TAG
        .get_or_init(|| Regex::new(r"\s*\(([SABCDEF])등급\)\s*").expect("Invalid grade tag regex"))
}

/// `## [<label>]`
pub fn section_heading() -> &'static Regex {
    static SECTION_HEADING: OnceLock<Regex> = OnceLock::new();
    SECTION_HEADING
        .get_or_init(|| Regex::new(r"^## \[(.*)\]").expect("Invalid section heading regex"))
}

/// Multi-segment numbering such as `1-1.` or `3-4-2-`.
pub fn numbering() -> &'static Regex {
    static NUMBERING: OnceLock<Regex> = OnceLock::new();
    NUMBERING.get_or_init(|| Regex::new(r"^\d+(?:-\d+)+[-.]").expect("Invalid numbering regex"))
}

/// A link marker with an empty label, not already an image.
fn empty_link() -> &'static Regex {
    static EMPTY_LINK: OnceLock<Regex> = OnceLock::new();
    EMPTY_LINK.get_or_init(|| Regex::new(r"(^|[^!])\[\]\(").expect("Invalid empty link regex"))
}

/// Turns empty-label links to embedded images into image markers.
///
/// Exports write inline images as `[](data:image/...)`, which renders as an
/// invisible link.
pub fn rewrite_data_uri_images(line: &str) -> std::borrow::Cow<'_, str> {
    if line.contains("[](") && line.contains("data:image") {
        empty_link().replace_all(line, "${1}![image](")
    } else {
        std::borrow::Cow::Borrowed(line)
    }
}

/// Delimiters of a collapsible note block.
pub struct Callout;

impl Callout {
    pub const OPEN: &'static str = "<aside>";
    pub const CLOSE: &'static str = "</aside>";

    pub fn opens(line: &str) -> bool {
        line.contains(Self::OPEN)
    }

    pub fn closes(line: &str) -> bool {
        line.contains(Self::CLOSE)
    }
}
