use crate::parsing::markers::{self, CONTINUATION_PREFIX, LIST_MARKER, RESTRICTED_MARKER};

/// Count of leading whitespace characters (not bytes).
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Classification of a single non-blank line containing only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Count of leading whitespace characters.
    pub indent: usize,
    /// The line with surrounding whitespace removed.
    pub content: &'a str,
    /// Title text when the line starts a node.
    pub title: Option<&'a str>,
}

impl<'a> LineClass<'a> {
    /// Classifies a line. Returns `None` for blank lines.
    ///
    /// A list item starts a node when its text is restricted, numbered,
    /// ends with a colon, or sits at column zero. A bare line starts a node
    /// when it is wholly bold or numbered.
    pub fn classify(line: &'a str) -> Option<Self> {
        let content = line.trim();
        if content.is_empty() {
            return None;
        }

        let indent = leading_whitespace(line);

        let title = match content.strip_prefix(LIST_MARKER) {
            Some(item) => {
                let starts_node = item.contains(RESTRICTED_MARKER)
                    || markers::numbering().is_match(item)
                    || item.trim().ends_with(':')
                    || indent == 0;
                starts_node.then_some(item)
            }
            None => {
                let bold = content.starts_with("**") && content.ends_with("**");
                (bold || markers::numbering().is_match(content)).then_some(content)
            }
        };

        Some(Self {
            indent,
            content,
            title,
        })
    }

    pub fn starts_node(&self) -> bool {
        self.title.is_some()
    }

    /// Content text to append to the active node.
    pub fn continuation_text(&self) -> &'a str {
        self.content
            .strip_prefix(CONTINUATION_PREFIX)
            .unwrap_or(self.content)
    }
}
