use crate::models::{HeadingLabel, SectionKind};

use super::markers;

/// Raw text and tree-builder input collected for each section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSplit {
    pub overview: String,
    pub entry_text: String,
    pub notes_text: String,
    pub entry_lines: Vec<String>,
    pub guide_lines: Vec<String>,
    pub note_lines: Vec<String>,
}

/// State machine that partitions a manual body at `## [<label>]` headings.
///
/// Raw text is flushed into the section that was active before each heading.
/// Guide text never gets a raw form; entry and notes get both forms.
pub struct SectionSplitter<'a> {
    labels: &'a [HeadingLabel],
    current: Option<SectionKind>,
    buffer: Vec<String>,
    out: SectionSplit,
}

impl<'a> SectionSplitter<'a> {
    pub fn new(labels: &'a [HeadingLabel]) -> Self {
        Self {
            labels,
            current: None,
            buffer: Vec::new(),
            out: SectionSplit::default(),
        }
    }

    /// Feeds one right-trimmed body line.
    pub fn push(&mut self, line: &str) {
        let line = markers::rewrite_data_uri_images(line);

        if let Some(caps) = markers::section_heading().captures(&line) {
            self.flush();
            let label = &caps[1];
            match self.section_for(label) {
                Some(section) => self.current = Some(section),
                None => log::debug!("Unrecognized section heading {label:?}, staying in {:?}", self.current),
            }
            return;
        }

        let line = line.into_owned();
        match self.current {
            Some(SectionKind::Guide) => self.out.guide_lines.push(line),
            Some(SectionKind::Entry) => {
                self.out.entry_lines.push(line.clone());
                self.buffer.push(line);
            }
            Some(SectionKind::Notes) => {
                self.out.note_lines.push(line.clone());
                self.buffer.push(line);
            }
            Some(SectionKind::Overview) | None => self.buffer.push(line),
        }
    }

    pub fn finish(mut self) -> SectionSplit {
        // EOF flush
        self.flush();
        self.out
    }

    fn section_for(&self, label: &str) -> Option<SectionKind> {
        self.labels
            .iter()
            .find(|candidate| candidate.matches(label))
            .map(|candidate| candidate.section)
    }

    fn flush(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let content = buffer.join("\n").trim().to_string();
        match self.current {
            Some(SectionKind::Overview) => self.out.overview = content,
            Some(SectionKind::Entry) => self.out.entry_text = content,
            Some(SectionKind::Notes) => self.out.notes_text = content,
            Some(SectionKind::Guide) | None => {}
        }
    }
}

/// Splits `lines` (the body after the header) into sections.
pub fn split_sections<S: AsRef<str>>(lines: &[S], labels: &[HeadingLabel]) -> SectionSplit {
    let mut splitter = SectionSplitter::new(labels);
    for line in lines {
        splitter.push(line.as_ref().trim_end());
    }
    splitter.finish()
}
