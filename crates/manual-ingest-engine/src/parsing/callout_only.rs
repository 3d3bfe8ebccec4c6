use std::sync::OnceLock;

use regex::Regex;

use super::markers::Callout;

fn separator_line() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"(?m)^---\s*$").expect("Invalid separator regex"))
}

fn blank_run() -> &'static Regex {
    static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"))
}

/// Extracts every callout block of a body as cleaned raw text.
///
/// Blocks are not tree-parsed. Separator lines are removed and long blank
/// runs collapsed. A block still open at end of input is dropped.
pub fn extract_callouts<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut callouts = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in lines {
        let line = line.as_ref().trim_end();

        if Callout::opens(line) {
            current = Some(Vec::new());
            continue;
        }
        if Callout::closes(line) {
            if let Some(block) = current.take()
                && !block.is_empty()
            {
                callouts.push(clean_block(&block));
            }
            continue;
        }

        if let Some(block) = current.as_mut()
            && !line.trim().is_empty()
        {
            block.push(line);
        }
    }

    callouts
}

fn clean_block(lines: &[&str]) -> String {
    let text = lines.join("\n");
    let text = separator_line().replace_all(text.trim(), "");
    blank_run().replace_all(&text, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_each_block_in_order() {
        let lines = [
            "<aside>",
            "first block",
            "</aside>",
            "outside text",
            "<aside>",
            "second",
            "  block",
            "</aside>",
        ];

        assert_eq!(
            extract_callouts(&lines),
            vec!["first block".to_string(), "second\n  block".to_string()]
        );
    }

    #[test]
    fn removes_separators_and_collapses_blank_runs() {
        let lines = ["<aside>", "top", "---", "---  ", "bottom", "</aside>"];

        assert_eq!(extract_callouts(&lines), vec!["top\n\nbottom".to_string()]);
    }

    #[test]
    fn single_separator_leaves_one_blank_line() {
        let lines = ["<aside>", "top", "---", "bottom", "</aside>"];
        assert_eq!(extract_callouts(&lines), vec!["top\n\nbottom".to_string()]);
    }

    #[test]
    fn blank_lines_inside_blocks_are_skipped() {
        let lines = ["<aside>", "a", "", "   ", "b", "</aside>"];
        assert_eq!(extract_callouts(&lines), vec!["a\nb".to_string()]);
    }

    #[test]
    fn empty_and_unterminated_blocks_are_dropped() {
        let lines = ["<aside>", "", "</aside>", "<aside>", "never closed"];
        assert!(extract_callouts(&lines).is_empty());
    }

    #[test]
    fn stray_close_is_ignored() {
        let lines = ["</aside>", "<aside>", "kept", "</aside>"];
        assert_eq!(extract_callouts(&lines), vec!["kept".to_string()]);
    }
}
