//! Text normalization
//!
//! Raw text coming out of PDF/DOCX conversion is full of irregular blank
//! lines, page-break characters and typographic punctuation. Every extractor
//! works on one of the two views produced here:
//!
//! - the *collapsed* view, where every whitespace run (newlines included) is a
//!   single space, used by the single-pass regex extractors and entity
//!   recognition;
//! - the *line* view, which keeps line boundaries and a single blank line
//!   between paragraphs, used by the section scanners.

use regex::Regex;

/// Both normalized views of one document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText {
    lines: String,
    collapsed: String,
}

impl ResumeText {
    pub fn lines_view(&self) -> &str {
        &self.lines
    }

    pub fn collapsed(&self) -> &str {
        &self.collapsed
    }

    /// Lines of the line view, blank separator lines included.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.split('\n')
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }
}

pub struct TextNormalizer {
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");
        Self { whitespace_regex }
    }

    pub fn normalize(&self, raw: &str) -> ResumeText {
        let folded = fold_characters(raw);
        ResumeText {
            lines: self.preserve_lines(&folded),
            collapsed: self.collapse_whitespace(&folded),
        }
    }

    /// Collapse every whitespace run, newlines included, to one space.
    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace_regex.replace_all(text, " ").trim().to_string()
    }

    /// Keep line breaks, squeezing each run of blank lines down to one.
    pub fn preserve_lines(&self, text: &str) -> String {
        let mut lines: Vec<String> = Vec::new();

        for raw_line in text.split('\n') {
            let line = raw_line.split_whitespace().collect::<Vec<_>>().join(" ");
            if line.is_empty() {
                match lines.last() {
                    Some(prev) if !prev.is_empty() => lines.push(line),
                    _ => {}
                }
            } else {
                lines.push(line);
            }
        }

        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        lines.join("\n")
    }
}

/// Fold line-break artifacts and typographic punctuation to plain ASCII.
fn fold_characters(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\r' | '\u{000B}' | '\u{000C}' | '\u{2028}' | '\u{2029}' => '\n',
            '\u{00A0}' => ' ',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2026}' => '.',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_view() {
        let normalizer = TextNormalizer::new();
        let text = normalizer.normalize("  Jane   Doe\n\n\nSoftware\tEngineer  \n");

        assert_eq!(text.collapsed(), "Jane Doe Software Engineer");
    }

    #[test]
    fn test_line_view_squeezes_blank_lines() {
        let normalizer = TextNormalizer::new();
        let raw = "\n\nJane Doe\n   \n\n \nEducation\r\nB.Tech  CSE\x0cPage 2\n\n\n";
        let text = normalizer.normalize(raw);

        assert_eq!(text.lines_view(), "Jane Doe\n\nEducation\nB.Tech CSE\nPage 2");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = TextNormalizer::new();
        let raw = "Name:\u{00A0}Jane\u{2014}Doe\n\n\n  Skills  \n\u{201C}Rust\u{201D}\u{2026}\n";
        let once = normalizer.normalize(raw);

        let from_collapsed = normalizer.normalize(once.collapsed());
        assert_eq!(from_collapsed.collapsed(), once.collapsed());

        let from_lines = normalizer.normalize(once.lines_view());
        assert_eq!(from_lines.lines_view(), once.lines_view());
        assert_eq!(from_lines.collapsed(), once.collapsed());
    }

    #[test]
    fn test_typographic_folding() {
        let normalizer = TextNormalizer::new();
        let text = normalizer.normalize("\u{2018}Lead\u{2019} \u{2013} 2020\u{2014}Present");

        assert_eq!(text.collapsed(), "'Lead' - 2020-Present");
    }

    #[test]
    fn test_empty_input() {
        let normalizer = TextNormalizer::new();
        let text = normalizer.normalize("   \n\n\t ");

        assert!(text.is_empty());
        assert_eq!(text.collapsed(), "");
        assert_eq!(text.lines_view(), "");
    }
}
