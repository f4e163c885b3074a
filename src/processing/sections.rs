//! Section-scoped extraction for education, projects and experience
//!
//! All three fields share one scan: a line containing a header keyword opens
//! the section (the header itself is dropped), a blank line closes it, and
//! every line in between is offered to a field-specific acceptance rule. When
//! the scan finds nothing, the same rule is applied sentence by sentence over
//! the whole text instead. Items are kept in scan order up to a limit.

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::processing::cascade::Cascade;
use crate::processing::extractor::{join_items, ExtractionContext, FieldExtractor};
use crate::processing::patterns::{
    DATE_PATTERN, DEGREE_PATTERNS, EDUCATION_HEADERS, EXPERIENCE_HEADERS, PROJECT_EXCLUDED_WORDS,
    PROJECT_HEADERS, ROLE_CUES,
};
use crate::processing::record::Field;
use aho_corasick::AhoCorasick;
use regex::{Regex, RegexSet, RegexSetBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside,
}

enum Acceptance {
    Degree(RegexSet),
    Project {
        min_chars: usize,
        excluded: AhoCorasick,
        keyword: AhoCorasick,
    },
    Experience {
        dates: Regex,
        roles: AhoCorasick,
    },
}

impl Acceptance {
    fn accepts_line(&self, line: &str) -> bool {
        match self {
            Acceptance::Degree(degrees) => degrees.is_match(line),
            Acceptance::Project {
                min_chars, excluded, ..
            } => line.chars().count() > *min_chars && !excluded.is_match(line),
            Acceptance::Experience { dates, roles } => dates.is_match(line) || roles.is_match(line),
        }
    }

    fn accepts_sentence(&self, sentence: &str) -> bool {
        match self {
            Acceptance::Project {
                min_chars, keyword, ..
            } => keyword.is_match(sentence) && sentence.chars().count() > *min_chars,
            other => other.accepts_line(sentence),
        }
    }
}

pub struct SectionExtractor {
    field: Field,
    headers: AhoCorasick,
    acceptance: Acceptance,
    separator: &'static str,
    limit: usize,
}

fn keyword_matcher(keywords: &[&str]) -> Result<AhoCorasick> {
    Ok(AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(keywords)?)
}

impl SectionExtractor {
    pub fn education(config: &ExtractionConfig) -> Result<Self> {
        let degrees = RegexSetBuilder::new(DEGREE_PATTERNS)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            field: Field::Education,
            headers: keyword_matcher(EDUCATION_HEADERS)?,
            acceptance: Acceptance::Degree(degrees),
            separator: "\n",
            limit: config.section_item_limit,
        })
    }

    pub fn projects(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            field: Field::Projects,
            headers: keyword_matcher(PROJECT_HEADERS)?,
            acceptance: Acceptance::Project {
                min_chars: config.project_min_chars,
                excluded: keyword_matcher(PROJECT_EXCLUDED_WORDS)?,
                keyword: keyword_matcher(&["project"])?,
            },
            separator: "\n\n",
            limit: config.section_item_limit,
        })
    }

    pub fn experience(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            field: Field::Experience,
            headers: keyword_matcher(EXPERIENCE_HEADERS)?,
            acceptance: Acceptance::Experience {
                dates: Regex::new(DATE_PATTERN)?,
                roles: keyword_matcher(ROLE_CUES)?,
            },
            separator: "\n\n",
            limit: config.section_item_limit,
        })
    }

    /// Header-activated line scan over the line view.
    fn scan_lines(&self, ctx: &ExtractionContext<'_>) -> Vec<String> {
        let mut items = Vec::new();
        let mut state = ScanState::Outside;

        for line in ctx.text.lines() {
            if items.len() >= self.limit {
                break;
            }
            if self.headers.is_match(line) {
                state = ScanState::Inside;
                continue;
            }
            if state == ScanState::Outside {
                continue;
            }

            let line = line.trim();
            if line.is_empty() {
                state = ScanState::Outside;
                continue;
            }
            if self.acceptance.accepts_line(line) {
                items.push(line.to_string());
            }
        }

        items
    }

    fn scan_sentences(&self, ctx: &ExtractionContext<'_>) -> Vec<String> {
        ctx.language
            .sentences(ctx.text.collapsed())
            .map(str::trim)
            .filter(|sentence| self.acceptance.accepts_sentence(sentence))
            .take(self.limit)
            .map(str::to_string)
            .collect()
    }
}

impl FieldExtractor for SectionExtractor {
    fn field(&self) -> Field {
        self.field
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Result<Option<String>> {
        let cascade = Cascade::<ExtractionContext<'_>>::new(self.field.key())
            .then("section_scan", |ctx| Ok(join_items(self.scan_lines(ctx), self.separator)))
            .then("sentence_fallback", |ctx| {
                Ok(join_items(self.scan_sentences(ctx), self.separator))
            });

        Ok(cascade.run(ctx))
    }
}
