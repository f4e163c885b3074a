//! Person name extraction
//!
//! Four methods in fixed priority, first success wins:
//!
//! 1. an explicit `Name:` label, or a standalone two-word capitalized line
//! 2. the first line that passes [`is_likely_name`]
//! 3. the first PERSON entity from the language service
//! 4. the first line whose first two tokens start uppercase, taken as-is

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::processing::cascade::Cascade;
use crate::processing::extractor::{ExtractionContext, FieldExtractor};
use crate::processing::language::EntityLabel;
use crate::processing::normalizer::ResumeText;
use crate::processing::patterns::NAME_PATTERNS;
use crate::processing::record::Field;
use regex::{Regex, RegexBuilder};

pub struct NameExtractor {
    label_patterns: Vec<Regex>,
    entity_fallback: bool,
    entity_char_budget: usize,
}

/// At least two tokens, and the first two start with an uppercase letter.
pub fn is_likely_name(text: &str) -> bool {
    let mut words = text.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => starts_uppercase(first) && starts_uppercase(second),
        _ => false,
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn first_two_tokens(text: &str) -> String {
    text.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

/// Longest prefix of `text` holding at most `budget` characters.
fn char_prefix(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl NameExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let label_patterns = NAME_PATTERNS
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            label_patterns,
            entity_fallback: config.enable_entity_fallback,
            entity_char_budget: config.entity_char_budget,
        })
    }

    fn from_label(&self, text: &ResumeText) -> Option<String> {
        self.label_patterns.iter().find_map(|pattern| {
            pattern
                .captures_iter(text.lines_view())
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .find(|candidate| is_likely_name(candidate))
                .map(first_two_tokens)
        })
    }

    fn from_capitalized_line(&self, text: &ResumeText) -> Option<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .find(|line| is_likely_name(line))
            .map(first_two_tokens)
    }

    fn from_entities(&self, ctx: &ExtractionContext<'_>) -> Result<Option<String>> {
        let text = char_prefix(ctx.text.collapsed(), self.entity_char_budget);
        let entities = ctx.language.entities(text)?;

        Ok(entities
            .iter()
            .filter(|e| e.label == EntityLabel::Person)
            .map(|e| e.text.as_str())
            .find(|t| t.split_whitespace().count() >= 2 && is_likely_name(t))
            .map(first_two_tokens))
    }

    fn from_loose_line(&self, text: &ResumeText) -> Option<String> {
        text.lines().find_map(|line| {
            let mut words = line.split_whitespace();
            match (words.next(), words.next()) {
                (Some(first), Some(second)) if starts_uppercase(first) && starts_uppercase(second) => {
                    Some(first_two_tokens(line))
                }
                _ => None,
            }
        })
    }
}

impl FieldExtractor for NameExtractor {
    fn field(&self) -> Field {
        Field::Name
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Result<Option<String>> {
        let cascade = Cascade::<ExtractionContext<'_>>::new("name")
            .then("explicit_label", |ctx| Ok(self.from_label(ctx.text)))
            .then("capitalized_line", |ctx| Ok(self.from_capitalized_line(ctx.text)))
            .then_if(self.entity_fallback, "entity_recognition", |ctx| self.from_entities(ctx))
            .then("loose_line", |ctx| Ok(self.from_loose_line(ctx.text)));

        Ok(cascade.run(ctx))
    }
}
