//! Sentence segmentation and entity recognition
//!
//! The extractors only ever *query* a [`LanguageService`]; they never own or
//! mutate it. Hosts construct one explicitly, share it behind an `Arc`, and
//! drop it when they are done. [`RuleBasedLanguageService`] is the built-in
//! implementation: UAX #29 sentence boundaries plus a gazetteer-filtered
//! capitalized-run recognizer for people and organizations.

use crate::error::Result;
use crate::processing::patterns::SKILL_VOCABULARY;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Lazy sequence of sentence spans borrowed from the input text.
pub type Sentences<'t> = Box<dyn Iterator<Item = &'t str> + 't>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Query service consumed by the extractors.
///
/// Implementations must be reentrant: one instance is shared by every
/// concurrent extraction.
pub trait LanguageService: Send + Sync {
    /// Split `text` into sentences. Calling again restarts the sequence.
    fn sentences<'t>(&self, text: &'t str) -> Sentences<'t>;

    /// Recognize entities in `text`, in document order.
    fn entities(&self, text: &str) -> Result<Vec<Entity>>;
}

pub struct RuleBasedLanguageService {
    candidate_regex: Regex,
    non_name_words: HashSet<String>,
    organization_cues: HashSet<String>,
}

impl RuleBasedLanguageService {
    /// Build the recognizer tables. Call once per process and share the result.
    pub fn load() -> Result<Self> {
        let candidate_regex =
            Regex::new(r"\b\p{Lu}[\p{L}'\-]*\.?(?:[ \t]+\p{Lu}[\p{L}'\-]*\.?){1,3}\b")?;

        let mut non_name_words = Self::create_non_name_words();
        for term in SKILL_VOCABULARY {
            for word in term.split_whitespace() {
                non_name_words.insert(word.to_string());
            }
        }

        let service = Self {
            candidate_regex,
            non_name_words,
            organization_cues: Self::create_organization_cues(),
        };
        debug!(
            "Loaded rule-based language service ({} gazetteer terms)",
            service.non_name_words.len() + service.organization_cues.len()
        );
        Ok(service)
    }

    fn classify(&self, candidate: &str) -> Option<EntityLabel> {
        let words: Vec<String> = candidate
            .split_whitespace()
            .map(|w| w.trim_end_matches('.').to_lowercase())
            .collect();

        if words.iter().any(|w| self.organization_cues.contains(w)) {
            return Some(EntityLabel::Organization);
        }
        if words.len() > 3 || words.iter().any(|w| self.non_name_words.contains(w)) {
            return None;
        }
        // middle initials are fine, a lone letter at either end is not a name
        let too_short = |w: Option<&String>| w.map_or(true, |w| w.chars().count() < 2);
        if too_short(words.first()) || too_short(words.last()) {
            return None;
        }
        Some(EntityLabel::Person)
    }

    /// First 2-3 word window of a rejected run that classifies as a person,
    /// widest first, with its byte offset into `run`.
    fn person_window<'t>(&self, run: &'t str) -> Option<(usize, &'t str)> {
        let spans = word_spans(run);
        for size in (2..=spans.len().min(3)).rev() {
            for window in spans.windows(size) {
                let (start, end) = (window[0].0, window[size - 1].1);
                let candidate = &run[start..end];
                if self.classify(candidate) == Some(EntityLabel::Person) {
                    return Some((start, candidate));
                }
            }
        }
        None
    }

    fn create_non_name_words() -> HashSet<String> {
        let words = [
            // section headings and resume boilerplate
            "resume", "curriculum", "vitae", "cv", "profile", "summary", "objective",
            "education", "experience", "skills", "projects", "project", "certifications",
            "achievements", "awards", "contact", "references", "languages", "interests",
            "technical", "professional", "personal", "academic", "work", "history",
            "employment", "qualifications", "background", "details", "information",
            // roles
            "software", "engineer", "developer", "intern", "analyst", "manager",
            "lead", "senior", "junior", "consultant", "architect", "scientist",
            "student", "assistant", "associate", "director", "designer", "administrator",
            // degrees and fields
            "bachelor", "master", "diploma", "degree", "science", "engineering",
            "technology", "computer", "arts", "commerce", "mathematics", "physics",
            "b.tech", "m.tech", "b.sc", "m.sc", "phd", "mba", "gpa", "cgpa",
            // calendar
            "january", "february", "march", "april", "may", "june", "july", "august",
            "september", "october", "november", "december", "jan", "feb", "mar", "apr",
            "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "present", "current",
            // places and misc
            "street", "road", "avenue", "city", "state", "email", "phone", "mobile",
            "address", "linkedin", "github", "the", "and", "of", "in", "for", "with",
        ];

        words.iter().map(|&s| s.to_string()).collect()
    }

    fn create_organization_cues() -> HashSet<String> {
        let cues = [
            "university", "college", "institute", "school", "academy", "inc", "ltd",
            "llc", "corp", "corporation", "company", "technologies", "solutions",
            "labs", "group", "systems", "pvt", "limited", "foundation",
        ];

        cues.iter().map(|&s| s.to_string()).collect()
    }
}

/// Byte ranges of the whitespace-separated words in `text`.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

impl LanguageService for RuleBasedLanguageService {
    fn sentences<'t>(&self, text: &'t str) -> Sentences<'t> {
        Box::new(
            text.unicode_sentences()
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        )
    }

    fn entities(&self, text: &str) -> Result<Vec<Entity>> {
        let entities: Vec<Entity> = self
            .candidate_regex
            .find_iter(text)
            .filter_map(|m| match self.classify(m.as_str()) {
                Some(label) => Some(Entity {
                    label,
                    text: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                }),
                None => self.person_window(m.as_str()).map(|(offset, name)| Entity {
                    label: EntityLabel::Person,
                    text: name.to_string(),
                    start: m.start() + offset,
                    end: m.start() + offset + name.len(),
                }),
            })
            .collect();

        debug!("Recognized {} entities", entities.len());
        Ok(entities)
    }
}
