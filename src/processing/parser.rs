//! Resume parsing pipeline: normalize, run every field extractor, assemble

use crate::config::ExtractionConfig;
use crate::error::{Result, ResumeParserError};
use crate::processing::contact::{EmailExtractor, GpaExtractor};
use crate::processing::extractor::{ExtractionContext, FieldExtractor};
use crate::processing::language::{LanguageService, RuleBasedLanguageService};
use crate::processing::name::NameExtractor;
use crate::processing::normalizer::TextNormalizer;
use crate::processing::record::ResumeRecord;
use crate::processing::sections::SectionExtractor;
use crate::processing::skills::SkillsExtractor;
use log::{debug, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Immutable after construction; share one instance across threads.
pub struct ResumeParser {
    normalizer: TextNormalizer,
    extractors: Vec<Box<dyn FieldExtractor>>,
    language: Arc<dyn LanguageService>,
    max_input_bytes: usize,
}

impl ResumeParser {
    pub fn new(config: &ExtractionConfig, language: Arc<dyn LanguageService>) -> Result<Self> {
        let extractors: Vec<Box<dyn FieldExtractor>> = vec![
            Box::new(NameExtractor::new(config)?),
            Box::new(EmailExtractor::new()?),
            Box::new(GpaExtractor::new()?),
            Box::new(SkillsExtractor::new(&config.extra_skills)?),
            Box::new(SectionExtractor::education(config)?),
            Box::new(SectionExtractor::projects(config)?),
            Box::new(SectionExtractor::experience(config)?),
        ];

        Ok(Self {
            normalizer: TextNormalizer::new(),
            extractors,
            language,
            max_input_bytes: config.max_input_bytes,
        })
    }

    /// Default configuration with the built-in rule-based language service.
    pub fn with_defaults() -> Result<Self> {
        let language: Arc<dyn LanguageService> = Arc::new(RuleBasedLanguageService::load()?);
        Self::new(&ExtractionConfig::default(), language)
    }

    /// Extract every field from `raw`.
    ///
    /// Always yields a complete record; a field that cannot be extracted, or
    /// whose extractor fails, holds the sentinel. The only error is an input
    /// larger than the configured limit.
    pub fn parse(&self, raw: &str) -> Result<ResumeRecord> {
        if raw.len() > self.max_input_bytes {
            return Err(ResumeParserError::InputTooLarge {
                size: raw.len(),
                limit: self.max_input_bytes,
            });
        }

        let text = self.normalizer.normalize(raw);
        let mut record = ResumeRecord::empty(text.collapsed());
        if text.is_empty() {
            debug!("Empty input, returning sentinel record");
            return Ok(record);
        }

        let ctx = ExtractionContext {
            text: &text,
            language: self.language.as_ref(),
        };

        for extractor in &self.extractors {
            let field = extractor.field();
            let value = match catch_unwind(AssertUnwindSafe(|| extractor.extract(&ctx))) {
                Ok(Ok(value)) => value,
                Ok(Err(e)) => {
                    warn!("Extractor for '{}' failed: {}", field, e);
                    None
                }
                Err(_) => {
                    warn!("Extractor for '{}' panicked", field);
                    None
                }
            };
            record.set(field, value);
        }

        debug!(
            "Extracted {}/{} fields from {} characters",
            record.found_count(),
            self.extractors.len(),
            record.text.chars().count()
        );
        Ok(record)
    }
}
