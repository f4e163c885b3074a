//! Single-pass regex extractors: email and GPA

use crate::error::Result;
use crate::processing::cascade::Cascade;
use crate::processing::extractor::{ExtractionContext, FieldExtractor};
use crate::processing::patterns::{EMAIL_PATTERN, GPA_PATTERNS};
use crate::processing::record::Field;
use regex::{Regex, RegexBuilder};

pub struct EmailExtractor {
    email_regex: Regex,
}

impl EmailExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email_regex: Regex::new(EMAIL_PATTERN)?,
        })
    }
}

impl FieldExtractor for EmailExtractor {
    fn field(&self) -> Field {
        Field::Email
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Result<Option<String>> {
        Ok(self
            .email_regex
            .find(ctx.text.collapsed())
            .map(|m| m.as_str().to_string()))
    }
}

/// GPA is kept as the matched string (`3.75`), never parsed to a number.
pub struct GpaExtractor {
    patterns: Vec<(&'static str, Regex)>,
}

impl GpaExtractor {
    pub fn new() -> Result<Self> {
        let patterns = GPA_PATTERNS
            .iter()
            .map(|(label, pattern)| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (*label, regex))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }
}

impl FieldExtractor for GpaExtractor {
    fn field(&self) -> Field {
        Field::Cgpa
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Result<Option<String>> {
        let cascade = self
            .patterns
            .iter()
            .fold(Cascade::<str>::new("cgpa"), |cascade, (label, regex)| {
                cascade.then(*label, move |text| {
                    Ok(regex
                        .captures(text)
                        .and_then(|caps| caps.get(1))
                        .map(|m| m.as_str().to_string()))
                })
            });

        Ok(cascade.run(ctx.text.collapsed()))
    }
}
