//! Field extractor seam shared by all seven fields

use crate::error::Result;
use crate::processing::language::LanguageService;
use crate::processing::normalizer::ResumeText;
use crate::processing::record::Field;

/// Everything an extractor may read. Borrowed, never mutated.
pub struct ExtractionContext<'a> {
    pub text: &'a ResumeText,
    pub language: &'a dyn LanguageService,
}

pub trait FieldExtractor: Send + Sync {
    fn field(&self) -> Field;

    /// `Ok(None)` means "not found"; an `Err` is isolated to this field.
    fn extract(&self, ctx: &ExtractionContext<'_>) -> Result<Option<String>>;
}

/// Join `items` with `separator`, or `None` when there are none.
pub(crate) fn join_items(items: Vec<String>, separator: &str) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join(separator))
    }
}
