//! Field extraction engine: normalization, extractors and record assembly

pub mod cascade;
pub mod contact;
pub mod extractor;
pub mod language;
pub mod name;
pub mod normalizer;
pub mod parser;
pub mod patterns;
pub mod record;
pub mod sections;
pub mod skills;

pub use language::{Entity, EntityLabel, LanguageService, RuleBasedLanguageService};
pub use normalizer::{ResumeText, TextNormalizer};
pub use parser::ResumeParser;
pub use record::{Field, ResumeRecord, NOT_FOUND};
