//! Resume parser library
//!
//! Turns the raw text of a resume into a fixed set of fields using pattern
//! matching, vocabulary lookup, section scanning and a rule-based language
//! service. See [`ResumeParser::parse`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeParserError};
pub use processing::{ResumeParser, ResumeRecord, NOT_FOUND};
