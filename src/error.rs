//! Error handling for the resume parser

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeParserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Field extraction error: {0}")]
    Extraction(String),

    #[error("Language service error: {0}")]
    LanguageService(String),
}

pub type Result<T> = std::result::Result<T, ResumeParserError>;

impl From<regex::Error> for ResumeParserError {
    fn from(err: regex::Error) -> Self {
        ResumeParserError::Configuration(format!("Invalid pattern: {}", err))
    }
}

impl From<aho_corasick::BuildError> for ResumeParserError {
    fn from(err: aho_corasick::BuildError) -> Self {
        ResumeParserError::Configuration(format!("Failed to build keyword matcher: {}", err))
    }
}
