//! Configuration management for the resume parser

use crate::error::{Result, ResumeParserError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Inputs larger than this are rejected before any extractor runs.
    pub max_input_bytes: usize,
    /// Maximum items kept for education, projects and experience.
    pub section_item_limit: usize,
    /// Project lines must be strictly longer than this many characters.
    pub project_min_chars: usize,
    pub enable_entity_fallback: bool,
    /// Characters of collapsed text handed to the entity recognizer.
    pub entity_char_budget: usize,
    /// Appended to the built-in skill vocabulary, in order.
    pub extra_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub allowed_formats: Vec<String>,
    pub enable_cache: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 16 * 1024 * 1024,
            section_item_limit: 3,
            project_min_chars: 30,
            enable_entity_fallback: true,
            entity_char_budget: 20_000,
            extra_skills: Vec::new(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            allowed_formats: vec![
                "pdf".to_string(),
                "docx".to_string(),
                "txt".to_string(),
                "md".to_string(),
            ],
            enable_cache: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            pretty_json: true,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing the defaults there on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeParserError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeParserError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-parser")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.extraction.section_item_limit == 0 {
            return Err(ResumeParserError::Configuration(
                "extraction.section_item_limit must be at least 1".to_string(),
            ));
        }
        if self.extraction.max_input_bytes == 0 {
            return Err(ResumeParserError::Configuration(
                "extraction.max_input_bytes must be greater than zero".to_string(),
            ));
        }
        if let Some(blank) = self.extraction.extra_skills.iter().find(|s| s.trim().is_empty()) {
            return Err(ResumeParserError::Configuration(format!(
                "extraction.extra_skills contains a blank entry: {:?}",
                blank
            )));
        }
        Ok(())
    }
}
