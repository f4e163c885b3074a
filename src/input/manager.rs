//! Input manager for handling different file types

use crate::config::InputConfig;
use crate::error::{Result, ResumeParserError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use tokio::io::AsyncReadExt;

const SNIFF_LEN: usize = 8;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    allowed_formats: Vec<String>,
    max_bytes: Option<u64>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_cache,
            allowed_formats: config.allowed_formats.iter().map(|f| f.to_lowercase()).collect(),
            max_bytes: None,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Reject files larger than `max_bytes` before reading them.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeParserError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if let Some(limit) = self.max_bytes {
            let size = tokio::fs::metadata(path).await?.len();
            if size > limit {
                return Err(ResumeParserError::InputTooLarge {
                    size: size as usize,
                    limit: limit as usize,
                });
            }
        }

        let file_type = self.detect_file_type(path).await?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeParserError::UnsupportedFormat(path.display().to_string()));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    async fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path.extension().and_then(|ext| ext.to_str());

        let mut header = [0u8; SNIFF_LEN];
        let mut file = tokio::fs::File::open(path).await?;
        let read = file.read(&mut header).await?;

        let file_type = FileType::detect(extension, &header[..read]);
        debug!("Detected {:?} for {}", file_type, path.display());

        match file_type.extension() {
            Some(ext) if self.allowed_formats.iter().any(|f| f == ext) => Ok(file_type),
            Some(ext) => Err(ResumeParserError::UnsupportedFormat(format!(
                "{} files are not allowed: {}",
                ext,
                path.display()
            ))),
            None => Err(ResumeParserError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
