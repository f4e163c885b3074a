//! Text extraction from various file formats

use crate::error::{Result, ResumeParserError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeParserError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let owned = path.to_path_buf();
        let text = tokio::task::spawn_blocking(move || docx_lite::extract_text(&owned))
            .await
            .map_err(|e| ResumeParserError::DocxExtraction(format!("DOCX worker failed: {}", e)))?
            .map_err(|e| {
                ResumeParserError::DocxExtraction(format!(
                    "Failed to extract text from DOCX '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten markdown to plain lines. Paragraphs and lists end with a blank
/// line so section boundaries survive; headings and list items get their own
/// line.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::with_capacity(markdown.len());

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => text.push('\n'),
            Event::End(Tag::Paragraph) | Event::End(Tag::List(_)) | Event::End(Tag::CodeBlock(_)) => {
                text.push_str("\n\n")
            }
            Event::Rule => text.push_str("\n\n"),
            _ => {}
        }
    }

    text
}
