//! Report structures wrapping an extracted record with its provenance

use crate::processing::record::{Field, ResumeRecord};
use serde::{Deserialize, Serialize};

/// One parsed document, ready for formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub metadata: ReportMetadata,
    pub record: ResumeRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the source document as given on the command line
    pub source: String,
    pub fields_found: usize,
    pub fields_total: usize,
    pub processing_time_ms: u64,
    pub tool_version: String,
}

impl ParsedResume {
    pub fn new(source: impl Into<String>, record: ResumeRecord, processing_time_ms: u64) -> Self {
        let metadata = ReportMetadata {
            source: source.into(),
            fields_found: record.found_count(),
            fields_total: Field::ALL.len(),
            processing_time_ms,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };
        Self { metadata, record }
    }

    /// Human-facing title: the extracted name, else the file stem.
    pub fn title(&self) -> String {
        if self.record.is_found(Field::Name) {
            return self.record.name.clone();
        }
        std::path::Path::new(&self.metadata.source)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.metadata.source.clone())
    }
}
