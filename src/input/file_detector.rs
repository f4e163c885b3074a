//! File type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// Detect binary formats from their leading magic bytes.
    pub fn sniff(header: &[u8]) -> Option<Self> {
        if header.starts_with(b"%PDF-") {
            Some(FileType::Pdf)
        } else if header.starts_with(b"PK\x03\x04") {
            Some(FileType::Docx)
        } else {
            None
        }
    }

    /// Sniffed binary formats win over the extension.
    pub fn detect(ext: Option<&str>, header: &[u8]) -> Self {
        let declared = ext.map(Self::from_extension).unwrap_or(FileType::Unknown);
        match Self::sniff(header) {
            Some(sniffed) => sniffed,
            None if declared.is_binary() => FileType::Unknown,
            None => declared,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FileType::Pdf | FileType::Docx)
    }

    /// Canonical extension, used against the allowed-formats list.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            FileType::Pdf => Some("pdf"),
            FileType::Docx => Some("docx"),
            FileType::Text => Some("txt"),
            FileType::Markdown => Some("md"),
            FileType::Unknown => None,
        }
    }
}
