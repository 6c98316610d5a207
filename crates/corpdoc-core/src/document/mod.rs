//! Document intake: format detection and text extraction.

mod extractor;
#[cfg(feature = "native")]
mod local;

pub use extractor::{
    ExtractedText, TextExtractor, extract_docx_stub, extract_pdf_stub, extract_pdf_text,
    extract_plain_text, extract_text,
};
#[cfg(feature = "native")]
pub use local::LocalFile;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// MIME type for PDF files.
pub const MIME_PDF: &str = "application/pdf";
/// MIME type for Office Open XML word processing files.
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// MIME type for plain text files.
pub const MIME_TEXT: &str = "text/plain";

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Detect the format from the declared MIME type, falling back to the
    /// file name extension.
    pub fn detect(mime_type: Option<&str>, name: &str) -> Option<Self> {
        mime_type
            .and_then(Self::from_mime)
            .or_else(|| Self::from_file_name(name))
    }

    /// Match a MIME type, ignoring parameters such as `charset`.
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            MIME_PDF => Some(Self::Pdf),
            MIME_DOCX => Some(Self::Docx),
            MIME_TEXT => Some(Self::Text),
            _ => None,
        }
    }

    /// Match a case-insensitive `.pdf`, `.docx` or `.txt` suffix.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else if lower.ends_with(".txt") {
            Some(Self::Text)
        } else {
            None
        }
    }

    /// Canonical MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => MIME_PDF,
            Self::Docx => MIME_DOCX,
            Self::Text => MIME_TEXT,
        }
    }
}

/// A file handed over by the caller.
///
/// The caller owns file acquisition; the parser only needs the metadata used
/// for format dispatch and a way to read the content.
pub trait DocumentSource {
    /// File name, used for the extension fallback and stub placeholders.
    fn name(&self) -> &str;

    /// Declared MIME type, if any.
    fn mime_type(&self) -> Option<&str>;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Read the whole content.
    fn read_bytes(&self) -> impl Future<Output = Result<Vec<u8>, DocumentError>>;
}

/// An in-memory upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    name: String,
    mime_type: Option<String>,
    data: Vec<u8>,
}

impl UploadedFile {
    /// Create an upload from raw bytes.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            data: data.into(),
        }
    }

    /// Create a plain text upload.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.as_bytes()).with_mime_type(MIME_TEXT)
    }

    /// Set the declared MIME type. Empty values are treated as undeclared.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        self.mime_type = (!mime_type.trim().is_empty()).then_some(mime_type);
        self
    }

    /// Raw content.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl DocumentSource for UploadedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_prefers_mime_type() {
        assert_eq!(
            DocumentFormat::detect(Some("application/pdf"), "profile.txt"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::detect(Some("text/plain; charset=utf-8"), "profile"),
            Some(DocumentFormat::Text)
        );
        assert_eq!(
            DocumentFormat::detect(Some(MIME_DOCX), "profile"),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentFormat::detect(Some("application/octet-stream"), "회사소개서.PDF"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::detect(None, "Profile.DocX"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::detect(None, "notes.txt"), Some(DocumentFormat::Text));
    }

    #[test]
    fn test_detect_rejects_unknown() {
        assert_eq!(DocumentFormat::detect(Some("image/png"), "logo.png"), None);
        assert_eq!(DocumentFormat::detect(None, "archive.pdf.zip"), None);
        assert_eq!(DocumentFormat::detect(None, "legacy.doc"), None);
    }

    #[test]
    fn test_empty_mime_type_is_undeclared() {
        let file = UploadedFile::new("a.txt", Vec::new()).with_mime_type("");
        assert_eq!(file.mime_type(), None);
        assert_eq!(file.size(), 0);
    }
}
