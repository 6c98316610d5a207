//! Text extraction for PDF, DOCX and plain text uploads.

use lopdf::Document;
use tracing::{debug, trace};

use super::{DocumentFormat, DocumentSource};
use crate::error::DocumentError;
use crate::models::config::{DocumentConfig, PdfMode};

/// Text produced by a format extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Format the source was dispatched to.
    pub format: DocumentFormat,
    /// UTF-8 text handed to the field recognizers.
    pub text: String,
}

/// Dispatches a source to the extractor for its format.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    pdf_mode: PdfMode,
    max_file_size: u64,
}

impl TextExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&DocumentConfig::default())
    }

    /// Create an extractor from document configuration.
    pub fn from_config(config: &DocumentConfig) -> Self {
        Self {
            pdf_mode: config.pdf_mode,
            max_file_size: config.max_file_size,
        }
    }

    /// Set the PDF extraction mode.
    pub fn with_pdf_mode(mut self, mode: PdfMode) -> Self {
        self.pdf_mode = mode;
        self
    }

    /// Set the maximum accepted file size (0 = unlimited).
    pub fn with_max_file_size(mut self, limit: u64) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Extract text from a source.
    ///
    /// The format is resolved before any content is read, so unsupported or
    /// oversized files fail without touching the bytes.
    pub async fn extract<S>(&self, source: &S) -> Result<ExtractedText, DocumentError>
    where
        S: DocumentSource + ?Sized,
    {
        let format = DocumentFormat::detect(source.mime_type(), source.name()).ok_or_else(|| {
            DocumentError::UnsupportedFormat {
                name: source.name().to_string(),
                mime_type: source.mime_type().map(str::to_string),
            }
        })?;

        let size = source.size();
        if self.max_file_size > 0 && size > self.max_file_size {
            return Err(DocumentError::FileTooLarge {
                size,
                limit: self.max_file_size,
            });
        }

        debug!("Extracting {} as {:?} ({} bytes)", source.name(), format, size);

        let text = match format {
            DocumentFormat::Text => {
                let data = source.read_bytes().await?;
                extract_plain_text(&data)?
            }
            DocumentFormat::Pdf => match self.pdf_mode {
                PdfMode::TextLayer => {
                    let data = source.read_bytes().await?;
                    extract_pdf_text(&data)?
                }
                PdfMode::Stub => {
                    let data = source.read_bytes().await?;
                    extract_pdf_stub(source.name(), data.len() as u64)
                }
            },
            DocumentFormat::Docx => {
                let data = source.read_bytes().await?;
                extract_docx_stub(source.name(), data.len() as u64)
            }
        };

        debug!("Extracted {} characters from {}", text.chars().count(), source.name());

        Ok(ExtractedText { format, text })
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract text from a source with default settings.
pub async fn extract_text<S>(source: &S) -> Result<String, DocumentError>
where
    S: DocumentSource + ?Sized,
{
    TextExtractor::new().extract(source).await.map(|e| e.text)
}

/// Decode UTF-8 text, dropping a leading byte order mark.
pub fn extract_plain_text(data: &[u8]) -> Result<String, DocumentError> {
    let text = std::str::from_utf8(data)?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

/// Extract the embedded text layer of a PDF.
///
/// Empty input yields empty text. PDFs encrypted with an empty user password
/// are decrypted before extraction.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, DocumentError> {
    if data.is_empty() {
        return Ok(String::new());
    }

    let mut doc = Document::load_mem(data).map_err(|e| DocumentError::Pdf(e.to_string()))?;

    let extracted = if doc.is_encrypted() {
        doc.decrypt("")
            .map_err(|_| DocumentError::Pdf("PDF is encrypted".to_string()))?;
        debug!("Decrypted PDF with empty password");

        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| DocumentError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
        pdf_extract::extract_text_from_mem(&decrypted)
    } else {
        pdf_extract::extract_text_from_mem(data)
    };
    let text = extracted.map_err(|e| DocumentError::Pdf(e.to_string()))?;

    trace!("PDF with {} pages yielded {} bytes of text", doc.get_pages().len(), text.len());
    Ok(text)
}

/// Placeholder text for a PDF when text-layer extraction is disabled.
pub fn extract_pdf_stub(name: &str, size: u64) -> String {
    stub_placeholder("PDF", name, size)
}

/// Placeholder text for a DOCX upload. Word documents are not parsed.
pub fn extract_docx_stub(name: &str, size: u64) -> String {
    stub_placeholder("DOCX", name, size)
}

fn stub_placeholder(kind: &str, name: &str, size: u64) -> String {
    if size == 0 {
        return String::new();
    }
    format!("[{} document: {} ({} bytes)]", kind, name, size)
}
