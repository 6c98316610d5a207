//! Error types for the corpdoc-core library.

use thiserror::Error;

/// Main error type for the corpdoc library.
#[derive(Error, Debug)]
pub enum CorpdocError {
    /// Document extraction error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning an uploaded file into text.
///
/// Every variant is fatal for the parse call: no partial record is produced.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Neither the MIME type nor the file extension names a known format.
    #[error("unsupported file format for '{name}' ({mime}); accepted formats are PDF, DOCX and TXT",
        mime = .mime_type.as_deref().unwrap_or("no MIME type"))]
    UnsupportedFormat {
        name: String,
        mime_type: Option<String>,
    },

    /// The byte stream is not valid UTF-8.
    #[error("failed to decode text as UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// The PDF text layer could not be read.
    #[error("failed to read PDF text: {0}")]
    Pdf(String),

    /// The file exceeds the configured size limit.
    #[error("file too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// Reading the file failed.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the corpdoc library.
pub type Result<T> = std::result::Result<T, CorpdocError>;
