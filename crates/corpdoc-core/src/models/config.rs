//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the corpdoc pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpdocConfig {
    /// Field recognition configuration.
    pub extraction: ExtractionConfig,

    /// Document handling configuration.
    pub documents: DocumentConfig,
}

/// Field recognition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Upper bound for founding years. `None` uses the current year.
    pub reference_year: Option<i32>,

    /// Records scoring below this confidence are flagged for review.
    pub review_threshold: u8,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            review_threshold: 50,
        }
    }
}

/// How PDF files are turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PdfMode {
    /// Read the embedded text layer.
    #[default]
    TextLayer,
    /// Emit a placeholder naming the file and its size.
    Stub,
}

/// Document handling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// PDF extraction mode.
    pub pdf_mode: PdfMode,

    /// Maximum accepted file size in bytes (0 = unlimited).
    pub max_file_size: u64,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            pdf_mode: PdfMode::TextLayer,
            max_file_size: 20 * 1024 * 1024,
        }
    }
}

impl CorpdocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
