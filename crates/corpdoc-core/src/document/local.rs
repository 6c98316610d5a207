//! Files read from the local filesystem.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::DocumentSource;
use crate::error::DocumentError;

/// A document on disk. Format dispatch relies on the extension since no MIME
/// type is declared unless one is set explicitly.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    mime_type: Option<String>,
    size: u64,
}

impl LocalFile {
    /// Stat a file without reading its content.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Opened {} ({} bytes)", path.display(), metadata.len());

        Ok(Self {
            path,
            name,
            mime_type: None,
            size: metadata.len(),
        })
    }

    /// Declare a MIME type for the file.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}
