//! Source handler trait and registry

use async_trait::async_trait;
use kryptos_core::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::pdf::PdfHandler;
use crate::text::TextHandler;

/// Bytes sniffed from the start of a file for format detection
const HEAD_LEN: u64 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Text,
    Pdf,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Text => write!(f, "text"),
            DocumentFormat::Pdf => write!(f, "pdf"),
        }
    }
}

/// Plain text extracted from an input document
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub text: String,
    pub format: DocumentFormat,
    pub pages: usize,
    /// Size of the source in bytes
    pub size_bytes: usize,
    /// blake3 hex digest of `text`, safe to log
    pub fingerprint: String,
}

impl Document {
    pub fn new(text: String, format: DocumentFormat, pages: usize, size_bytes: usize) -> Self {
        let fingerprint = blake3::hash(text.as_bytes()).to_hex().to_string();
        Self {
            text,
            format,
            pages,
            size_bytes,
            fingerprint,
        }
    }

    /// Document for text that did not come from a file (stdin, `--text`)
    pub fn from_text(text: String) -> Self {
        let size = text.len();
        Self::new(text, DocumentFormat::Text, 1, size)
    }
}

/// Trait for handling different document formats
#[async_trait]
pub trait SourceHandler: Send + Sync {
    /// Check if this handler can read the file, given its path and first bytes
    fn can_handle(&self, path: &Path, head: &[u8]) -> bool;

    /// Extract the document text
    async fn load(&self, path: &Path) -> Result<Document>;
}

/// Handlers tried in order; the first that accepts a file loads it.
pub struct SourceHandlerRegistry {
    handlers: Vec<Box<dyn SourceHandler>>,
}

impl SourceHandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: vec![Box::new(PdfHandler), Box::new(TextHandler)],
        }
    }

    pub async fn load(&self, path: &Path) -> Result<Document> {
        let head = read_head(path).await?;

        let handler = self
            .handlers
            .iter()
            .find(|h| h.can_handle(path, &head))
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

        let document = handler.load(path).await?;
        debug!(
            format = %document.format,
            pages = document.pages,
            size_bytes = document.size_bytes,
            fingerprint = %document.fingerprint,
            "Loaded document"
        );

        Ok(document)
    }
}

impl Default for SourceHandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive extension check
pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

async fn read_head(path: &Path) -> Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut head = Vec::with_capacity(HEAD_LEN as usize);
    file.take(HEAD_LEN).read_to_end(&mut head).await?;
    Ok(head)
}
