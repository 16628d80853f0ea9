use async_trait::async_trait;
use kryptos_core::{Error, Result};
use std::path::Path;

use crate::handler::{Document, DocumentFormat, SourceHandler, has_extension};

/// Plain UTF-8 text files
pub struct TextHandler;

#[async_trait]
impl SourceHandler for TextHandler {
    fn can_handle(&self, path: &Path, head: &[u8]) -> bool {
        has_extension(path, "txt") || looks_like_text(head)
    }

    async fn load(&self, path: &Path) -> Result<Document> {
        let bytes = tokio::fs::read(path).await?;
        let size = bytes.len();

        let text = String::from_utf8(bytes).map_err(|_| {
            Error::UnsupportedFormat(format!("{} is not valid UTF-8 text", path.display()))
        })?;

        Ok(Document::new(text, DocumentFormat::Text, 1, size))
    }
}

/// UTF-8 without NUL bytes or a PDF signature. A multi-byte character cut
/// at the end of `head` still counts as text.
fn looks_like_text(head: &[u8]) -> bool {
    if head.starts_with(b"%PDF-") || head.contains(&0) {
        return false;
    }
    match std::str::from_utf8(head) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}
