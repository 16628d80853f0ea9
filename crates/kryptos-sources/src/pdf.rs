use async_trait::async_trait;
use kryptos_core::{Error, Result};
use std::path::Path;

use crate::handler::{Document, DocumentFormat, SourceHandler, has_extension};

const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// PDF documents with a text layer
pub struct PdfHandler;

#[async_trait]
impl SourceHandler for PdfHandler {
    fn can_handle(&self, path: &Path, head: &[u8]) -> bool {
        has_extension(path, "pdf") || head.starts_with(PDF_SIGNATURE)
    }

    async fn load(&self, path: &Path) -> Result<Document> {
        let bytes = tokio::fs::read(path).await?;
        let size = bytes.len();

        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        })
        .await
        .map_err(|e| Error::Extraction(format!("extraction task failed: {}", e)))?
        .map_err(|e| Error::Extraction(format!("{}: {}", path.display(), e)))?;

        let text = join_pages(&pages);

        Ok(Document::new(text, DocumentFormat::Pdf, pages.len(), size))
    }
}

/// Page texts in page order, with no separator added
fn join_pages(pages: &[String]) -> String {
    pages.concat()
}
