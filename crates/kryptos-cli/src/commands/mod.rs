pub mod completions;
pub mod init;
pub mod patterns;
pub mod redact;
pub mod scan;

use anyhow::Result;
use kryptos_sources::{Document, SourceHandlerRegistry};
use tokio::io::AsyncReadExt;

use crate::cli::InputArgs;

/// Resolve the input of `redact`/`scan`: inline text, a file, or stdin
pub async fn read_input(input: InputArgs) -> Result<Document> {
    if let Some(text) = input.text {
        return Ok(Document::from_text(text));
    }

    match input.input {
        Some(path) if path.as_os_str() != "-" => {
            Ok(SourceHandlerRegistry::new().load(&path).await?)
        }
        _ => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(Document::from_text(text))
        }
    }
}
