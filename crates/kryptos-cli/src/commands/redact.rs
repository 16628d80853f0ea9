use anyhow::Result;
use kryptos_config::Config;
use kryptos_engine::Anonymizer;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::InputArgs;
use crate::commands::read_input;

pub async fn handle(
    anonymizer: &Anonymizer,
    config: &Config,
    input: InputArgs,
    output: Option<PathBuf>,
    save: bool,
) -> Result<()> {
    let document = read_input(input).await?;
    let redacted = anonymizer.process(&document.text)?;

    let target = if save {
        Some(PathBuf::from(&config.output.file_name))
    } else {
        output
    };

    match target {
        Some(path) => {
            tokio::fs::write(&path, &redacted).await?;
            eprintln!("✓ Redacted text written to {}", path.display());
        }
        None => write_redacted(&mut std::io::stdout().lock(), &redacted)?,
    }

    Ok(())
}

/// Write the redacted text exactly as produced, without adding a newline
fn write_redacted(out: &mut impl Write, redacted: &str) -> std::io::Result<()> {
    out.write_all(redacted.as_bytes())?;
    out.flush()
}
