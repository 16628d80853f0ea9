mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use kryptos_config::Config;
use kryptos_engine::Anonymizer;
use kryptos_ner::HeuristicModel;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for redacted text
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Redact {
            input,
            output,
            save,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let anonymizer = build_anonymizer(&config)?;
            commands::redact::handle(&anonymizer, &config, input, output, save).await
        }
        Commands::Scan { input, json } => {
            let config = load_config(cli.config.as_deref())?;
            let anonymizer = build_anonymizer(&config)?;
            commands::scan::handle(&anonymizer, input, json).await
        }
        Commands::Patterns => {
            let config = load_config(cli.config.as_deref())?;
            commands::patterns::handle(&config)
        }
        Commands::Init { force } => commands::init::handle(cli.config.as_deref(), force),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    debug!(
        path = %path.map(Path::to_path_buf).unwrap_or_else(Config::config_path).display(),
        overlap = %config.redaction.overlap,
        window_radius = config.roles.window_radius,
        disabled_patterns = config.patterns.disabled.len(),
        "Loaded config"
    );

    Ok(config)
}

/// Load the entity model once and build the pipeline around it
fn build_anonymizer(config: &Config) -> Result<Anonymizer> {
    let model = HeuristicModel::load(config.model.gazetteer.as_deref())?;
    Ok(Anonymizer::new(Arc::new(model), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kryptos_core::OverlapPolicy;

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kryptos.toml");
        std::fs::write(&path, "[redaction]\noverlap = \"priority\"\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.redaction.overlap, OverlapPolicy::Priority);
    }

    #[test]
    fn test_load_config_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(dir.path().join("nada.toml").as_path())).is_err());
    }
}
