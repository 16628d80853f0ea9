use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kryptos")]
#[command(about = "Redact personal data from Portuguese legal documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true, env = "KRYPTOS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace sensitive data with [<LABEL> REMOVIDO] markers
    Redact {
        #[command(flatten)]
        input: InputArgs,

        /// Write the redacted text to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Write to the configured output file name
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },

    /// List candidate findings without redacting
    Scan {
        #[command(flatten)]
        input: InputArgs,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the active detection patterns
    Patterns,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Text or PDF file ("-" or absent reads stdin)
    pub input: Option<PathBuf>,

    /// Inline text instead of a file
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,
}
