use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No text to anonymize; provide some text first")]
    EmptyInput,

    #[error("Entity model unavailable: {0}")]
    OracleUnavailable(String),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
