//! Error types for the panel.

use std::path::PathBuf;

/// All errors that can occur while loading panel inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid trade in ledger: {0}")]
    Ledger(#[from] tickerdeck::ValidationError),

    #[error("failed to read quotes file {path}: {source}")]
    QuotesRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse quotes JSON: {0}")]
    QuotesParse(#[from] serde_json::Error),

    #[error("invalid --at timestamp `{value}`: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
