//! DraftSense error types

use thiserror::Error;

/// DraftSense error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Classifier construction error
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for DraftSense operations
pub type Result<T> = std::result::Result<T, Error>;
