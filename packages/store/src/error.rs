//! Error types for token persistence and configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration could not be serialised.
    #[error("Failed to write configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Reading or writing a persisted token failed.
    #[error("Token storage failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
