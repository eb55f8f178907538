//! Core error types for hudfmt

use thiserror::Error;

/// Main error type for hudfmt operations
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for hudfmt operations
pub type FormatResult<T> = Result<T, FormatError>;

impl FormatError {
    /// Shorthand for an `InvalidInput` error naming the offending value
    pub fn invalid_input(what: &str, value: impl std::fmt::Display) -> Self {
        FormatError::InvalidInput(format!("{} must be finite and non-negative, got {}", what, value))
    }
}

impl From<anyhow::Error> for FormatError {
    fn from(err: anyhow::Error) -> Self {
        FormatError::Other(err.to_string())
    }
}

impl From<toml::ser::Error> for FormatError {
    fn from(err: toml::ser::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}
