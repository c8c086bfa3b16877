use thiserror::Error;

/// Top-level error type for KUSUM Sarthi.
///
/// Subsystem crates define their own error types and implement
/// `From<SarthiError>` so that `?` works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SarthiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for SarthiError {
    fn from(err: toml::de::Error) -> Self {
        SarthiError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SarthiError {
    fn from(err: toml::ser::Error) -> Self {
        SarthiError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SarthiError {
    fn from(err: serde_json::Error) -> Self {
        SarthiError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Sarthi operations.
pub type Result<T> = std::result::Result<T, SarthiError>;
