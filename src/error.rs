//! Error types for the I/O facing parts of folio.
//!
//! Parsing itself never fails: malformed content degrades to placeholder titles and empty media
//! lists. Errors only arise when reading documents, loading configuration, or serialising output.

use thiserror::Error;

/// Failures raised while reading content, loading configuration, or writing output.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested document path does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Sections could not be serialised to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type alias using folio's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
