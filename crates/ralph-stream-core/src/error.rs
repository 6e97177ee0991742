//! Error types for the stream renderer.

use thiserror::Error;

/// Result type alias using the crate `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading, decoding or writing the event stream.
#[derive(Debug, Error)]
pub enum Error {
    /// Line is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading stdin or writing stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the dispatcher may skip the offending line and continue.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
