//! Unified error types for the backend service.

use thiserror::Error;

/// Unified error type for the backend service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// An entry in ALLOWED_ORIGINS is not a valid header value.
    #[error("invalid origin {origin:?}: {reason}")]
    InvalidOrigin {
        /// The offending origin entry.
        origin: String,
        /// Reason it was rejected.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
