//! API error types

use maqta_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The input markup failed structural validation.
    ///
    /// Recoverable by the caller: reject the request and report the reason
    /// verbatim.
    #[error("invalid markup: {reason}")]
    InvalidMarkup {
        /// The first failing predicate's reason, suitable for display
        reason: String,
    },

    /// The scoring oracle failed; fatal for the in-flight call.
    #[error(transparent)]
    Scoring(#[from] CoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
