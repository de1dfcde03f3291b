//! Engine error types

use thiserror::Error;

/// Errors produced by the segmentation engine
#[derive(Error, Debug)]
pub enum CoreError {
    /// The scoring oracle could not be reached or failed internally.
    ///
    /// Fatal for the in-flight segmentation call; the engine never retries
    /// and never returns a partial result.
    #[error("scoring oracle unavailable: {0}")]
    ScoringUnavailable(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CoreError>;
