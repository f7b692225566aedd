//! Error types for score management

use thiserror::Error;

/// Errors that can occur while reading or writing scores
///
/// The public `ScoreManager` operations log these and return a safe default;
/// the `try_*` variants hand them to the caller.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Stored value is not valid score JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
