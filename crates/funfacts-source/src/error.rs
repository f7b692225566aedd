//! Error types for fact sourcing

use funfacts_providers::ProviderError;
use thiserror::Error;

/// Errors that can occur while sourcing facts
///
/// None of these reach callers of `FactSource::next_fact`, which always falls
/// back to the static pool. They surface from construction and from the
/// retry helper.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A provider failed on every attempt
    #[error("Provider '{provider}' failed after {attempts} attempts: {source}")]
    Exhausted {
        /// Provider name
        provider: String,
        /// Attempts made
        attempts: u32,
        /// Last error returned
        #[source]
        source: ProviderError,
    },
}
