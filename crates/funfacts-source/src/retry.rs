//! Bounded retry with linear backoff

use crate::SourceError;
use funfacts_domain::GameFact;
use funfacts_providers::{FactProvider, ProviderError};
use std::time::Duration;

/// How many times to try a provider and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay unit; the wait after failed attempt `n` is `n * base_delay`
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Wait after the given failed attempt (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

/// Fetch one fact from `provider`, retrying per `policy`
///
/// Sleeps only between attempts, never after the last one.
pub async fn fetch_with_retry(
    provider: &dyn FactProvider,
    policy: &RetryPolicy,
) -> Result<GameFact, SourceError> {
    let mut attempts = 0;
    let mut last_error = None;

    while attempts < policy.max_attempts {
        match provider.fetch().await {
            Ok(fact) => return Ok(fact),
            Err(e) => {
                tracing::warn!(
                    provider = provider.name(),
                    attempt = attempts + 1,
                    "Fetch failed: {}",
                    e
                );
                last_error = Some(e);
            }
        }

        attempts += 1;
        if attempts < policy.max_attempts {
            tokio::time::sleep(policy.delay_for(attempts)).await;
        }
    }

    Err(SourceError::Exhausted {
        provider: provider.name().to_string(),
        attempts,
        source: last_error
            .unwrap_or_else(|| ProviderError::Other("No attempts made".to_string())),
    })
}
