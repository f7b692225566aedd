//! Configuration for fact sourcing
//!
//! Defines queue thresholds, retry behaviour and the true/false mix.

use crate::retry::RetryPolicy;
use funfacts_providers::Difficulty;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the fact source
///
/// # Examples
///
/// ```
/// use funfacts_source::FactSourceConfig;
///
/// let config = FactSourceConfig::default();
/// assert_eq!(config.low_water_mark, 3);
/// assert_eq!(config.max_attempts, 3);
///
/// // No network at all, static pool only
/// let config = FactSourceConfig::offline();
/// assert!(!config.remote_providers);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactSourceConfig {
    /// Refill is triggered when fewer than this many facts remain queued
    /// Default: 3
    pub low_water_mark: usize,

    /// Facts fetched per refill
    /// Default: 5
    pub batch_size: usize,

    /// Attempts per provider before moving on
    /// Default: 3
    pub max_attempts: u32,

    /// Delay after failed attempt `n` is `n * retry_base_delay_ms`
    /// Default: 500
    pub retry_base_delay_ms: u64,

    /// Recently served static ids excluded from a draw
    /// Default: 20
    pub recent_window: usize,

    /// Probability that a live resolution asks for a true fact
    /// Default: 0.5
    pub true_fact_ratio: f64,

    /// Per-request HTTP timeout (seconds)
    /// Default: 10
    pub request_timeout_secs: u64,

    /// Open Trivia DB question difficulty
    pub trivia_difficulty: Difficulty,

    /// Whether to contact remote APIs at all
    /// Default: true
    pub remote_providers: bool,
}

impl Default for FactSourceConfig {
    fn default() -> Self {
        Self {
            low_water_mark: 3,
            batch_size: 5,
            max_attempts: 3,
            retry_base_delay_ms: 500,
            recent_window: 20,
            true_fact_ratio: 0.5,
            request_timeout_secs: 10,
            trivia_difficulty: Difficulty::Medium,
            remote_providers: true,
        }
    }
}

impl FactSourceConfig {
    /// Offline preset: static pool only, no retries
    pub fn offline() -> Self {
        Self {
            max_attempts: 1,
            retry_base_delay_ms: 0,
            remote_providers: false,
            ..Self::default()
        }
    }

    /// Get the per-request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Retry policy applied to each provider
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_millis(self.retry_base_delay_ms),
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("batch_size must be greater than 0".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.true_fact_ratio) {
            return Err("true_fact_ratio must be between 0.0 and 1.0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
