//! FunFacts Fact Providers
//!
//! Sources of true/false statements behind a common async interface.
//!
//! # Providers
//!
//! - `OpenTriviaProvider`: Open Trivia DB boolean questions (true or false)
//! - `UselessFactsProvider`: Useless Facts API (always true)
//! - `StaticFactProvider`: bundled offline pool of 100 curated facts
//! - `MockProvider`: deterministic provider for testing
//!
//! # Examples
//!
//! ```
//! use funfacts_providers::{FactProvider, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("Honey never spoils.", true);
//! let fact = provider.fetch().await.unwrap();
//! assert_eq!(fact.text, "Honey never spoils.");
//! assert_eq!(provider.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod html;
pub mod opentdb;
pub mod static_pool;
pub mod uselessfacts;

mod static_data;

use async_trait::async_trait;
use funfacts_domain::{FactId, GameFact};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use opentdb::{Difficulty, OpenTriviaProvider};
pub use static_data::STATIC_FACTS;
pub use static_pool::StaticFactProvider;
pub use uselessfacts::UselessFactsProvider;

/// Errors that can occur while fetching a fact
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or transport failure, including timeouts
    #[error("Communication error: {0}")]
    Communication(String),

    /// Non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),

    /// API answered with a non-zero response code
    #[error("API response code {0}")]
    Api(u8),

    /// API answered successfully but returned nothing
    #[error("No facts returned")]
    Empty,

    /// Body could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("Provider error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Communication(e.to_string())
    }
}

/// A source of game facts
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Short stable name used in logs
    fn name(&self) -> &str;

    /// Fetch one fresh, unanswered fact
    async fn fetch(&self) -> Result<GameFact, ProviderError>;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock provider for deterministic testing
///
/// Returns a copy of a template fact (with a fresh id) on every call. It can
/// be scripted to fail a number of times first, or to always fail. Clones
/// share the call counter.
///
/// # Examples
///
/// ```
/// use funfacts_providers::{FactProvider, MockProvider};
///
/// # async fn example() {
/// let provider = MockProvider::new("Octopuses have three hearts.", true);
/// provider.fail_next(2);
///
/// assert!(provider.fetch().await.is_err());
/// assert!(provider.fetch().await.is_err());
/// assert!(provider.fetch().await.is_ok());
/// assert_eq!(provider.call_count(), 3);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: String,
    template: Option<GameFact>,
    failures_remaining: Arc<Mutex<usize>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider that always returns the given statement
    pub fn new(text: impl Into<String>, truth_value: bool) -> Self {
        Self::with_fact(GameFact::new(text, truth_value).with_source("Mock"))
    }

    /// Create a provider that always returns copies of `fact`
    pub fn with_fact(fact: GameFact) -> Self {
        Self {
            name: "mock".to_string(),
            template: Some(fact),
            failures_remaining: Arc::new(Mutex::new(0)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider whose every call fails
    pub fn failing() -> Self {
        Self {
            name: "mock-failing".to_string(),
            template: None,
            failures_remaining: Arc::new(Mutex::new(0)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Override the name reported in logs
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Fail the next `n` calls before succeeding again
    pub fn fail_next(&self, n: usize) {
        *lock(&self.failures_remaining) = n;
    }

    /// Get the number of times fetch was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock fact", true)
    }
}

#[async_trait]
impl FactProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<GameFact, ProviderError> {
        *lock(&self.call_count) += 1;

        {
            let mut remaining = lock(&self.failures_remaining);
            if *remaining > 0 {
                *remaining -= 1;
                return Err(ProviderError::Other("Mock error".to_string()));
            }
        }

        match &self.template {
            Some(template) => {
                let mut fact = template.clone();
                fact.id = FactId::new();
                Ok(fact)
            }
            None => Err(ProviderError::Communication("Mock provider offline".to_string())),
        }
    }
}
