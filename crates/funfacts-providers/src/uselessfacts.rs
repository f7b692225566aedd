//! Useless Facts API provider
//!
//! <https://uselessfacts.jsph.pl> serves random trivia statements. Every
//! statement it returns is presented as true.

use crate::{FactProvider, ProviderError};
use async_trait::async_trait;
use funfacts_domain::GameFact;
use serde::Deserialize;
use std::time::Duration;

/// Default API base
pub const DEFAULT_BASE_URL: &str = "https://uselessfacts.jsph.pl/api/v2";

/// Default timeout for a single request (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fact payload returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFact {
    /// API-side identifier
    pub id: String,
    /// The statement
    pub text: String,
    /// Origin site name
    #[serde(default)]
    pub source: String,
    /// Origin URL
    #[serde(default)]
    pub source_url: String,
    /// Language code, e.g. "en"
    #[serde(default)]
    pub language: String,
    /// Stable link to the fact
    #[serde(default)]
    pub permalink: String,
}

impl ApiFact {
    /// Convert into an unanswered, true game fact
    pub fn into_game_fact(self) -> GameFact {
        let source = if self.source.is_empty() {
            "Useless Facts".to_string()
        } else {
            self.source
        };
        GameFact::new(self.text.trim(), true).with_source(source)
    }
}

/// Useless Facts API provider
pub struct UselessFactsProvider {
    base_url: String,
    client: reqwest::Client,
}

impl UselessFactsProvider {
    /// Create a provider against the given API base
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a provider against the public API with default settings
    pub fn default_endpoint() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Fetch one random fact
    pub async fn random_fact(&self) -> Result<ApiFact, ProviderError> {
        self.get_json(&format!("{}/facts/random", self.base_url)).await
    }

    /// Fetch a fact by its API id
    pub async fn fact_by_id(&self, id: &str) -> Result<ApiFact, ProviderError> {
        let url = self.fact_url(id)?;
        self.get_json(&url).await
    }

    /// URL of a single fact; ids are alphanumeric
    fn fact_url(&self, id: &str) -> Result<String, ProviderError> {
        let id = id.trim();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ProviderError::Other(format!("Invalid fact id '{}'", id)));
        }
        Ok(format!("{}/facts/{}", self.base_url, id))
    }

    async fn get_json(&self, url: &str) -> Result<ApiFact, ProviderError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        response
            .json::<ApiFact>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse fact: {}", e)))
    }
}

#[async_trait]
impl FactProvider for UselessFactsProvider {
    fn name(&self) -> &str {
        "uselessfacts"
    }

    async fn fetch(&self) -> Result<GameFact, ProviderError> {
        Ok(self.random_fact().await?.into_game_fact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_fact_conversion() {
        let raw = r#"{
            "id": "4f7b6a",
            "text": "A jiffy is an actual unit of time.\n",
            "source": "djtech.net",
            "source_url": "http://www.djtech.net/humor/useless_facts.htm",
            "language": "en",
            "permalink": "https://uselessfacts.jsph.pl/api/v2/facts/4f7b6a"
        }"#;

        let fact: ApiFact = serde_json::from_str(raw).unwrap();
        let game_fact = fact.into_game_fact();
        assert_eq!(game_fact.text, "A jiffy is an actual unit of time.");
        assert!(game_fact.truth_value);
        assert_eq!(game_fact.source.as_deref(), Some("djtech.net"));
    }

    #[test]
    fn test_missing_source_gets_label() {
        let raw = r#"{"id": "x", "text": "Something."}"#;
        let fact: ApiFact = serde_json::from_str(raw).unwrap();
        assert_eq!(fact.into_game_fact().source.as_deref(), Some("Useless Facts"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = UselessFactsProvider::new("http://example.test/api/v2/", Duration::from_secs(1));
        assert_eq!(provider.base_url, "http://example.test/api/v2");
    }

    #[test]
    fn test_fact_url() {
        let provider = UselessFactsProvider::new("http://example.test/api/v2", Duration::from_secs(1));
        assert_eq!(
            provider.fact_url(" 4f7b6a ").unwrap(),
            "http://example.test/api/v2/facts/4f7b6a"
        );
        assert!(provider.fact_url("").is_err());
        assert!(provider.fact_url("../random").is_err());
    }

    #[tokio::test]
    async fn test_fact_by_id_rejects_bad_id_without_request() {
        let provider = UselessFactsProvider::new("http://localhost:99999/api/v2", Duration::from_secs(1));
        let result = provider.fact_by_id("a/b").await;
        assert!(matches!(result, Err(ProviderError::Other(_))));

        let result = provider.fact_by_id("4f7b6a").await;
        assert!(matches!(result, Err(ProviderError::Communication(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let provider = UselessFactsProvider::new("http://localhost:99999/api/v2", Duration::from_secs(1));
        let result = provider.fetch().await;
        assert!(matches!(result, Err(ProviderError::Communication(_))));
    }
}
