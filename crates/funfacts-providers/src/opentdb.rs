//! Open Trivia Database provider
//!
//! Fetches true/false questions from <https://opentdb.com>. The API answers
//! with a numeric `response_code` next to the results; anything other than
//! 0 means no usable question came back even though the HTTP call succeeded.
//!
//! # Examples
//!
//! ```no_run
//! use funfacts_providers::{FactProvider, OpenTriviaProvider};
//!
//! # async fn example() -> Result<(), funfacts_providers::ProviderError> {
//! let provider = OpenTriviaProvider::default_endpoint();
//! let fact = provider.fetch().await?;
//! println!("{} ({})", fact.text, fact.truth_value);
//! # Ok(())
//! # }
//! ```

use crate::html::decode_entities;
use crate::{FactProvider, ProviderError};
use async_trait::async_trait;
use funfacts_domain::GameFact;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Open Trivia DB endpoint
pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";

/// Default timeout for a single request (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Source label attached to every fact from this provider
pub const SOURCE_LABEL: &str = "Open Trivia Database";

/// Question difficulty accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy questions
    Easy,
    /// Medium questions
    Medium,
    /// Hard questions
    Hard,
}

impl Difficulty {
    /// Query-string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

/// Response envelope from the API
#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    results: Vec<TriviaQuestion>,
}

/// One boolean question
#[derive(Debug, Deserialize)]
struct TriviaQuestion {
    category: String,
    question: String,
    correct_answer: String,
}

/// Open Trivia DB provider
pub struct OpenTriviaProvider {
    endpoint: String,
    difficulty: Difficulty,
    client: reqwest::Client,
}

impl OpenTriviaProvider {
    /// Create a provider against the given endpoint
    pub fn new(endpoint: impl Into<String>, difficulty: Difficulty, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            endpoint: endpoint.into(),
            difficulty,
            client,
        }
    }

    /// Create a provider against the public endpoint with default settings
    pub fn default_endpoint() -> Self {
        Self::new(
            DEFAULT_ENDPOINT,
            Difficulty::default(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Fetch `amount` true/false questions (the API caps this at 50)
    pub async fn fetch_questions(&self, amount: u8) -> Result<Vec<GameFact>, ProviderError> {
        let amount = amount.clamp(1, 50).to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("amount", amount.as_str()),
                ("type", "boolean"),
                ("difficulty", self.difficulty.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Turn a raw API body into game facts
fn parse_response(body: &str) -> Result<Vec<GameFact>, ProviderError> {
    let envelope: TriviaResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    if envelope.response_code != 0 {
        return Err(ProviderError::Api(envelope.response_code));
    }
    if envelope.results.is_empty() {
        return Err(ProviderError::Empty);
    }

    envelope.results.into_iter().map(into_game_fact).collect()
}

fn into_game_fact(question: TriviaQuestion) -> Result<GameFact, ProviderError> {
    let truth_value = match question.correct_answer.as_str() {
        "True" => true,
        "False" => false,
        other => {
            return Err(ProviderError::InvalidResponse(format!(
                "Unexpected correct_answer: {}",
                other
            )))
        }
    };

    Ok(GameFact::new(decode_entities(&question.question), truth_value)
        .with_category(decode_entities(&question.category))
        .with_source(SOURCE_LABEL))
}

#[async_trait]
impl FactProvider for OpenTriviaProvider {
    fn name(&self) -> &str {
        "opentdb"
    }

    async fn fetch(&self) -> Result<GameFact, ProviderError> {
        let mut facts = self.fetch_questions(1).await?;
        facts.pop().ok_or(ProviderError::Empty)
    }
}
