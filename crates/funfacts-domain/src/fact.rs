//! Game facts - the statements a player judges true or false

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unique identifier for a game fact based on UUIDv7
///
/// Every fact instance handed to a player gets a fresh id, even when the
/// same static statement is served twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactId(uuid::Uuid);

impl FactId {
    /// Generate a new UUIDv7-based FactId
    ///
    /// # Examples
    ///
    /// ```
    /// use funfacts_domain::FactId;
    ///
    /// let a = FactId::new();
    /// let b = FactId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Parse a FactId from its string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid fact id: {}", e))
    }
}

impl Default for FactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a fact that has already been answered is answered again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fact has already been answered")]
pub struct AlreadyAnswered;

/// One trivia round: a statement and whether it is true
///
/// Created by the fact source and never touched by it again. The consumer
/// records the player's guess exactly once through [`GameFact::answer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameFact {
    /// Unique identifier for this fact instance
    pub id: FactId,

    /// The statement shown to the player
    pub text: String,

    /// Whether the statement is factually true
    pub truth_value: bool,

    /// Shown after answering; always present for static false facts
    pub explanation: Option<String>,

    /// Topic, e.g. "Animals"
    pub category: Option<String>,

    /// Where the statement came from
    pub source: Option<String>,

    /// Set once the player answers
    #[serde(default)]
    pub is_answered: bool,

    /// The player's guess
    pub user_guess: Option<bool>,

    /// Whether the guess matched `truth_value`
    pub was_guess_correct: Option<bool>,
}

impl GameFact {
    /// Create an unanswered fact with a fresh id
    pub fn new(text: impl Into<String>, truth_value: bool) -> Self {
        Self {
            id: FactId::new(),
            text: text.into(),
            truth_value,
            explanation: None,
            category: None,
            source: None,
            is_answered: false,
            user_guess: None,
            was_guess_correct: None,
        }
    }

    /// Attach an explanation
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Attach a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach a source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Record the player's guess and return whether it was correct
    ///
    /// # Examples
    ///
    /// ```
    /// use funfacts_domain::GameFact;
    ///
    /// let mut fact = GameFact::new("Bats are blind.", false);
    /// assert_eq!(fact.answer(false), Ok(true));
    /// assert!(fact.answer(true).is_err());
    /// ```
    pub fn answer(&mut self, guess: bool) -> Result<bool, AlreadyAnswered> {
        if self.is_answered {
            return Err(AlreadyAnswered);
        }

        let correct = guess == self.truth_value;
        self.is_answered = true;
        self.user_guess = Some(guess);
        self.was_guess_correct = Some(correct);
        Ok(correct)
    }
}

/// Immutable record in the compiled-in static fact table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticFact {
    /// Stable identifier such as `true-12` or `false-3`
    pub id: &'static str,
    /// The statement
    pub text: &'static str,
    /// Whether the statement is true
    pub is_true: bool,
    /// Topic
    pub category: &'static str,
    /// Why the statement is true or false
    pub explanation: &'static str,
    /// Field of study the statement comes from
    pub source: &'static str,
}

impl StaticFact {
    /// Build a fresh game fact instance from this record
    pub fn to_game_fact(&self) -> GameFact {
        GameFact::new(self.text, self.is_true)
            .with_explanation(self.explanation)
            .with_category(self.category)
            .with_source(self.source)
    }
}
