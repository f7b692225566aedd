//! Configuration for score storage

use serde::{Deserialize, Serialize};

/// Storage keys used by the score manager
///
/// # Examples
///
/// ```
/// use funfacts_scores::ScoreConfig;
///
/// let config = ScoreConfig::default();
/// assert_eq!(config.current_score_key, "currentScore");
/// assert_eq!(config.history_key, "scoreHistory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Key holding the in-progress score
    pub current_score_key: String,

    /// Key holding the finalized score history
    pub history_key: String,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            current_score_key: "currentScore".to_string(),
            history_key: "scoreHistory".to_string(),
        }
    }
}

impl ScoreConfig {
    /// Keys with a common prefix, for sharing a store with other data
    pub fn namespaced(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            current_score_key: format!("{}{}", prefix, defaults.current_score_key),
            history_key: format!("{}{}", prefix, defaults.history_key),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.current_score_key.is_empty() || self.history_key.is_empty() {
            return Err("score keys must not be empty".to_string());
        }
        if self.current_score_key == self.history_key {
            return Err("current_score_key and history_key must differ".to_string());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_namespaced() {
        let config = ScoreConfig::namespaced("@FunFacts:");
        assert_eq!(config.current_score_key, "@FunFacts:currentScore");
        assert_eq!(config.history_key, "@FunFacts:scoreHistory");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_keys() {
        let config = ScoreConfig {
            current_score_key: "same".to_string(),
            history_key: "same".to_string(),
        };
        assert!(config.validate().is_err());

        let config = ScoreConfig {
            current_score_key: String::new(),
            ..ScoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScoreConfig::namespaced("test:");
        let parsed = ScoreConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
