//! Score computation, persistence and ranking

use crate::{ScoreConfig, ScoreError};
use funfacts_domain::scoring::{self, sort_ranked};
use funfacts_domain::{FinalizedScore, GameScore, KeyValueStore, ScoreStats, StoredScore};
use std::fmt::Display;

/// Computes, persists and ranks scores over a key-value store
///
/// Two keys are used: one for the in-progress score, overwritten on every
/// answer, and one for the history of finalized scores (unsorted on disk,
/// ranked on read).
///
/// Every operation has a `try_*` counterpart returning the error. The plain
/// variants log failures and degrade to "no score memory" instead.
///
/// # Examples
///
/// ```
/// use funfacts_scores::ScoreManager;
/// use funfacts_store::MemoryStore;
///
/// let mut scores = ScoreManager::with_defaults(MemoryStore::new());
/// scores.save_current_score(2, 3);
///
/// let result = scores.finalize_score();
/// assert!(result.is_new_high_score);
/// assert_eq!(result.final_score.percentage, 67);
/// assert_eq!(scores.get_all_scores().len(), 1);
/// ```
pub struct ScoreManager<S: KeyValueStore> {
    store: S,
    config: ScoreConfig,
}

fn store_error(e: impl Display) -> ScoreError {
    ScoreError::Store(e.to_string())
}

impl<S> ScoreManager<S>
where
    S: KeyValueStore,
    S::Error: Display,
{
    /// Create a manager with the given keys
    pub fn new(store: S, config: ScoreConfig) -> Result<Self, ScoreError> {
        config.validate().map_err(ScoreError::Config)?;
        Ok(Self { store, config })
    }

    /// Create a manager with the default keys
    pub fn with_defaults(store: S) -> Self {
        Self {
            store,
            config: ScoreConfig::default(),
        }
    }

    /// Keys in use
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Release the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Rounded accuracy; 0 when nothing was answered
    pub fn compute_percentage(correct: u32, total: u32) -> u32 {
        scoring::compute_percentage(correct, total)
    }

    /// Accuracy-and-volume ranking score; 0 when nothing was answered
    pub fn compute_composite_score(correct: u32, total: u32) -> f64 {
        scoring::compute_composite_score(correct, total)
    }

    /// Best score by composite, ties going to the most recent
    pub fn find_highest_score(scores: &[GameScore]) -> Option<GameScore> {
        scoring::find_highest_score(scores).cloned()
    }

    /// Build a fresh score for a tally
    ///
    /// A `correct` count above `total` is clamped to `total`.
    pub fn create_score(&self, correct: u32, total: u32) -> GameScore {
        let correct = if correct > total {
            tracing::warn!(correct, total, "Correct count exceeds total, clamping");
            total
        } else {
            correct
        };
        GameScore::now(correct, total)
    }

    /// Overwrite the in-progress score slot
    pub fn save_current_score(&mut self, correct: u32, total: u32) {
        if let Err(e) = self.try_save_current_score(correct, total) {
            tracing::error!("Error saving current score: {}", e);
        }
    }

    /// Overwrite the in-progress score slot, returning the score written
    pub fn try_save_current_score(
        &mut self,
        correct: u32,
        total: u32,
    ) -> Result<GameScore, ScoreError> {
        let score = self.create_score(correct, total);
        let json = serde_json::to_string(&score)?;
        self.store
            .set(&self.config.current_score_key, &json)
            .map_err(store_error)?;
        Ok(score)
    }

    /// The in-progress score, if any
    pub fn get_current_score(&self) -> Option<GameScore> {
        self.try_get_current_score().unwrap_or_else(|e| {
            tracing::error!("Error getting current score: {}", e);
            None
        })
    }

    /// The in-progress score, if any
    pub fn try_get_current_score(&self) -> Result<Option<GameScore>, ScoreError> {
        let Some(json) = self
            .store
            .get(&self.config.current_score_key)
            .map_err(store_error)?
        else {
            return Ok(None);
        };

        let stored: StoredScore = serde_json::from_str(&json)?;
        Ok(Some(stored.normalize()))
    }

    /// Clear the in-progress score slot
    pub fn reset_current_score(&mut self) {
        if let Err(e) = self.try_reset_current_score() {
            tracing::error!("Error resetting current score: {}", e);
        }
    }

    /// Clear the in-progress score slot
    pub fn try_reset_current_score(&mut self) -> Result<(), ScoreError> {
        self.store
            .remove(&self.config.current_score_key)
            .map_err(store_error)
    }

    /// Move the in-progress score into history
    ///
    /// A missing or empty (no answers) current score leaves history untouched
    /// and is never a new high score.
    pub fn finalize_score(&mut self) -> FinalizedScore {
        self.try_finalize_score().unwrap_or_else(|e| {
            tracing::error!("Error finalizing score: {}", e);
            FinalizedScore {
                is_new_high_score: false,
                final_score: GameScore::zero(),
            }
        })
    }

    /// Move the in-progress score into history
    pub fn try_finalize_score(&mut self) -> Result<FinalizedScore, ScoreError> {
        let current = match self.try_get_current_score()? {
            Some(score) if score.total_count > 0 => score,
            other => {
                return Ok(FinalizedScore {
                    is_new_high_score: false,
                    final_score: other.unwrap_or_else(GameScore::zero),
                })
            }
        };

        // Unreadable history counts as empty
        let mut history = self.load_history().unwrap_or_else(|e| {
            tracing::error!("Error reading score history, starting a new one: {}", e);
            Vec::new()
        });
        let is_new_high_score = scoring::is_new_high_score(&current, &history);

        history.push(current.clone());
        self.save_history(&history)?;
        self.try_reset_current_score()?;

        tracing::info!(
            id = %current.id,
            composite = current.composite_score,
            is_new_high_score,
            "Score finalized"
        );

        Ok(FinalizedScore {
            is_new_high_score,
            final_score: current,
        })
    }

    /// Ranked history: composite descending, most recent first on ties
    pub fn get_all_scores(&self) -> Vec<GameScore> {
        self.try_get_all_scores().unwrap_or_else(|e| {
            tracing::error!("Error getting all scores: {}", e);
            Vec::new()
        })
    }

    /// Ranked history: composite descending, most recent first on ties
    pub fn try_get_all_scores(&self) -> Result<Vec<GameScore>, ScoreError> {
        let mut scores = self.load_history()?;
        sort_ranked(&mut scores);
        Ok(scores)
    }

    /// Everything the score screen shows
    ///
    /// A `live` tally with answers takes precedence over the stored
    /// in-progress score. When the current score beats history it becomes the
    /// highest score and is spliced into `all_scores` (display only, nothing
    /// is written).
    pub fn get_score_stats(&self, live: Option<(u32, u32)>) -> ScoreStats {
        self.try_get_score_stats(live).unwrap_or_else(|e| {
            tracing::error!("Error getting score stats: {}", e);
            ScoreStats::default()
        })
    }

    /// Everything the score screen shows
    pub fn try_get_score_stats(&self, live: Option<(u32, u32)>) -> Result<ScoreStats, ScoreError> {
        let current_score = match live {
            Some((correct, total)) if total > 0 => Some(self.create_score(correct, total)),
            _ => self.try_get_current_score()?,
        };

        let mut all_scores = self.try_get_all_scores()?;
        let mut highest_score = Self::find_highest_score(&all_scores);

        let is_new_high_score = current_score
            .as_ref()
            .is_some_and(|current| scoring::is_new_high_score(current, &all_scores));

        if is_new_high_score {
            if let Some(current) = &current_score {
                highest_score = Some(current.clone());
                all_scores.push(current.clone());
                sort_ranked(&mut all_scores);
            }
        }

        Ok(ScoreStats {
            current_score,
            highest_score,
            all_scores,
            is_new_high_score,
        })
    }

    /// Remove one score from history; an unknown id is a no-op
    pub fn delete_score(&mut self, id: &str) {
        if let Err(e) = self.try_delete_score(id) {
            tracing::error!("Error deleting score: {}", e);
        }
    }

    /// Remove one score from history, returning whether it was present
    pub fn try_delete_score(&mut self, id: &str) -> Result<bool, ScoreError> {
        let mut history = self.load_history()?;
        let before = history.len();
        history.retain(|score| score.id != id);

        let removed = history.len() != before;
        if removed {
            self.save_history(&history)?;
        } else {
            tracing::debug!(id, "Score to delete not found");
        }
        Ok(removed)
    }

    /// Wipe history and the in-progress score
    pub fn clear_all_scores(&mut self) {
        if let Err(e) = self.try_clear_all_scores() {
            tracing::error!("Error clearing all scores: {}", e);
        }
    }

    /// Wipe history and the in-progress score
    pub fn try_clear_all_scores(&mut self) -> Result<(), ScoreError> {
        self.store
            .remove(&self.config.history_key)
            .map_err(store_error)?;
        self.store
            .remove(&self.config.current_score_key)
            .map_err(store_error)
    }

    /// History as stored, with legacy records back-filled
    fn load_history(&self) -> Result<Vec<GameScore>, ScoreError> {
        let Some(json) = self
            .store
            .get(&self.config.history_key)
            .map_err(store_error)?
        else {
            return Ok(Vec::new());
        };

        let stored: Vec<StoredScore> = serde_json::from_str(&json)?;
        let legacy = stored.iter().filter(|s| s.is_legacy()).count();
        if legacy > 0 {
            tracing::debug!(legacy, "Back-filled composite score on legacy records");
        }

        Ok(stored.into_iter().map(StoredScore::normalize).collect())
    }

    fn save_history(&mut self, history: &[GameScore]) -> Result<(), ScoreError> {
        let json = serde_json::to_string(history)?;
        self.store
            .set(&self.config.history_key, &json)
            .map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfacts_store::MemoryStore;

    fn manager() -> ScoreManager<MemoryStore> {
        ScoreManager::with_defaults(MemoryStore::new())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ScoreConfig {
            current_score_key: "k".to_string(),
            history_key: "k".to_string(),
        };
        assert!(matches!(
            ScoreManager::new(MemoryStore::new(), config),
            Err(ScoreError::Config(_))
        ));
    }

    #[test]
    fn test_create_score_clamps() {
        let score = manager().create_score(7, 5);
        assert_eq!(score.correct_count, 5);
        assert_eq!(score.percentage, 100);
    }

    #[test]
    fn test_save_overwrites_slot() {
        let mut scores = manager();
        scores.save_current_score(1, 1);
        scores.save_current_score(1, 2);

        let current = scores.get_current_score().unwrap();
        assert_eq!(current.total_count, 2);
        assert_eq!(current.percentage, 50);
    }

    #[test]
    fn test_corrupt_slot_reads_as_none() {
        let mut scores = manager();
        scores.store_mut().set("currentScore", "not json").unwrap();

        assert!(matches!(
            scores.try_get_current_score(),
            Err(ScoreError::Serialization(_))
        ));
        assert!(scores.get_current_score().is_none());
    }

    #[test]
    fn test_delete_reports_presence() {
        let mut scores = manager();
        scores.save_current_score(1, 1);
        let id = scores.finalize_score().final_score.id;

        assert!(scores.try_delete_score(&id).unwrap());
        assert!(!scores.try_delete_score(&id).unwrap());
    }

    #[test]
    fn test_clear_all() {
        let mut scores = manager();
        scores.save_current_score(1, 1);
        scores.finalize_score();
        scores.save_current_score(1, 2);

        scores.clear_all_scores();
        assert!(scores.get_current_score().is_none());
        assert!(scores.get_all_scores().is_empty());
        assert!(scores.store().is_empty());
    }
}
