//! Offline fact pool
//!
//! Serves the compiled-in [`STATIC_FACTS`] table. Draws avoid ids served in
//! the last `recent_window` draws; when that exclusion leaves nothing to pick
//! from, the history is cleared and the whole candidate set is eligible again.

use crate::static_data::STATIC_FACTS;
use crate::{lock, FactProvider, ProviderError};
use async_trait::async_trait;
use funfacts_domain::{GameFact, StaticFact};
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, VecDeque};
use std::sync::Mutex;

/// Default number of recently served ids excluded from a draw
pub const DEFAULT_RECENT_WINDOW: usize = 20;

/// Sliding window of recently served ids
#[derive(Debug)]
struct RecentTracker {
    window: usize,
    ids: VecDeque<&'static str>,
}

impl RecentTracker {
    fn new(window: usize) -> Self {
        Self {
            window,
            ids: VecDeque::with_capacity(window),
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|recent| *recent == id)
    }

    fn record(&mut self, id: &'static str) {
        if self.window == 0 {
            return;
        }
        if self.ids.len() >= self.window {
            self.ids.pop_front();
        }
        self.ids.push_back(id);
    }

    fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Provider over the bundled static table
#[derive(Debug)]
pub struct StaticFactProvider {
    facts: &'static [StaticFact],
    recent: Mutex<RecentTracker>,
}

impl StaticFactProvider {
    /// Create a pool over the bundled table
    pub fn new(recent_window: usize) -> Self {
        Self::with_facts(STATIC_FACTS, recent_window)
    }

    /// Create a pool over a custom table
    pub fn with_facts(facts: &'static [StaticFact], recent_window: usize) -> Self {
        Self {
            facts,
            recent: Mutex::new(RecentTracker::new(recent_window)),
        }
    }

    /// Draw a fact, optionally restricted to one truth value
    ///
    /// Returns `None` only when the table holds no fact of the requested
    /// truth value.
    pub fn draw(&self, truth: Option<bool>) -> Option<GameFact> {
        let candidates: Vec<&StaticFact> = self
            .facts
            .iter()
            .filter(|fact| truth.map_or(true, |t| fact.is_true == t))
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let mut recent = lock(&self.recent);
        let mut eligible: Vec<&StaticFact> = candidates
            .iter()
            .copied()
            .filter(|fact| !recent.contains(fact.id))
            .collect();

        if eligible.is_empty() {
            tracing::debug!("Recent-id window exhausted the pool, resetting");
            recent.clear();
            eligible = candidates;
        }

        let picked = eligible.choose(&mut rand::thread_rng())?;
        recent.record(picked.id);
        Some(picked.to_game_fact())
    }

    /// Draw a false fact
    pub fn draw_false(&self) -> Option<GameFact> {
        self.draw(Some(false))
    }

    /// Draw a fact of either truth value
    pub fn draw_any(&self) -> Option<GameFact> {
        self.draw(None)
    }

    /// Up to `count` distinct false facts in random order
    ///
    /// Does not touch the recent-id window.
    pub fn random_false_facts(&self, count: usize) -> Vec<GameFact> {
        let falses: Vec<&StaticFact> = self.facts.iter().filter(|f| !f.is_true).collect();
        falses
            .choose_multiple(&mut rand::thread_rng(), count)
            .map(|fact| fact.to_game_fact())
            .collect()
    }

    /// All facts in a category, compared case-insensitively
    pub fn by_category(&self, category: &str) -> Vec<GameFact> {
        self.facts
            .iter()
            .filter(|fact| fact.category.eq_ignore_ascii_case(category))
            .map(|fact| fact.to_game_fact())
            .collect()
    }

    /// Distinct category names, sorted
    pub fn categories(&self) -> Vec<&'static str> {
        self.facts
            .iter()
            .map(|fact| fact.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of facts in the table
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Default for StaticFactProvider {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_WINDOW)
    }
}

#[async_trait]
impl FactProvider for StaticFactProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<GameFact, ProviderError> {
        self.draw_any().ok_or(ProviderError::Empty)
    }
}
