//! FunFacts Score Manager
//!
//! Computes, persists and ranks game scores over any [`KeyValueStore`].
//!
//! # Overview
//!
//! - **Current score**: one slot, overwritten after every answer
//! - **History**: finalized scores, appended on finalize, removable by id
//! - **Ranking**: composite score descending, most recent first on ties
//!
//! The composite score is `correct + round(correct / total * 100) * total / 100`.
//! The percentage is rounded before it is multiplied back, so results drift
//! slightly from `2 * correct` at non-round percentages (2 of 3 gives 4.01).
//!
//! ## Session lifecycle
//!
//! | State | Entered by | Storage effect |
//! |-------|------------|----------------|
//! | Reset | `reset_current_score` at session start | Slot cleared |
//! | In progress | `save_current_score` after each answer | Slot overwritten |
//! | Finalized | `finalize_score` at session end | Slot appended to history, then cleared |
//!
//! # Failure semantics
//!
//! Storage and decoding failures never reach the caller of the plain
//! operations: they are logged and a safe default (nothing, an empty list, a
//! zero score) comes back. Use the `try_*` variants to observe the error.
//!
//! # Usage
//!
//! ```no_run
//! use funfacts_scores::ScoreManager;
//! use funfacts_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::new("funfacts.db")?;
//! let mut scores = ScoreManager::with_defaults(store);
//!
//! scores.reset_current_score();
//! scores.save_current_score(4, 5);
//!
//! let stats = scores.get_score_stats(None);
//! println!("Best so far: {:?}", stats.highest_score);
//!
//! let result = scores.finalize_score();
//! if result.is_new_high_score {
//!     println!("New high score: {}", result.final_score.composite_score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [scores]
//! current_score_key = "currentScore"
//! history_key = "scoreHistory"
//! ```
//!
//! [`KeyValueStore`]: funfacts_domain::KeyValueStore

#![warn(missing_docs)]

mod config;
mod error;
mod manager;

pub use config::ScoreConfig;
pub use error::ScoreError;
pub use manager::ScoreManager;
