//! FunFacts Domain Layer
//!
//! This crate contains the core game model for FunFacts. It defines the
//! value types, the score arithmetic and the storage trait that all other
//! crates depend upon, and does no I/O of its own.
//!
//! ## Key Concepts
//!
//! - **GameFact**: A statement the player judges true or false
//! - **StaticFact**: An entry in the compiled-in fallback table
//! - **GameScore**: A session result with a composite score for ranking
//! - **GameSession**: Per-session state (`Reset -> InProgress -> Finalized`)
//!
//! ## Architecture
//!
//! - Pure game logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fact;
pub mod score;
pub mod scoring;
pub mod session;
pub mod traits;

// Re-exports for convenience
pub use fact::{AlreadyAnswered, FactId, GameFact, StaticFact};
pub use score::{FinalizedScore, GameScore, ScoreStats, StoredScore};
pub use session::{GameSession, SessionError, SessionState};
pub use traits::KeyValueStore;
