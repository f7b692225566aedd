//! FunFacts Fact Source
//!
//! Supplies a game fact for every round with minimal latency, preferring live
//! content but never failing.
//!
//! # Overview
//!
//! A fact is resolved, in order, from:
//! - **Prefetch queue**: facts resolved ahead of time in the background
//! - **Live providers**: remote APIs tried in order, each with bounded retries
//! - **Static pool**: the bundled table, the guaranteed fallback
//!
//! Each live resolution flips a weighted coin. Heads asks the providers for a
//! (usually true) fact, tails draws a false fact from the static pool, which
//! keeps the long-run true/false mix balanced.
//!
//! ## Resolution policy
//!
//! | Situation | Action |
//! |-----------|--------|
//! | Queue non-empty | Pop the head; refill in the background if below the low-water mark |
//! | Queue empty | Resolve live now and refill in the background |
//! | Provider fails | Retry with `n * retry_base_delay_ms` between attempts, then next provider |
//! | All providers exhausted | Random static fact of either truth value |
//!
//! Only one refill runs at a time; a trigger while one is in flight is dropped.
//!
//! # Usage
//!
//! ```no_run
//! use funfacts_source::{FactSource, FactSourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = FactSource::from_config(FactSourceConfig::default())?;
//!
//!     // Warm the queue before the first round
//!     source.refill_queue_now(5).await;
//!
//!     let fact = source.next_fact().await;
//!     println!("True or false? {}", fact.text);
//!     println!("\n{}", source.stats().summary());
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [facts]
//! low_water_mark = 3
//! batch_size = 5
//! max_attempts = 3
//! retry_base_delay_ms = 500
//! recent_window = 20
//! true_fact_ratio = 0.5
//! request_timeout_secs = 10
//! trivia_difficulty = "medium"
//! remote_providers = true
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod metrics;
pub mod retry;
mod source;

pub use config::FactSourceConfig;
pub use error::SourceError;
pub use metrics::SourceStats;
pub use retry::RetryPolicy;
pub use source::{default_providers, FactSource};
