//! Counters for fact sourcing

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time view of fact source activity
///
/// Tracks where served facts came from and how refills went.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    /// Facts served straight from the prefetch queue
    pub queue_hits: u64,

    /// `next_fact` calls that found the queue empty
    pub queue_misses: u64,

    /// Facts resolved from a live provider
    pub live_fetches: u64,

    /// False facts drawn from the static pool by the coin flip
    pub static_false_draws: u64,

    /// Facts served from the static pool after every provider gave up
    pub static_fallbacks: u64,

    /// Providers that exhausted their attempts
    pub provider_exhaustions: u64,

    /// Live facts discarded because they were false when a true one was wanted
    pub live_rejections: u64,

    /// Refills that ran to completion
    pub refills_completed: u64,

    /// Refills dropped because one was already in flight
    pub refills_skipped: u64,

    /// Facts appended to the queue by refills
    pub facts_prefetched: u64,
}

impl SourceStats {
    /// Total facts resolved, whether queued or served directly
    pub fn total_resolved(&self) -> u64 {
        self.live_fetches + self.static_false_draws + self.static_fallbacks
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        [
            "Fact Source Summary".to_string(),
            "===================".to_string(),
            format!("Queue hits: {}", self.queue_hits),
            format!("Queue misses: {}", self.queue_misses),
            format!("Live fetches: {}", self.live_fetches),
            format!("Static false draws: {}", self.static_false_draws),
            format!("Static fallbacks: {}", self.static_fallbacks),
            format!("Provider exhaustions: {}", self.provider_exhaustions),
            format!("Live rejections: {}", self.live_rejections),
            format!(
                "Refills: {} completed, {} skipped, {} facts prefetched",
                self.refills_completed, self.refills_skipped, self.facts_prefetched
            ),
        ]
        .join("\n")
    }
}

/// Shared atomic counters behind [`SourceStats`]
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    queue_hits: AtomicU64,
    queue_misses: AtomicU64,
    live_fetches: AtomicU64,
    static_false_draws: AtomicU64,
    static_fallbacks: AtomicU64,
    provider_exhaustions: AtomicU64,
    live_rejections: AtomicU64,
    refills_completed: AtomicU64,
    refills_skipped: AtomicU64,
    facts_prefetched: AtomicU64,
}

fn bump(counter: &AtomicU64, by: u64) {
    counter.fetch_add(by, Ordering::Relaxed);
}

impl StatsCounters {
    pub(crate) fn record_queue_hit(&self) {
        bump(&self.queue_hits, 1);
    }

    pub(crate) fn record_queue_miss(&self) {
        bump(&self.queue_misses, 1);
    }

    pub(crate) fn record_live_fetch(&self) {
        bump(&self.live_fetches, 1);
    }

    pub(crate) fn record_static_false_draw(&self) {
        bump(&self.static_false_draws, 1);
    }

    pub(crate) fn record_static_fallback(&self) {
        bump(&self.static_fallbacks, 1);
    }

    pub(crate) fn record_provider_exhaustion(&self) {
        bump(&self.provider_exhaustions, 1);
    }

    pub(crate) fn record_live_rejection(&self) {
        bump(&self.live_rejections, 1);
    }

    pub(crate) fn record_refill(&self, appended: usize) {
        bump(&self.refills_completed, 1);
        bump(&self.facts_prefetched, appended as u64);
    }

    pub(crate) fn record_refill_skipped(&self) {
        bump(&self.refills_skipped, 1);
    }

    pub(crate) fn snapshot(&self) -> SourceStats {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        SourceStats {
            queue_hits: load(&self.queue_hits),
            queue_misses: load(&self.queue_misses),
            live_fetches: load(&self.live_fetches),
            static_false_draws: load(&self.static_false_draws),
            static_fallbacks: load(&self.static_fallbacks),
            provider_exhaustions: load(&self.provider_exhaustions),
            live_rejections: load(&self.live_rejections),
            refills_completed: load(&self.refills_completed),
            refills_skipped: load(&self.refills_skipped),
            facts_prefetched: load(&self.facts_prefetched),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = StatsCounters::default();
        assert_eq!(counters.snapshot(), SourceStats::default());
    }

    #[test]
    fn test_record_and_snapshot() {
        let counters = StatsCounters::default();
        counters.record_queue_hit();
        counters.record_queue_hit();
        counters.record_queue_miss();
        counters.record_live_fetch();
        counters.record_static_false_draw();
        counters.record_static_fallback();
        counters.record_live_rejection();
        counters.record_refill(5);
        counters.record_refill_skipped();

        let stats = counters.snapshot();
        assert_eq!(stats.queue_hits, 2);
        assert_eq!(stats.queue_misses, 1);
        assert_eq!(stats.total_resolved(), 3);
        assert_eq!(stats.live_rejections, 1);
        assert_eq!(stats.refills_completed, 1);
        assert_eq!(stats.facts_prefetched, 5);
        assert_eq!(stats.refills_skipped, 1);
    }

    #[test]
    fn test_summary() {
        let stats = SourceStats {
            queue_hits: 4,
            refills_completed: 2,
            facts_prefetched: 10,
            ..SourceStats::default()
        };

        let summary = stats.summary();
        assert!(summary.contains("Queue hits: 4"));
        assert!(summary.contains("Refills: 2 completed, 0 skipped, 10 facts prefetched"));
    }
}
