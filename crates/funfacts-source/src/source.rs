//! The fact source orchestrator

use crate::metrics::StatsCounters;
use crate::retry::fetch_with_retry;
use crate::{FactSourceConfig, SourceError, SourceStats};
use funfacts_domain::GameFact;
use funfacts_providers::{
    FactProvider, OpenTriviaProvider, StaticFactProvider, UselessFactsProvider, STATIC_FACTS,
};
use futures::future::join_all;
use rand::Rng;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Produces game facts with low latency and never fails
///
/// Cheap to clone; clones share the queue, providers and counters.
///
/// # Examples
///
/// ```
/// use funfacts_source::{FactSource, FactSourceConfig};
///
/// # async fn example() -> Result<(), funfacts_source::SourceError> {
/// let source = FactSource::from_config(FactSourceConfig::offline())?;
/// let fact = source.next_fact().await;
/// assert!(!fact.text.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FactSource {
    inner: Arc<Inner>,
}

struct Inner {
    config: FactSourceConfig,
    providers: Vec<Arc<dyn FactProvider>>,
    static_pool: StaticFactProvider,
    queue: Mutex<VecDeque<GameFact>>,
    refill_in_flight: AtomicBool,
    stats: StatsCounters,
}

/// Holds the single-flight refill flag; clears it on drop
struct RefillGuard<'a>(&'a AtomicBool);

impl<'a> RefillGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RefillGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Remote providers in fallback order, built from configuration
pub fn default_providers(config: &FactSourceConfig) -> Vec<Arc<dyn FactProvider>> {
    if !config.remote_providers {
        return Vec::new();
    }

    let timeout = config.request_timeout();
    let opentdb: Arc<dyn FactProvider> = Arc::new(OpenTriviaProvider::new(
        funfacts_providers::opentdb::DEFAULT_ENDPOINT,
        config.trivia_difficulty,
        timeout,
    ));
    let uselessfacts: Arc<dyn FactProvider> = Arc::new(UselessFactsProvider::new(
        funfacts_providers::uselessfacts::DEFAULT_BASE_URL,
        timeout,
    ));
    vec![uselessfacts, opentdb]
}

impl FactSource {
    /// Create a source over the given providers, tried in order
    pub fn new(
        config: FactSourceConfig,
        providers: Vec<Arc<dyn FactProvider>>,
    ) -> Result<Self, SourceError> {
        let static_pool = StaticFactProvider::new(config.recent_window);
        Self::with_static_pool(config, providers, static_pool)
    }

    /// Create a source with the remote providers named by the configuration
    pub fn from_config(config: FactSourceConfig) -> Result<Self, SourceError> {
        let providers = default_providers(&config);
        Self::new(config, providers)
    }

    /// Create a source with a custom static pool
    pub fn with_static_pool(
        config: FactSourceConfig,
        providers: Vec<Arc<dyn FactProvider>>,
        static_pool: StaticFactProvider,
    ) -> Result<Self, SourceError> {
        config.validate().map_err(SourceError::Config)?;

        tracing::debug!(
            providers = providers.len(),
            static_facts = static_pool.len(),
            "Fact source created"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                providers,
                static_pool,
                queue: Mutex::new(VecDeque::new()),
                refill_in_flight: AtomicBool::new(false),
                stats: StatsCounters::default(),
            }),
        })
    }

    /// Configuration in effect
    pub fn config(&self) -> &FactSourceConfig {
        &self.inner.config
    }

    /// Next fact to show
    ///
    /// Pops the prefetch queue when it has something, topping it up in the
    /// background once it runs low. Otherwise resolves a fact directly.
    pub async fn next_fact(&self) -> GameFact {
        let batch_size = self.inner.config.batch_size;

        let (popped, remaining) = {
            let mut queue = self.inner.queue();
            let popped = queue.pop_front();
            (popped, queue.len())
        };

        match popped {
            Some(fact) => {
                self.inner.stats.record_queue_hit();
                if remaining < self.inner.config.low_water_mark {
                    tracing::debug!(remaining, "Queue below low-water mark");
                    self.refill_queue(batch_size);
                }
                fact
            }
            None => {
                self.inner.stats.record_queue_miss();
                self.refill_queue(batch_size);
                self.inner.resolve_live().await
            }
        }
    }

    /// Top up the queue in the background
    ///
    /// A no-op while another refill is running, or when called outside a
    /// tokio runtime.
    pub fn refill_queue(&self, batch_size: usize) {
        if self.inner.refill_in_flight.load(Ordering::Acquire) {
            self.inner.stats.record_refill_skipped();
            return;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("No tokio runtime, refill skipped");
                return;
            }
        };

        let source = self.clone();
        handle.spawn(async move {
            source.refill_queue_now(batch_size).await;
        });
    }

    /// Resolve `batch_size` facts concurrently and append them to the queue
    ///
    /// Returns the number appended, 0 if another refill was already running.
    pub async fn refill_queue_now(&self, batch_size: usize) -> usize {
        let Some(_guard) = RefillGuard::acquire(&self.inner.refill_in_flight) else {
            tracing::debug!("Refill already in flight");
            self.inner.stats.record_refill_skipped();
            return 0;
        };

        let resolutions = (0..batch_size).map(|_| self.inner.resolve_live());
        let facts = join_all(resolutions).await;
        let appended = facts.len();

        self.inner.queue().extend(facts);
        self.inner.stats.record_refill(appended);
        tracing::debug!(appended, "Refill complete");

        appended
    }

    /// Facts currently queued
    pub fn queue_len(&self) -> usize {
        self.inner.queue().len()
    }

    /// Whether a refill is running
    pub fn is_refilling(&self) -> bool {
        self.inner.refill_in_flight.load(Ordering::Acquire)
    }

    /// Activity counters
    pub fn stats(&self) -> SourceStats {
        self.inner.stats.snapshot()
    }

    /// The static pool backing fallbacks
    pub fn static_pool(&self) -> &StaticFactProvider {
        &self.inner.static_pool
    }
}

impl Inner {
    fn queue(&self) -> MutexGuard<'_, VecDeque<GameFact>> {
        self.queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Coin flip between a live true fact and a static false fact
    ///
    /// Boolean trivia providers answer false about half the time; those facts
    /// carry no explanation and would skew the ratio, so the true side only
    /// accepts true facts. A fallback draws from the static pool with the
    /// truth value the coin asked for.
    async fn resolve_live(&self) -> GameFact {
        let want_true = rand::thread_rng().gen_bool(self.config.true_fact_ratio);

        if want_true {
            let policy = self.config.retry_policy();
            for provider in &self.providers {
                match fetch_with_retry(provider.as_ref(), &policy).await {
                    Ok(fact) if fact.truth_value => {
                        self.stats.record_live_fetch();
                        return fact;
                    }
                    Ok(_) => {
                        self.stats.record_live_rejection();
                        tracing::debug!(provider = provider.name(), "Discarded false live fact");
                    }
                    Err(e) => {
                        self.stats.record_provider_exhaustion();
                        tracing::warn!("{}", e);
                    }
                }
            }
        } else if let Some(fact) = self.static_pool.draw_false() {
            self.stats.record_static_false_draw();
            return fact;
        }

        self.stats.record_static_fallback();
        self.static_pool
            .draw(Some(want_true))
            .or_else(|| self.static_pool.draw_any())
            .unwrap_or_else(|| STATIC_FACTS[0].to_game_fact())
    }
}

impl std::fmt::Debug for FactSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactSource")
            .field("config", &self.inner.config)
            .field("providers", &self.inner.providers.len())
            .field("queue_len", &self.queue_len())
            .finish()
    }
}
