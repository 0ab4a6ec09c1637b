//! Short-lived cache of config entries.

use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::ClientConfig;
use crate::entry::ConfigEntry;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::observability::metrics;

/// Default freshness window for fetched values.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(60);

/// A thread-safe cache from config name to the latest fetched entry.
///
/// Cloning is cheap and every clone shares the same map and fetcher, so one
/// store built at startup can be handed to every consumer.
#[derive(Clone)]
pub struct ConfigStore {
    entries: Arc<DashMap<String, Arc<ConfigEntry>>>,
    fetcher: Arc<dyn Fetcher>,
    freshness: Duration,
}

impl ConfigStore {
    /// Create an empty store around `fetcher`.
    pub fn new(fetcher: Arc<dyn Fetcher>, freshness: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            fetcher,
            freshness,
        }
    }

    /// Create an empty store backed by an [`HttpFetcher`] built from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(Arc::new(fetcher), config.freshness()))
    }

    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Look up `name`, fetching it when no fresh entry is cached.
    ///
    /// Never fails: a fetch error comes back inside the entry and is not
    /// cached, so the next call fetches again. Concurrent misses for the same
    /// name may each fetch; the last successful one stays cached.
    pub async fn get(&self, name: &str) -> Arc<ConfigEntry> {
        if let Some(entry) = self.peek(name) {
            metrics::record_lookup(true);
            tracing::trace!(name = %name, "Config served from cache");
            return entry;
        }
        metrics::record_lookup(false);

        // No map guard is alive here; the fetch may take arbitrarily long.
        let started = Instant::now();
        let result = self.fetcher.fetch(name).await;
        let elapsed = started.elapsed();

        match result {
            Ok(value) => {
                let entry = Arc::new(ConfigEntry::loaded(value, Instant::now()));
                self.entries.insert(name.to_string(), Arc::clone(&entry));

                metrics::record_fetch("ok", elapsed);
                metrics::record_cache_size(self.entries.len());
                tracing::debug!(
                    name = %name,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Config refreshed"
                );
                entry
            }
            Err(error) => {
                metrics::record_fetch(error.kind(), elapsed);
                tracing::warn!(
                    name = %name,
                    error = %error,
                    retryable = error.is_retryable(),
                    "Config fetch failed"
                );
                Arc::new(ConfigEntry::failed(error))
            }
        }
    }

    /// The cached entry for `name` if it is still fresh. Never fetches.
    pub fn peek(&self, name: &str) -> Option<Arc<ConfigEntry>> {
        let now = Instant::now();
        self.entries
            .get(name)
            .filter(|entry| entry.is_fresh_at(now, self.freshness))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Number of cached names, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("cached", &self.entries.len())
            .field("freshness", &self.freshness)
            .finish()
    }
}
