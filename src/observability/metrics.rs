//! Metrics collection.
//!
//! # Metrics
//! - `remote_config_lookups_total` (counter): store lookups by result (hit, miss)
//! - `remote_config_fetches_total` (counter): fetches by outcome (ok, or the error kind)
//! - `remote_config_fetch_duration_seconds` (histogram): fetch latency
//! - `remote_config_cached_entries` (gauge): names currently cached
//!
//! # Design Decisions
//! - Emitted through the `metrics` facade; the host process installs the
//!   recorder/exporter, and without one every call is a no-op

use metrics::{counter, gauge, histogram};
use std::time::Duration;

pub fn record_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!("remote_config_lookups_total", "result" => result).increment(1);
}

pub fn record_fetch(outcome: &'static str, elapsed: Duration) {
    counter!("remote_config_fetches_total", "outcome" => outcome).increment(1);
    histogram!("remote_config_fetch_duration_seconds").record(elapsed.as_secs_f64());
}

pub fn record_cache_size(size: usize) {
    gauge!("remote_config_cached_entries").set(size as f64);
}
