//! Config lookup with a short-lived cache.
//!
//! # Data Flow
//! ```text
//! caller → ConfigStore::get(name)
//!     → fresh entry cached? return it (same Arc)
//!     → otherwise Fetcher::fetch(name)
//!         Ok(value)  → new ConfigEntry, replaces cached one, returned
//!         Err(error) → failed ConfigEntry, returned but never cached
//! ```
//!
//! # Design Decisions
//! - DashMap shards the locking; guards are never held across a fetch
//! - No single-flight: concurrent misses may fetch twice, last write wins
//! - The store is an explicit value, not a global

pub mod cache;

pub use cache::{ConfigStore, DEFAULT_FRESHNESS};
