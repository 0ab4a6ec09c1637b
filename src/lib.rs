//! Client-side accessor for a remote key-value configuration service.
//!
//! ```text
//! caller ──get(name)──▶ ConfigStore ──miss/stale──▶ Fetcher ──GET <prefix><name>──▶ service
//!                           │                          │
//!                           ◀────── Arc<ConfigEntry> ◀─┘
//!                           │
//!                   as_i64 / as_bool / as_array / pick_random / contains ...
//! ```

pub mod config;
pub mod entry;
pub mod fetch;
pub mod observability;
pub mod store;

pub use config::ClientConfig;
pub use entry::ConfigEntry;
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use store::ConfigStore;
