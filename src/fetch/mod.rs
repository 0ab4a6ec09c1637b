//! Config value retrieval.
//!
//! # Data Flow
//! ```text
//! ConfigStore miss
//!     → Fetcher::fetch(name)
//!     → http.rs: GET <prefix><name>
//!     → body as String, or FetchError
//! ```
//!
//! # Design Decisions
//! - One attempt per call; no retry or backoff here
//! - Timeouts belong to the transport (reqwest client settings)
//! - The trait is object-safe so stores can hold `Arc<dyn Fetcher>`

pub mod http;
pub mod types;

use async_trait::async_trait;

pub use http::HttpFetcher;
pub use types::{FetchError, FetchResult};

/// Source of raw config values.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve the raw value for `name`.
    async fn fetch(&self, name: &str) -> FetchResult<String>;
}
