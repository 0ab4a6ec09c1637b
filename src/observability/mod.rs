//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ConfigStore / HttpFetcher produce:
//!     → tracing events (name, outcome, elapsed_ms)
//!     → metrics.rs (lookup and fetch counters, latency, cache size)
//!
//! Consumers:
//!     → whatever subscriber/recorder the host process installs
//!     → logging.rs for the bundled CLI
//! ```

pub mod logging;
pub mod metrics;
