//! Fetch error definitions.

use thiserror::Error;

/// Errors that can occur while retrieving a config value.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service prefix is not set; no request was attempted.
    #[error("config service prefix is not configured (set {0})")]
    NotConfigured(&'static str),

    /// Connection, DNS or request-level failure.
    #[error("transport error fetching '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("config service returned status {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// The response body could not be read in full.
    #[error("failed to read response body from '{url}': {source}")]
    Io {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Whether calling `get` again can succeed without operator action.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchError::NotConfigured(_))
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotConfigured(_) => "not_configured",
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Io { .. } => "io",
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
