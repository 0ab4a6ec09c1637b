//! Configuration schema definitions.
//!
//! All types derive Serde traits: deserialized from TOML files, serialized by
//! `config-cli check --json`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that supplies the config service prefix.
pub const SERVICE_PREFIX_ENV: &str = "CONFIG_SERVICE_PREFIX";

/// Root configuration for the config client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL prefix of the config service (e.g., "http://config.local/v1/").
    /// The key name is appended verbatim.
    pub service_prefix: Option<String>,

    /// How long a successfully fetched value is served from cache.
    pub freshness_secs: u64,

    /// Optional transport-level request timeout.
    pub request_timeout_secs: Option<u64>,

    /// Treat non-2xx responses as fetch failures.
    /// When false the body is used as-is regardless of status.
    pub strict_status: bool,

    /// User-Agent sent with every fetch.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_prefix: None,
            freshness_secs: 60,
            request_timeout_secs: None,
            strict_status: true,
            user_agent: concat!("remote-config/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Overlay values from the process environment.
    ///
    /// An empty `CONFIG_SERVICE_PREFIX` counts as unset.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    pub(crate) fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup(SERVICE_PREFIX_ENV).filter(|p| !p.is_empty()) {
            self.service_prefix = Some(prefix);
        }
    }
}
