//! HTTP fetcher backed by reqwest.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{ClientConfig, SERVICE_PREFIX_ENV};
use crate::fetch::{FetchError, FetchResult, Fetcher};

/// Fetches `<prefix><name>` with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    prefix: Option<String>,
    strict_status: bool,
}

impl HttpFetcher {
    /// Build a fetcher with its own reqwest client.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(
            builder.build()?,
            config.service_prefix.clone(),
            config.strict_status,
        ))
    }

    /// Build a fetcher around an existing client (shares its connection pool).
    pub fn with_client(client: Client, prefix: Option<String>, strict_status: bool) -> Self {
        Self {
            client,
            prefix: prefix.filter(|p| !p.is_empty()),
            strict_status,
        }
    }

    /// The URL that would be requested for `name`, if a prefix is set.
    pub fn url_for(&self, name: &str) -> Option<String> {
        self.prefix.as_ref().map(|prefix| format!("{}{}", prefix, name))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, name: &str) -> FetchResult<String> {
        let url = self
            .url_for(name)
            .ok_or(FetchError::NotConfigured(SERVICE_PREFIX_ENV))?;

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            if self.strict_status {
                return Err(FetchError::Status {
                    url,
                    status: status.as_u16(),
                });
            }
            tracing::debug!(url = %url, status = %status, "Using body of non-success response");
        }

        // Raw bytes: the Content-Type charset must not re-encode the value.
        match response.bytes().await {
            Ok(body) => Ok(String::from_utf8_lossy(&body).into_owned()),
            Err(source) => Err(FetchError::Io { url, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_plain_concatenation() {
        let fetcher = HttpFetcher::with_client(Client::new(), Some("http://cfg/v1?key=".into()), true);
        assert_eq!(fetcher.url_for("colors").as_deref(), Some("http://cfg/v1?key=colors"));
    }

    #[tokio::test]
    async fn test_missing_prefix_is_not_configured() {
        let fetcher = HttpFetcher::new(&ClientConfig::default()).unwrap();
        let err = fetcher.fetch("colors").await.unwrap_err();
        assert!(matches!(err, FetchError::NotConfigured(SERVICE_PREFIX_ENV)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_empty_prefix_counts_as_unset() {
        let fetcher = HttpFetcher::with_client(Client::new(), Some(String::new()), true);
        assert!(fetcher.url_for("k").is_none());
        assert!(matches!(fetcher.fetch("k").await, Err(FetchError::NotConfigured(_))));
    }
}
