//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (freshness > 0, timeouts > 0)
//! - Check the service prefix is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - A missing prefix is valid here; fetches report it per call

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service_prefix '{0}' is not a valid URL")]
    InvalidPrefix(String),

    #[error("service_prefix '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("freshness_secs must be greater than zero")]
    ZeroFreshness,

    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(prefix) = &config.service_prefix {
        match Url::parse(prefix) {
            Ok(url) if !matches!(url.scheme(), "http" | "https") => {
                errors.push(ValidationError::UnsupportedScheme(prefix.clone()));
            }
            Ok(_) => {}
            Err(_) => errors.push(ValidationError::InvalidPrefix(prefix.clone())),
        }
    }

    if config.freshness_secs == 0 {
        errors.push(ValidationError::ZeroFreshness);
    }

    if config.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
