//! Client builder for constructing [`AtlasClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - Without an explicit base URL the public Atlas host is used

use std::time::Duration;

use atlas_config::Config;
use atlas_config::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;

use crate::client::AtlasClient;
use crate::endpoints::RetryPolicy;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`AtlasClient`].
///
/// # Example
///
/// ```rust,ignore
/// use atlas_client::AtlasClient;
///
/// let client = AtlasClient::builder()
///     .base_url("https://cloud.mongodb.com".to_string())
///     .api_token("my-token".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct AtlasClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    timeout: Duration,
    max_retries: usize,
    retry_base_delay: Duration,
}

impl Default for AtlasClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_secs(1),
        }
    }
}

impl AtlasClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the admin API host.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the service account token sent as a bearer token.
    pub fn api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    ///
    /// Default is 3 retries with exponential backoff.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the delay before the first retry. Default is 1 second.
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Create a client builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_token = Some(config.auth.api_token.clone());
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` for a blank base URL and
    /// `ClientError::InvalidConfig` when the HTTP client cannot be built.
    pub fn build(self) -> Result<AtlasClient> {
        let base_url = Self::normalize_base_url(
            self.base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        if base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("base URL is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        tracing::debug!(base_url = %base_url, timeout_secs = self.timeout.as_secs(), "Built Atlas client");

        Ok(AtlasClient {
            http,
            base_url,
            api_token: self.api_token,
            retry: RetryPolicy {
                max_retries: self.max_retries,
                base_delay: self.retry_base_delay,
            },
        })
    }
}
