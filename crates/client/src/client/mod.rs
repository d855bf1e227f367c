//! Main Atlas admin API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search_indexes`: Atlas Search index methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])

pub mod builder;
mod search_indexes;

use secrecy::{ExposeSecret, SecretString};

use crate::client::builder::AtlasClientBuilder;
use crate::endpoints::RetryPolicy;

/// Atlas admin API client.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct AtlasClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: Option<SecretString>,
    pub(crate) retry: RetryPolicy,
}

impl AtlasClient {
    /// Create a new client builder.
    pub fn builder() -> AtlasClientBuilder {
        AtlasClientBuilder::new()
    }

    /// Base URL the client sends requests to (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retry policy applied to rate-limited requests.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub(crate) fn auth_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret())
    }
}
