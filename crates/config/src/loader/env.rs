//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Only fields the builder has not already set are filled in.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("ATLAS_BASE_URL") {
        loader.set_base_url_if_unset(url);
    }
    if let Some(token) = env_var_or_none("ATLAS_API_TOKEN") {
        loader.set_api_token_if_unset(SecretString::new(token.into()));
    }
    if let Some(timeout) = env_var_or_none("ATLAS_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "ATLAS_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout_if_unset(Duration::from_secs(secs));
    }
    if let Some(retries) = env_var_or_none("ATLAS_MAX_RETRIES") {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: "ATLAS_MAX_RETRIES".to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries_if_unset(value);
    }
    Ok(())
}
