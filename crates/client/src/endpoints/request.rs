//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with HTTP 429 (Too Many Requests) are retried with
//! exponential backoff. Every other failure is returned immediately.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::AtlasErrorBody;

/// Retry settings for rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt. `0` disables retrying.
    pub max_retries: usize,
    /// Delay before the first retry; doubled on every further attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: atlas_config::constants::DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, attempt: usize) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt.min(16) as u32))
    }
}

/// Sends an HTTP request, retrying HTTP 429 responses.
///
/// # Errors
///
/// - `ClientError::MaxRetriesExceeded` when every attempt was rate limited.
/// - `ClientError::ApiError` for any other non-success status.
/// - `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    policy: RetryPolicy,
) -> Result<Response> {
    for attempt in 0..=policy.max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Request builder cannot be cloned, single attempt only");
                return check_status(builder.send().await?).await;
            }
        };

        let response = attempt_builder.send().await?;

        if !ClientError::is_retryable_status(response.status().as_u16()) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request completed after retry");
            }
            return check_status(response).await;
        }

        if attempt < policy.max_retries {
            let backoff = policy.backoff(attempt);
            debug!(
                attempt = attempt + 1,
                max_attempts = policy.max_retries + 1,
                backoff_ms = backoff.as_millis() as u64,
                "Rate limited (HTTP 429), retrying with exponential backoff"
            );
            tokio::time::sleep(backoff).await;
        }
    }

    debug!(
        attempts = policy.max_retries + 1,
        "Max retries exhausted for rate-limited request"
    );
    Err(ClientError::MaxRetriesExceeded(policy.max_retries + 1))
}

/// Turn a non-success response into `ClientError::ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (message, error_code) = match serde_json::from_str::<AtlasErrorBody>(&body) {
        Ok(parsed) => (
            parsed
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| body.clone()),
            parsed.error_code,
        ),
        Err(_) => (body, None),
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
        error_code,
    })
}
