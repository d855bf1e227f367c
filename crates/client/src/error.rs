//! Error types for the Atlas client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Atlas client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error, displayed with its full source chain.
    #[error("HTTP error: {}", error_chain(.0))]
    HttpError(#[from] reqwest::Error),

    /// API error response from Atlas.
    #[error("API error ({status}) at {url}: {message}{}", .error_code.as_ref().map(|c| format!(" [{c}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        error_code: Option<String>,
    },

    /// Invalid response format from Atlas.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client construction failed.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Check if an HTTP status code is retryable.
    ///
    /// Only 429 (Too Many Requests) is retried; Atlas signals throttling
    /// exclusively through it.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429
    }

    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status == 401 || *status == 403)
    }
}

/// Render an error followed by every `source()` below it.
///
/// reqwest leaves the transport cause out of its own `Display`. Causes
/// already contained in the text so far are skipped.
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}
