//! Shared response shapes for the Atlas admin API.

use serde::Deserialize;

/// Error body returned by the Atlas admin API on non-success responses.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AtlasErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<u16>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl AtlasErrorBody {
    /// Human-readable message, preferring `detail` over `reason`.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.reason.as_deref())
    }
}
