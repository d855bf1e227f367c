//! Centralized constants for the Atlas search indexes workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Atlas administration API host.
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `ATLAS_MAX_RETRIES`.
pub const MAX_MAX_RETRIES: usize = 10;
