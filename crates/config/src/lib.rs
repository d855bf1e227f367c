//! Configuration management for the Atlas search indexes data source.
//!
//! This crate provides types and loaders for managing Atlas admin API
//! connection configuration from environment variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
