//! MongoDB Atlas administration API client.
//!
//! This crate provides a type-safe client for the subset of the Atlas admin
//! API v1.0 used to read Atlas Search index definitions. Requests are
//! authenticated with a service account bearer token.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::AtlasClient;
pub use client::builder::AtlasClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AtlasErrorBody, CustomAnalyzer, IndexMapping, ListSearchIndexesParams, SearchIndex,
};
