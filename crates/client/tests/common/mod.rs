//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use atlas_client::testing::load_fixture;

#[allow(unused_imports)]
pub use atlas_client::{AtlasClient, ClientError, ListSearchIndexesParams};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PROJECT_ID: &str = "5e2211c17a3e5a48f5497de3";

/// Parameters for the `sample_mflix.movies` collection on `Cluster0`.
#[allow(dead_code)]
pub fn movies_params() -> ListSearchIndexesParams {
    ListSearchIndexesParams {
        project_id: PROJECT_ID.to_string(),
        cluster_name: "Cluster0".to_string(),
        database: "sample_mflix".to_string(),
        collection_name: "movies".to_string(),
        page_num: 0,
        items_per_page: 0,
    }
}

/// Client pointed at the mock server with millisecond retry backoff.
#[allow(dead_code)]
pub fn test_client(server: &MockServer, max_retries: usize) -> AtlasClient {
    AtlasClient::builder()
        .base_url(server.uri())
        .api_token("test-token".to_string())
        .max_retries(max_retries)
        .retry_base_delay(Duration::from_millis(5))
        .build()
        .expect("client should build")
}

#[allow(dead_code)]
pub const MOVIES_PATH: &str =
    "/api/atlas/v1.0/groups/5e2211c17a3e5a48f5497de3/clusters/Cluster0/fts/indexes/sample_mflix/movies";
