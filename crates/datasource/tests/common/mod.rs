//! Common test utilities for data source integration tests.
//!
//! # What this does NOT handle
//! - HTTP mocking (use wiremock directly in tests)

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[allow(unused_imports)]
pub use atlas_search_indexes::{
    DataSourceError, ResourceData, SearchIndexLister, SearchIndexQuery, SearchIndexRecord,
    read_search_indexes,
};
#[allow(unused_imports)]
pub use serde_json::{Value, json};

/// Route `tracing` output through the test harness writer.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Lister returning a canned response and counting its calls.
#[allow(dead_code)]
pub struct StubLister {
    response: Result<Vec<SearchIndexRecord>, String>,
    calls: AtomicUsize,
    last_query: Mutex<Option<SearchIndexQuery>>,
}

#[allow(dead_code)]
impl StubLister {
    pub fn returning(records: Vec<SearchIndexRecord>) -> Self {
        Self {
            response: Ok(records),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn failing(cause: &str) -> Self {
        Self {
            response: Err(cause.to_string()),
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<SearchIndexQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

impl SearchIndexLister for StubLister {
    type Error = String;

    async fn list(&self, query: &SearchIndexQuery) -> Result<Vec<SearchIndexRecord>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.response.clone()
    }
}

/// Inputs for `sample_mflix.movies` on `Cluster0`.
#[allow(dead_code)]
pub fn movies_inputs() -> ResourceData {
    ResourceData::from_json(json!({
        "project_id": "5e2211c17a3e5a48f5497de3",
        "cluster_name": "Cluster0",
        "database": "sample_mflix",
        "collection_name": "movies"
    }))
    .unwrap()
}

/// Raw record parsed from Atlas-shaped JSON.
#[allow(dead_code)]
pub fn record(raw: Value) -> SearchIndexRecord {
    serde_json::from_value(raw).unwrap()
}
