//! Remote index lister seam.
//!
//! The read pipeline only depends on [`SearchIndexLister`]. Transport,
//! authentication, retry/backoff and cancellation all belong to the
//! implementation; the pipeline calls `list` exactly once per read and never
//! retries.

use std::fmt::Display;
use std::future::Future;

use atlas_client::{AtlasClient, ClientError, ListSearchIndexesParams, SearchIndex};

use crate::query::SearchIndexQuery;

/// Source of raw search index records for one collection.
pub trait SearchIndexLister {
    /// Error reported by the lister; its `Display` text is surfaced verbatim.
    type Error: Display;

    /// Fetch the search indexes matching `query`, in the order the remote
    /// API returned them.
    fn list(
        &self,
        query: &SearchIndexQuery,
    ) -> impl Future<Output = Result<Vec<SearchIndex>, Self::Error>> + Send;
}

impl SearchIndexLister for AtlasClient {
    type Error = ClientError;

    async fn list(&self, query: &SearchIndexQuery) -> Result<Vec<SearchIndex>, ClientError> {
        self.list_search_indexes(&ListSearchIndexesParams::from(query))
            .await
    }
}
