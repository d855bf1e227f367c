//! Atlas Search index API methods for [`AtlasClient`].

use crate::client::AtlasClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ListSearchIndexesParams, SearchIndex};

impl AtlasClient {
    /// List the search indexes of one collection, in API order.
    pub async fn list_search_indexes(
        &self,
        params: &ListSearchIndexesParams,
    ) -> Result<Vec<SearchIndex>> {
        endpoints::list_search_indexes(
            &self.http,
            &self.base_url,
            self.auth_token(),
            params,
            self.retry,
        )
        .await
    }
}
