//! Atlas Search index endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::encode_path_segment;
use crate::endpoints::{RetryPolicy, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::{ListSearchIndexesParams, SearchIndex, search_indexes_from_json};

/// Build the API path listing the search indexes of one collection.
///
/// Every segment is percent-encoded.
pub fn search_indexes_path(params: &ListSearchIndexesParams) -> String {
    format!(
        "/api/atlas/v1.0/groups/{}/clusters/{}/fts/indexes/{}/{}",
        encode_path_segment(&params.project_id),
        encode_path_segment(&params.cluster_name),
        encode_path_segment(&params.database),
        encode_path_segment(&params.collection_name),
    )
}

/// List the search indexes defined on a collection.
///
/// `pageNum` and `itemsPerPage` are only sent when non-zero so the server
/// applies its own paging defaults otherwise. Records are returned in the
/// order the API produced them.
pub async fn list_search_indexes(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    params: &ListSearchIndexesParams,
    retry: RetryPolicy,
) -> Result<Vec<SearchIndex>> {
    let path = search_indexes_path(params);
    let url = format!("{}{}", base_url, path);

    let mut query_params: Vec<(&str, String)> = Vec::new();
    if params.page_num > 0 {
        query_params.push(("pageNum", params.page_num.to_string()));
    }
    if params.items_per_page > 0 {
        query_params.push(("itemsPerPage", params.items_per_page.to_string()));
    }

    debug!(
        path = %path,
        page_num = params.page_num,
        items_per_page = params.items_per_page,
        "Listing search indexes"
    );

    let mut builder = client
        .get(&url)
        .header("Accept", "application/json")
        .query(&query_params);
    if let Some(token) = auth_token {
        builder = builder.bearer_auth(token);
    }

    let response = send_request_with_retry(builder, retry).await?;
    let text = response.text().await?;

    let body: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse search index list: {}", e))
    })?;
    let indexes = search_indexes_from_json(body).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse search index list: {}", e))
    })?;

    debug!(count = indexes.len(), "Received search indexes");
    Ok(indexes)
}
