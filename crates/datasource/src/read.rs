//! The search indexes read pipeline.

use tracing::{debug, info};

use crate::assemble::assemble;
use crate::error::DataSourceError;
use crate::flatten::flatten_search_indexes;
use crate::lister::SearchIndexLister;
use crate::query::build_query;
use crate::resource_data::ResourceData;

/// Read the search indexes configured in `data` through `lister` and
/// commit `results`, `total_count` and a read identifier back into `data`.
///
/// Validation happens before the lister is called. On any error `data` is
/// left untouched.
///
/// # Errors
///
/// - `DataSourceError::Validation` for missing or mistyped inputs
/// - `DataSourceError::RemoteFetch` when the lister fails
/// - `DataSourceError::Flatten` when a record cannot be projected
/// - `DataSourceError::OutputAssign` when outputs cannot be written
pub async fn read_search_indexes<L>(
    lister: &L,
    data: &mut ResourceData,
) -> Result<(), DataSourceError>
where
    L: SearchIndexLister,
{
    let query = build_query(data)?;
    debug!(
        project_id = %query.project_id,
        cluster_name = %query.cluster_name,
        database = %query.database,
        collection_name = %query.collection_name,
        page_num = query.page_num,
        items_per_page = query.items_per_page,
        "Reading search indexes"
    );

    let records = lister
        .list(&query)
        .await
        .map_err(|e| DataSourceError::RemoteFetch(e.to_string()))?;

    let flattened = flatten_search_indexes(&records)?;
    let result = assemble(flattened);
    result.apply_to(data)?;

    info!(
        cluster_name = %query.cluster_name,
        collection_name = %query.collection_name,
        total_count = result.total_count,
        "Read search indexes"
    );
    Ok(())
}
