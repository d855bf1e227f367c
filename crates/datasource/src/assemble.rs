//! Packaging of flattened records into data source outputs.

use serde_json::Value;
use uuid::Uuid;

use crate::error::DataSourceError;
use crate::flatten::FlatIndexRecord;
use crate::resource_data::ResourceData;

/// Computed outputs of one search indexes read.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchIndexesResult {
    /// Process-local identifier of this read. It only signals that the read
    /// happened and carries no meaning across runs.
    pub id: String,
    /// Flattened records, or `None` when the collection has no search indexes.
    pub results: Option<Vec<FlatIndexRecord>>,
    pub total_count: usize,
}

/// Package flattened records and mint a fresh read identifier.
pub fn assemble(results: Option<Vec<FlatIndexRecord>>) -> SearchIndexesResult {
    let total_count = results.as_ref().map_or(0, Vec::len);
    SearchIndexesResult {
        id: Uuid::new_v4().to_string(),
        results,
        total_count,
    }
}

impl SearchIndexesResult {
    /// Write `results`, `total_count` and the read identifier into `data`.
    ///
    /// Either everything is written or nothing is.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::OutputAssign` when a value cannot be
    /// converted or rejected by the container.
    pub fn apply_to(&self, data: &mut ResourceData) -> Result<(), DataSourceError> {
        let results = match &self.results {
            None => Value::Null,
            Some(records) => serde_json::to_value(records)
                .map_err(|e| DataSourceError::output("results", e.to_string()))?,
        };
        let total_count = Value::from(self.total_count);

        data.commit_outputs(
            self.id.clone(),
            vec![("results", results), ("total_count", total_count)],
        )
    }
}
