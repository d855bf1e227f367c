//! Error types for the search indexes data source.
//!
//! Every variant is terminal for the current read: no outputs are written
//! once one of these has been returned.

use thiserror::Error;

/// Errors that can occur while reading search indexes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// Required attributes are missing or an attribute has the wrong type.
    /// Raised before any remote call.
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// The remote lister failed. The cause is kept verbatim.
    #[error("error getting search indexes information: {0}")]
    RemoteFetch(String),

    /// A record's nested structure could not be projected.
    #[error("error flattening search index {index_id} ({name}): {reason}")]
    Flatten {
        index_id: String,
        name: String,
        reason: String,
    },

    /// The computed outputs could not be written to the result container.
    #[error("error setting `{attribute}` for search indexes: {reason}")]
    OutputAssign { attribute: String, reason: String },
}

impl DataSourceError {
    pub(crate) fn flatten(
        record: &atlas_client::SearchIndex,
        reason: impl Into<String>,
    ) -> Self {
        Self::Flatten {
            index_id: record.index_id.clone(),
            name: record.name.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn output(attribute: &str, reason: impl Into<String>) -> Self {
        Self::OutputAssign {
            attribute: attribute.to_string(),
            reason: reason.into(),
        }
    }
}
