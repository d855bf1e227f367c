//! Lookup parameters for one search index read.

use atlas_client::ListSearchIndexesParams;

use crate::error::DataSourceError;
use crate::resource_data::ResourceData;

/// Validated parameters for listing the search indexes of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndexQuery {
    pub project_id: String,
    pub cluster_name: String,
    pub database: String,
    pub collection_name: String,
    /// `0` means the lister's default page.
    pub page_num: u32,
    /// `0` means the lister's default page size.
    pub items_per_page: u32,
}

/// Build the query from configured attributes.
///
/// All four identifying attributes must be set to non-empty strings. Every
/// problem is reported at once: missing attributes are named together first,
/// followed by each mistyped or out-of-range value.
///
/// # Errors
///
/// Returns `DataSourceError::Validation` for missing identifying attributes,
/// mistyped values, or pagination values outside `0..=u32::MAX`.
pub fn build_query(data: &ResourceData) -> Result<SearchIndexQuery, DataSourceError> {
    let mut problems = Problems::default();
    let project_id = required(data, "project_id", &mut problems);
    let cluster_name = required(data, "cluster_name", &mut problems);
    let database = required(data, "database", &mut problems);
    let collection_name = required(data, "collection_name", &mut problems);
    let page_num = pagination(data, "page_num", &mut problems);
    let items_per_page = pagination(data, "items_per_page", &mut problems);

    problems.into_result()?;

    Ok(SearchIndexQuery {
        project_id,
        cluster_name,
        database,
        collection_name,
        page_num,
        items_per_page,
    })
}

/// Validation problems gathered across all attributes.
#[derive(Default)]
struct Problems {
    missing: Vec<&'static str>,
    invalid: Vec<String>,
}

impl Problems {
    fn invalid(&mut self, err: DataSourceError) {
        self.invalid.push(match err {
            DataSourceError::Validation(message) => message,
            other => other.to_string(),
        });
    }

    fn into_result(self) -> Result<(), DataSourceError> {
        let mut messages = Vec::with_capacity(self.invalid.len() + 1);
        if !self.missing.is_empty() {
            messages.push(format!("{} must be configured", self.missing.join(", ")));
        }
        messages.extend(self.invalid);

        if messages.is_empty() {
            Ok(())
        } else {
            Err(DataSourceError::Validation(messages.join("; ")))
        }
    }
}

/// Read a required string; unset and empty both count as missing.
fn required(data: &ResourceData, attribute: &'static str, problems: &mut Problems) -> String {
    match data.get_string(attribute) {
        Ok(Some(value)) if !value.is_empty() => value.to_string(),
        Ok(_) => {
            problems.missing.push(attribute);
            String::new()
        }
        Err(err) => {
            problems.invalid(err);
            String::new()
        }
    }
}

fn pagination(data: &ResourceData, attribute: &str, problems: &mut Problems) -> u32 {
    let value = match data.get_int(attribute) {
        Ok(None) => return 0,
        Ok(Some(value)) => value,
        Err(err) => {
            problems.invalid(err);
            return 0;
        }
    };

    u32::try_from(value).unwrap_or_else(|_| {
        problems.invalid.push(format!(
            "attribute `{}` must be between 0 and {}, got {}",
            attribute,
            u32::MAX,
            value
        ));
        0
    })
}

impl From<&SearchIndexQuery> for ListSearchIndexesParams {
    fn from(query: &SearchIndexQuery) -> Self {
        Self {
            project_id: query.project_id.clone(),
            cluster_name: query.cluster_name.clone(),
            database: query.database.clone(),
            collection_name: query.collection_name.clone(),
            page_num: query.page_num,
            items_per_page: query.items_per_page,
        }
    }
}
