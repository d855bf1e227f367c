//! Projection of nested search index records into flat records.
//!
//! The declarative configuration engine only stores primitives, lists and
//! string maps, so nested analyzer definitions and field mappings are
//! rendered into strings here. Absent and empty stay distinct at every level:
//!
//! | source | flat |
//! |---|---|
//! | no records | `None` |
//! | record without custom analyzers | `analyzers: None` |
//! | `mappings.fields` absent | no `mappings_fields` key |
//! | `mappings.fields` = `{}` | `mappings_fields: "{}"` |

use std::collections::BTreeMap;

use atlas_client::{CustomAnalyzer, SearchIndex};
use serde::Serialize;
use serde_json::Value;

use crate::error::DataSourceError;

/// Flat projection of one custom analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatAnalyzer {
    pub name: String,
    /// Every analyzer key other than `name`. Strings are copied as-is,
    /// other scalars (including `null`) use their JSON text and nested values
    /// are compact JSON.
    pub definition: BTreeMap<String, String>,
}

/// Flat projection of one search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatIndexRecord {
    pub analyzer: String,
    pub analyzers: Option<Vec<FlatAnalyzer>>,
    pub collection_name: String,
    pub database: String,
    pub index_id: String,
    pub mappings_dynamic: bool,
    /// Field mappings as compact JSON; omitted when the source had none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mappings_fields: Option<String>,
    pub name: String,
    pub search_analyzer: String,
    pub status: String,
}

/// Flatten every record, preserving order.
///
/// Returns `None` for an empty input so "populated with nothing" can be told
/// apart from "never populated" by whoever stores the result.
///
/// # Errors
///
/// Returns `DataSourceError::Flatten` naming the first record whose analyzers
/// or mappings cannot be projected. No partial result is returned.
pub fn flatten_search_indexes(
    records: &[SearchIndex],
) -> Result<Option<Vec<FlatIndexRecord>>, DataSourceError> {
    if records.is_empty() {
        return Ok(None);
    }

    records
        .iter()
        .map(flatten_search_index)
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn flatten_search_index(record: &SearchIndex) -> Result<FlatIndexRecord, DataSourceError> {
    let analyzers = flatten_custom_analyzers(&record.analyzers)
        .map_err(|reason| DataSourceError::flatten(record, reason))?;

    let mappings_fields = match &record.mappings.fields {
        None | Some(Value::Null) => None,
        Some(fields @ Value::Object(_)) => Some(
            serde_json::to_string(fields)
                .map_err(|e| DataSourceError::flatten(record, format!("mappings fields: {e}")))?,
        ),
        Some(other) => {
            return Err(DataSourceError::flatten(
                record,
                format!("mappings fields must be an object, got {}", kind_of(other)),
            ));
        }
    };

    Ok(FlatIndexRecord {
        analyzer: record.analyzer.clone(),
        analyzers,
        collection_name: record.collection_name.clone(),
        database: record.database.clone(),
        index_id: record.index_id.clone(),
        mappings_dynamic: record.mappings.dynamic,
        mappings_fields,
        name: record.name.clone(),
        search_analyzer: record.search_analyzer.clone(),
        status: record.status.clone(),
    })
}

fn flatten_custom_analyzers(
    analyzers: &[CustomAnalyzer],
) -> Result<Option<Vec<FlatAnalyzer>>, String> {
    if analyzers.is_empty() {
        return Ok(None);
    }

    analyzers
        .iter()
        .enumerate()
        .map(|(position, analyzer)| flatten_custom_analyzer(position, analyzer))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn flatten_custom_analyzer(
    position: usize,
    analyzer: &CustomAnalyzer,
) -> Result<FlatAnalyzer, String> {
    let name = match &analyzer.name {
        Some(Value::String(name)) => name.clone(),
        None | Some(Value::Null) => return Err(format!("custom analyzer #{position} has no name")),
        Some(other) => {
            return Err(format!(
                "custom analyzer #{position} name must be a string, got {}",
                kind_of(other)
            ));
        }
    };

    let mut definition = BTreeMap::new();
    for (key, value) in &analyzer.definition {
        let rendered = render_value(value)
            .map_err(|e| format!("custom analyzer `{name}` key `{key}`: {e}"))?;
        definition.insert(key.clone(), rendered);
    }

    Ok(FlatAnalyzer { name, definition })
}

/// Render one opaque value as a primitive string.
fn render_value(value: &Value) -> Result<String, serde_json::Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null | Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
