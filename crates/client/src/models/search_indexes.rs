//! Atlas Search index models.
//!
//! These types mirror the JSON returned by
//! `GET /groups/{groupId}/clusters/{clusterName}/fts/indexes/{db}/{collection}`.
//! Custom analyzers and field mappings are kept as opaque JSON because their
//! shape is open-ended.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for listing the search indexes of one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSearchIndexesParams {
    pub project_id: String,
    pub cluster_name: String,
    pub database: String,
    pub collection_name: String,
    /// Page to return; `0` leaves the server default in place.
    pub page_num: u32,
    /// Page size; `0` leaves the server default in place.
    pub items_per_page: u32,
}

/// A user-defined text analysis pipeline attached to a search index.
///
/// Only `name` is interpreted; every other key (`charFilters`, `tokenizer`,
/// `tokenFilters`, ...) is preserved verbatim in `definition`. `name` is
/// kept as raw JSON so a malformed analyzer does not reject the whole list.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CustomAnalyzer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(flatten)]
    pub definition: Map<String, Value>,
}

impl CustomAnalyzer {
    /// The analyzer name, when it is a string.
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }
}

/// Field mapping settings of a search index.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct IndexMapping {
    #[serde(default)]
    pub dynamic: bool,
    /// Explicit field mappings. `None` when the key is absent or null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

/// Atlas Search index definition.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    #[serde(rename = "indexID", default)]
    pub index_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub analyzer: String,
    #[serde(default)]
    pub search_analyzer: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub analyzers: Vec<CustomAnalyzer>,
    #[serde(default, deserialize_with = "null_as_default_mapping")]
    pub mappings: IndexMapping,
}

/// Decode a search index list response.
///
/// The v1.0 endpoint returns a bare array; paginated gateways wrap it in
/// `{"results": [...], "totalCount": n}`. Both are accepted. Records are
/// decoded one by one so the error names the offending position.
///
/// # Errors
///
/// Returns a description of the first record that does not decode, or of
/// the unexpected body shape.
pub fn search_indexes_from_json(body: Value) -> Result<Vec<SearchIndex>, String> {
    let records = match body {
        Value::Array(records) => records,
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(records)) => records,
            Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(format!("`results` must be a list, got {}", kind_of(&other)));
            }
            None => return Err("object response has no `results` list".to_string()),
        },
        other => {
            return Err(format!(
                "expected a list of search indexes, got {}",
                kind_of(&other)
            ));
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            serde_json::from_value(record)
                .map_err(|e| format!("search index #{position}: {e}"))
        })
        .collect()
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

fn null_as_empty_vec<'de, D>(deserializer: D) -> Result<Vec<CustomAnalyzer>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<CustomAnalyzer>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_mapping<'de, D>(deserializer: D) -> Result<IndexMapping, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<IndexMapping>::deserialize(deserializer)?.unwrap_or_default())
}
