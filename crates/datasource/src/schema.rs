//! Attribute schema of the search indexes data source.
//!
//! The schema lists every input and computed output the data source exposes,
//! including the element shape of the nested `results` and `analyzers`
//! lists. [`crate::ResourceData`] checks outputs against it before they
//! are committed.

use serde_json::Value;

/// Value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Int,
    Bool,
    /// Map of string keys to string values.
    StringMap,
    /// Ordered list of objects whose keys are described by the element schema.
    List(&'static [Attribute]),
}

/// Whether the caller provides the attribute or the data source computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    Required,
    Optional,
    Computed,
}

/// One attribute of the data source schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
}

impl Attribute {
    const fn new(name: &'static str, kind: AttributeKind, mode: AttributeMode) -> Self {
        Self { name, kind, mode }
    }

    const fn computed(name: &'static str, kind: AttributeKind) -> Self {
        Self::new(name, kind, AttributeMode::Computed)
    }

    /// Check that `value` has the shape this attribute declares.
    ///
    /// `null` is accepted everywhere and stands for "no value".
    pub fn accepts(&self, value: &Value) -> bool {
        self.kind.accepts(value)
    }
}

impl AttributeKind {
    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::String, Value::String(_)) => true,
            (Self::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (Self::Bool, Value::Bool(_)) => true,
            (Self::StringMap, Value::Object(map)) => map.values().all(Value::is_string),
            (Self::List(element), Value::Array(items)) => items.iter().all(|item| {
                item.as_object().is_some_and(|fields| {
                    fields.iter().all(|(key, field)| {
                        lookup(*element, key).is_some_and(|attr| attr.accepts(field))
                    })
                })
            }),
            _ => false,
        }
    }
}

const ANALYZER_ATTRIBUTES: &[Attribute] = &[
    Attribute::computed("name", AttributeKind::String),
    Attribute::computed("definition", AttributeKind::StringMap),
];

const RESULT_ATTRIBUTES: &[Attribute] = &[
    Attribute::computed("analyzer", AttributeKind::String),
    Attribute::computed("analyzers", AttributeKind::List(ANALYZER_ATTRIBUTES)),
    Attribute::computed("collection_name", AttributeKind::String),
    Attribute::computed("database", AttributeKind::String),
    Attribute::computed("index_id", AttributeKind::String),
    Attribute::computed("mappings_dynamic", AttributeKind::Bool),
    Attribute::computed("mappings_fields", AttributeKind::String),
    Attribute::computed("name", AttributeKind::String),
    Attribute::computed("search_analyzer", AttributeKind::String),
    Attribute::computed("status", AttributeKind::String),
];

const SEARCH_INDEXES_ATTRIBUTES: &[Attribute] = &[
    Attribute::new("project_id", AttributeKind::String, AttributeMode::Required),
    Attribute::new("cluster_name", AttributeKind::String, AttributeMode::Required),
    Attribute::new("database", AttributeKind::String, AttributeMode::Required),
    Attribute::new("collection_name", AttributeKind::String, AttributeMode::Required),
    Attribute::new("page_num", AttributeKind::Int, AttributeMode::Optional),
    Attribute::new("items_per_page", AttributeKind::Int, AttributeMode::Optional),
    Attribute::computed("results", AttributeKind::List(RESULT_ATTRIBUTES)),
    Attribute::computed("total_count", AttributeKind::Int),
];

/// Top-level attributes of the search indexes data source.
pub fn search_indexes_schema() -> &'static [Attribute] {
    SEARCH_INDEXES_ATTRIBUTES
}

/// Find an attribute by name.
pub fn lookup(attributes: &'static [Attribute], name: &str) -> Option<&'static Attribute> {
    attributes.iter().find(|attr| attr.name == name)
}
