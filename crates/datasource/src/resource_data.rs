//! Result container exchanged with the declarative configuration engine.
//!
//! A [`ResourceData`] carries the configured inputs of one data source read
//! and receives its computed outputs. Outputs distinguish three states:
//!
//! - never set (the read did not run): [`ResourceData::get_output`] returns `None`
//! - set to "no value": `Some(Value::Null)`
//! - set to a value: `Some(value)`

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::DataSourceError;
use crate::schema::{AttributeMode, lookup, search_indexes_schema};

/// Inputs and computed outputs of one data source read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    inputs: Map<String, Value>,
    outputs: BTreeMap<String, Value>,
    id: Option<String>,
}

impl ResourceData {
    /// Create a container from configured input values.
    pub fn new(inputs: Map<String, Value>) -> Self {
        Self {
            inputs,
            ..Default::default()
        }
    }

    /// Create a container from a JSON object of input values.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::Validation` when `inputs` is not an object.
    pub fn from_json(inputs: Value) -> Result<Self, DataSourceError> {
        match inputs {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(DataSourceError::Validation(format!(
                "configuration must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Read a string attribute.
    ///
    /// Absent and `null` both read as `None`.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::Validation` when the value is not a string.
    pub fn get_string(&self, key: &str) -> Result<Option<&str>, DataSourceError> {
        match self.inputs.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(type_mismatch(key, "a string", other)),
        }
    }

    /// Read an integer attribute.
    ///
    /// Absent and `null` both read as `None`.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::Validation` when the value is not an integer.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>, DataSourceError> {
        match self.inputs.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value @ Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| type_mismatch(key, "an integer", value)),
            Some(other) => Err(type_mismatch(key, "an integer", other)),
        }
    }

    /// Computed output previously committed for `key`.
    pub fn get_output(&self, key: &str) -> Option<&Value> {
        self.outputs.get(key)
    }

    /// Identifier of the last successful read, if one happened.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Write all computed outputs and the read identifier at once.
    ///
    /// Every value is checked against the schema before anything is written,
    /// so on error the container is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::OutputAssign` when an attribute is unknown,
    /// is not a computed attribute, or has the wrong shape.
    pub fn commit_outputs(
        &mut self,
        id: String,
        outputs: Vec<(&str, Value)>,
    ) -> Result<(), DataSourceError> {
        for (attribute, value) in &outputs {
            check_output(attribute, value)?;
        }

        for (attribute, value) in outputs {
            self.outputs.insert(attribute.to_string(), value);
        }
        self.id = Some(id);
        Ok(())
    }
}

fn check_output(attribute: &str, value: &Value) -> Result<(), DataSourceError> {
    let attr = lookup(search_indexes_schema(), attribute)
        .ok_or_else(|| DataSourceError::output(attribute, "unknown attribute"))?;

    if attr.mode != AttributeMode::Computed {
        return Err(DataSourceError::output(
            attribute,
            "attribute is not computed and cannot be set",
        ));
    }

    if !attr.accepts(value) {
        return Err(DataSourceError::output(
            attribute,
            format!("value of type {} does not match the schema", json_type_name(value)),
        ));
    }

    Ok(())
}

fn type_mismatch(key: &str, expected: &str, got: &Value) -> DataSourceError {
    DataSourceError::Validation(format!(
        "attribute `{}` must be {}, got {}",
        key,
        expected,
        json_type_name(got)
    ))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
