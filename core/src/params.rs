//! Call parameters.
//!
//! A `Params` value is the flat name → value mapping a caller hands to one
//! operation. Field names are the caller-facing camelCase names; the registry
//! maps them to wire names. Header overrides live under the reserved
//! `headers` key as a JSON object.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Reserved field holding per-call header overrides.
pub const HEADERS_FIELD: &str = "headers";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    fields: Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a per-call header override.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let entry = self
            .fields
            .entry(HEADERS_FIELD)
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(headers) = entry {
            headers.insert(name.into(), Value::String(value.into()));
        }
        self
    }

    /// Build parameters from any value that serializes to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        match serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))? {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Ok(Self::default()),
            other => Err(ApiError::Serialization(format!(
                "parameters must serialize to an object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Parse parameters from JSON text. An empty string yields no parameters.
    pub fn from_json_str(s: &str) -> Result<Self, ApiError> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_str(s).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Self::from_serialize(&value)
    }

    /// The value of a field, treating JSON `null` as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of every field present, including ones set to `null`.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Header overrides, sorted by header name.
    ///
    /// A `headers` field that is present but not an object is an error
    /// rather than a silent no-op.
    pub fn headers(&self) -> Result<Vec<(String, String)>, ApiError> {
        match self.get(HEADERS_FIELD) {
            None => Ok(Vec::new()),
            Some(Value::Object(headers)) => Ok(headers
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), scalar_text(v)))
                .collect()),
            Some(other) => Err(ApiError::Serialization(format!(
                "{HEADERS_FIELD} must be an object, got {}",
                json_type(other)
            ))),
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Text form of a value for path segments, query strings, form fields and
/// headers. Strings are taken verbatim, arrays are comma-joined.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(scalar_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
