//! Declared-state accessor
//!
//! A resource's attributes as handed over by the hosting tool: a flat JSON
//! object read by the reconcilers and written back with observed values.

use serde_json::{Map, Value};

use crate::error::{ConfigError, Error, Result};

/// Attribute bag for one resource instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceState {
    attributes: Map<String, Value>,
}

impl ResourceState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(attributes) => Ok(Self { attributes }),
            Value::Null => Ok(Self::default()),
            other => Err(Error::Other(format!(
                "Declared state must be a JSON object, got {}",
                other
            ))),
        }
    }

    /// Unwrap into a JSON object
    pub fn into_value(self) -> Value {
        Value::Object(self.attributes)
    }

    /// Raw attribute value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field).filter(|v| !v.is_null())
    }

    /// String attribute; absent, null and non-string values read as `None`
    #[cfg(test)]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Non-empty string attribute
    pub fn require_str(&self, field: &'static str) -> std::result::Result<&str, ConfigError> {
        match self.get(field) {
            None => Err(ConfigError::MissingField(field)),
            Some(Value::String(s)) if s.is_empty() => Err(ConfigError::MissingField(field)),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(ConfigError::WrongType {
                field,
                expected: "string",
            }),
        }
    }

    /// Optional numeric attribute
    pub fn get_f64(&self, field: &'static str) -> std::result::Result<Option<f64>, ConfigError> {
        match self.get(field) {
            None => Ok(None),
            Some(v) => v.as_f64().map(Some).ok_or(ConfigError::WrongType {
                field,
                expected: "number",
            }),
        }
    }

    /// Write an attribute
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.attributes.insert(field.to_string(), value.into());
    }
}
