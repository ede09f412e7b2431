//! The adaptation boundary between raw interpreter values and the host.

use serde_json::{Map, Value};

use crate::constants;
use crate::errors::AdaptationError;
use crate::ops::ConvertKind;

/// A structured wrapper around the object a conversion function returned.
///
/// The internal shape is defined by the conversion scripts and is opaque
/// here beyond the one stable requirement: a string `rendered` field holding
/// the content body. Everything else is exposed as metadata.
#[derive(Debug, Clone)]
pub struct ConverterResult {
    operation: ConvertKind,
    raw: Map<String, Value>,
}

impl ConverterResult {
    /// Adapt a raw interpreter value into a result, validating its shape.
    pub fn from_raw(operation: ConvertKind, raw: Value) -> Result<Self, AdaptationError> {
        let object = match raw {
            Value::Object(map) => map,
            other => {
                return Err(AdaptationError::NotAnObject {
                    operation: operation.as_str().to_string(),
                    got: json_type(&other).to_string(),
                })
            }
        };
        match object.get(constants::RENDERED_FIELD) {
            Some(Value::String(_)) => Ok(Self {
                operation,
                raw: object,
            }),
            _ => Err(AdaptationError::MissingRendered {
                operation: operation.as_str().to_string(),
            }),
        }
    }

    /// The operation that produced this result.
    pub fn operation(&self) -> ConvertKind {
        self.operation
    }

    /// The content body.
    pub fn rendered(&self) -> &str {
        // Shape was validated in from_raw; the fallback is never taken.
        self.raw
            .get(constants::RENDERED_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// The backend the scripts report, when present.
    pub fn backend(&self) -> Option<&str> {
        self.raw.get("backend").and_then(Value::as_str)
    }

    /// Opaque metadata field by name.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        if key == constants::RENDERED_FIELD {
            return None;
        }
        self.raw.get(key)
    }

    /// Consume the wrapper and return the raw object.
    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
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
