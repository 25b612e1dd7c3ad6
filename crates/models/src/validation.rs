//! Structural checks for JSON request bodies.
//!
//! Every offending field is reported, not just the first one, so a client can
//! fix a payload in one round trip.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Missing,
    TypeError,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), kind }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, FieldErrorKind::Missing, "field required")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(error: FieldError) -> Self {
        Self { fields: vec![error] }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the offending fields, in the order they were reported.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Reads typed members out of a JSON object, collecting errors as it goes.
pub struct ObjectReader<'a> {
    obj: &'a Map<String, Value>,
    errors: ValidationError,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ValidationError> {
        match value.as_object() {
            Some(obj) => Ok(Self { obj, errors: ValidationError::default() }),
            None => Err(ValidationError::single(FieldError::new(
                "body",
                FieldErrorKind::TypeError,
                "expected a JSON object",
            ))),
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.fields.push(error);
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.obj.get(field) {
            None => {
                self.push(FieldError::missing(field));
                None
            }
            Some(Value::Null) => {
                self.push(FieldError::new(field, FieldErrorKind::TypeError, "must not be null"));
                None
            }
            Some(v) => Some(v),
        }
    }

    pub fn string(&mut self, field: &str) -> Option<String> {
        let value = self.required(field)?;
        match value.as_str() {
            Some(s) => Some(s.to_owned()),
            None => {
                self.push(FieldError::new(field, FieldErrorKind::TypeError, "must be a string"));
                None
            }
        }
    }

    pub fn integer(&mut self, field: &str) -> Option<i64> {
        let value = self.required(field)?;
        self.as_integer(field, value)
    }

    /// Absent or `null` members are accepted and yield `None`.
    pub fn optional_integer(&mut self, field: &str) -> Option<i64> {
        match self.obj.get(field) {
            None | Some(Value::Null) => None,
            Some(v) => self.as_integer(field, v),
        }
    }

    fn as_integer(&mut self, field: &str, value: &Value) -> Option<i64> {
        match value.as_i64() {
            Some(n) => Some(n),
            None => {
                self.push(FieldError::new(field, FieldErrorKind::TypeError, "must be an integer"));
                None
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
