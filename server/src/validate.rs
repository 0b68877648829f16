//! Per-field presence and type checks for request payloads.
//!
//! Payload structs declare every field as [`Field<T>`] with `#[serde(default)]`.
//! Deserialization never fails on a mistyped field; the mismatch is recorded
//! and turned into an [`AppError::Validation`] with the API's message when the
//! handler validates the payload.
//!
//! Only numeric and boolean fields are type-checked. Text-like fields are
//! declared as `Field<Value>` and stored as sent.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::AppError;

/// A JSON object member as it arrived in the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The key was not present.
    Absent,
    /// The key was present with `null`.
    Null,
    /// The key was present with a value of the expected type.
    Value(T),
    /// The key was present with a value of some other type.
    Mistyped,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::Null => Field::Null,
            other => T::deserialize(other).map_or(Field::Mistyped, Field::Value),
        })
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// A value that must be present and well typed.
    pub fn required(self, message: &'static str) -> Result<T, AppError> {
        match self {
            Field::Value(value) => Ok(value),
            _ => Err(AppError::Validation(message)),
        }
    }

    /// A value that may be left out but not nulled or mistyped.
    ///
    /// `Ok(None)` means "leave the stored value alone".
    pub fn optional(self, message: &'static str) -> Result<Option<T>, AppError> {
        match self {
            Field::Absent => Ok(None),
            Field::Value(value) => Ok(Some(value)),
            Field::Null | Field::Mistyped => Err(AppError::Validation(message)),
        }
    }
}

/// Fields stored exactly as the client sent them. Only presence is checked.
impl Field<Value> {
    /// A value that must be present and truthy: not `null`, `false`, `0`,
    /// or `""`.
    pub fn required_truthy(self, message: &'static str) -> Result<Value, AppError> {
        match self {
            Field::Value(value) if is_truthy(&value) => Ok(value),
            _ => Err(AppError::Validation(message)),
        }
    }

    /// `None` when the key was absent; otherwise the value as sent, `null`
    /// included.
    pub fn given(self) -> Option<Value> {
        match self {
            Field::Absent | Field::Mistyped => None,
            Field::Null => Some(Value::Null),
            Field::Value(value) => Some(value),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
