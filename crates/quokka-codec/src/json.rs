//! Generic serialize/deserialize wrappers over JSON text.
//!
//! Nothing here adds behavior beyond the standard serializer; the wrappers
//! exist so callers deal in one error type and one text format.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// Serialize a value to compact JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when the underlying serializer fails, for
/// example on a map with non-string keys.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a value to indented JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when the underlying serializer fails.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserialize a value of a known type from JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when the text is not valid JSON or does not
/// match the target type.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, CodecError> {
    Ok(serde_json::from_str(json)?)
}
