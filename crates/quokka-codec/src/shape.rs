//! Typed reconstruction from generic decoded maps.
//!
//! Decoding into a dynamic bag of fields is the easy half; this module does
//! the other half: rebuilding a concrete type of a known shape from such a
//! bag, with the target shape supplying the contract. Implementors list the
//! field names they accept and read each one out of the decoded map
//! explicitly, so a document with missing, mistyped, or unknown fields is
//! rejected instead of silently coerced.

use serde_json::{Map, Value};

use crate::error::CodecError;

/// The field contract of a concrete target shape.
pub trait ShapeContract: Sized {
    /// Every field name the shape accepts.
    const FIELDS: &'static [&'static str];

    /// Construct the shape from the decoded fields.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MissingField`] or [`CodecError::WrongType`] when
    /// the map does not satisfy the contract.
    fn from_fields(fields: &Map<String, Value>) -> Result<Self, CodecError>;
}

/// Rebuild a `T` from a JSON document via its field contract.
///
/// The document is decoded into a generic map first, then the concrete type
/// is constructed explicitly, field by field, rather than through a derived
/// deserializer.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when the document does not parse,
/// [`CodecError::NotAnObject`] when it is valid JSON but not an object,
/// [`CodecError::UnknownField`] for a key outside
/// [`ShapeContract::FIELDS`], and whatever
/// [`from_fields`](ShapeContract::from_fields) raises for missing or
/// mistyped fields.
pub fn rebuild_from_json<T: ShapeContract>(json: &str) -> Result<T, CodecError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(fields) = document else {
        return Err(CodecError::NotAnObject {
            found: json_type_name(&document),
        });
    };
    for name in fields.keys() {
        if !T::FIELDS.contains(&name.as_str()) {
            return Err(CodecError::UnknownField { name: name.clone() });
        }
    }
    T::from_fields(&fields)
}

/// Read a required numeric field out of a decoded map.
///
/// # Errors
///
/// Returns [`CodecError::MissingField`] when the field is absent and
/// [`CodecError::WrongType`] when it is not representable as a number.
pub fn require_f64(fields: &Map<String, Value>, name: &'static str) -> Result<f64, CodecError> {
    match fields.get(name) {
        None => Err(CodecError::MissingField { name }),
        Some(value) => value.as_f64().ok_or_else(|| CodecError::WrongType {
            name,
            expected: "number",
        }),
    }
}

/// Read a required string field out of a decoded map.
///
/// # Errors
///
/// Returns [`CodecError::MissingField`] when the field is absent and
/// [`CodecError::WrongType`] when it is not a string.
pub fn require_str<'map>(
    fields: &'map Map<String, Value>,
    name: &'static str,
) -> Result<&'map str, CodecError> {
    match fields.get(name) {
        None => Err(CodecError::MissingField { name }),
        Some(value) => value.as_str().ok_or_else(|| CodecError::WrongType {
            name,
            expected: "string",
        }),
    }
}

/// The JSON type name used in diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
