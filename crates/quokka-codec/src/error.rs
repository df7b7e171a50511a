//! Error type shared by the codec wrappers.

use thiserror::Error;

/// A failed encode, decode, or shape rebuild.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying JSON serializer or parser failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A rebuild expected a JSON object at the top level.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// A field required by the target shape was absent.
    #[error("missing field \"{name}\"")]
    MissingField {
        /// The absent field's name.
        name: &'static str,
    },

    /// The document carried a field the target shape does not accept.
    #[error("unknown field \"{name}\"")]
    UnknownField {
        /// The unexpected field's name.
        name: String,
    },

    /// A field was present but not of the expected JSON type.
    #[error("field \"{name}\" is not a {expected}")]
    WrongType {
        /// The mistyped field's name.
        name: &'static str,
        /// The JSON type the shape requires.
        expected: &'static str,
    },
}
