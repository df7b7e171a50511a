//! Thin wrappers around a standard serialization format.
//!
//! # Scope
//!
//! This crate keeps the serialization exercise deliberately small:
//!
//! - **JSON wrappers**: [`to_json`], [`to_json_pretty`], and [`from_json`],
//!   generic over any serde type, with failures mapped into one error type
//! - **Shape rebuilds**: [`rebuild_from_json`] reconstructs a concrete type
//!   of a known shape from a generic decoded map through the
//!   [`ShapeContract`] trait, rejecting unknown and missing fields
//!
//! There is no schema language, no format negotiation, and no I/O; callers
//! hand in and receive text.

/// Error type shared by the codec wrappers.
pub mod error;
/// Generic serialize/deserialize wrappers over JSON text.
pub mod json;
/// Typed reconstruction from generic decoded maps.
pub mod shape;

// Re-exports for convenience
pub use error::CodecError;
pub use json::{from_json, to_json, to_json_pretty};
pub use shape::{ShapeContract, rebuild_from_json, require_f64, require_str};
