//! Plain geometric value types.
//!
//! # Scope
//!
//! This crate is the smallest of the exercises: a rectangle as a plain data
//! object with a constructor and an area accessor. It holds no state beyond
//! its two dimensions and does not interact with the sibling crates.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its two side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its side lengths.
    ///
    /// Dimensions are taken as given; nothing rejects a negative or
    /// non-finite value.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The enclosed area, `width * height`.
    #[must_use]
    pub const fn area(self) -> f64 {
        self.width * self.height
    }
}
