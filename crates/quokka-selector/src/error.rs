//! Validation failures raised while appending selector parts.

use thiserror::Error;

use crate::part::PartKind;

/// A rejected append operation.
///
/// Both variants are user-input validation failures surfaced synchronously to
/// the caller; nothing is recovered or retried internally. The failed call
/// consumes the selector being built, so a partially updated selector cannot
/// be observed after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A kind limited to one occurrence per selector (element, id,
    /// pseudo-element) was appended a second time.
    #[error("duplicate {kind} part: a selector may contain at most one")]
    Duplicate {
        /// The kind that was appended a second time.
        kind: PartKind,
    },

    /// A part was appended whose kind ranks lower than the most recently
    /// appended kind.
    #[error(
        "{kind} part cannot follow {last}: parts must be appended in \
         element, id, class, attribute, pseudo-class, pseudo-element order"
    )]
    OutOfOrder {
        /// The kind that was appended out of order.
        kind: PartKind,
        /// The most recently appended kind.
        last: PartKind,
    },
}
