//! Incremental compound selector construction.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."

use crate::error::SelectorError;
use crate::part::PartKind;

/// One compound selector segment, built incrementally by appending typed
/// parts (for example `div#main.container[href]:focus::before`).
///
/// Every append consumes the selector and returns it on success, which keeps
/// fluent chains terse and makes failure all-or-nothing: when a call returns
/// an error the selector is gone, so an invalid chain cannot leak a partially
/// updated value.
///
/// Values are carried verbatim. An empty or otherwise malformed value string
/// is not rejected; only part cardinality and ordering are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleSelector {
    // Every part kind appended so far, in append order.
    emitted: Vec<PartKind>,
    // The accumulated text, built left-to-right as parts are appended.
    text: String,
}

impl SimpleSelector {
    /// Start a selector with an initial part.
    ///
    /// Called by the crate-root factory functions; a selector always carries
    /// at least one part.
    pub(crate) fn new(kind: PartKind, value: &str) -> Self {
        Self {
            emitted: vec![kind],
            text: kind.render(value),
        }
    }

    /// Append one part, checking cardinality before ordering.
    ///
    /// A second occurrence of an at-most-once kind is rejected regardless of
    /// any ordering concern. Otherwise the new part's rank must not be lower
    /// than the rank of the most recently appended kind; equal ranks are
    /// allowed, which is what lets class, attribute, and pseudo-class parts
    /// repeat.
    fn append(mut self, kind: PartKind, value: &str) -> Result<Self, SelectorError> {
        if kind.is_unique() && self.emitted.contains(&kind) {
            return Err(SelectorError::Duplicate { kind });
        }
        if let Some(&last) = self.emitted.last()
            && kind.rank() < last.rank()
        {
            return Err(SelectorError::OutOfOrder { kind, last });
        }
        self.emitted.push(kind);
        self.text.push_str(&kind.render(value));
        Ok(self)
    }

    /// Append a type selector part, rendered verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Duplicate`] if this selector already contains
    /// an element part. Element ranks before every other kind, so following
    /// any other part it returns [`SelectorError::OutOfOrder`].
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Element, value)
    }

    /// Append an ID part, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Duplicate`] if this selector already contains
    /// an ID part, or [`SelectorError::OutOfOrder`] if a part ranking above
    /// ID (class, attribute, pseudo-class, pseudo-element) was appended last.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Id, value)
    }

    /// Append a class part, rendered as `.value`. May be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] if a part ranking above class
    /// (attribute, pseudo-class, pseudo-element) was appended last.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Class, value)
    }

    /// Append an attribute part, wrapping the bracket-free `value` in `[...]`.
    /// May be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] if a pseudo-class or
    /// pseudo-element part was appended last.
    pub fn attribute(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Attribute, value)
    }

    /// Append a pseudo-class part, rendered as `:value`. May be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] if a pseudo-element part was
    /// appended last.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element part, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Duplicate`] if this selector already contains
    /// a pseudo-element part. Pseudo-element ranks last, so it never fails
    /// the ordering check.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoElement, value)
    }

    /// Return the accumulated selector text.
    ///
    /// Pure and repeatable: the selector is unchanged and remains usable
    /// afterwards.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// The part kinds appended so far, in append order.
    #[must_use]
    pub fn emitted_kinds(&self) -> &[PartKind] {
        &self.emitted
    }
}
