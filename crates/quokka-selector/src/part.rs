//! Selector part kinds, their ordering ranks, and their text forms.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) distinguishes the
//! simple selectors that may appear inside one compound selector. This module
//! tags each of them with a kind, a fixed rank in the required append order,
//! and the text form it contributes to the built selector string.

use strum_macros::Display;

/// The kind of one part of a compound selector.
///
/// Kinds carry a fixed [`rank`](PartKind::rank); within one compound selector,
/// parts must be appended in non-decreasing rank order, and the kinds for
/// which [`is_unique`](PartKind::is_unique) is true may appear at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Rendered verbatim: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Rendered as `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Rendered as `.container`
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The value carries the bracket-free attribute syntax (for example
    /// `href$=".png"`); rendering wraps it in brackets: `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered as `:focus`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// "Pseudo-elements are represented by a pair of colons (::) followed
    /// by the name of the pseudo-element."
    ///
    /// Rendered as `::before`
    PseudoElement,
}

impl PartKind {
    /// Position of this kind in the required append order:
    /// `element(0) < id(1) < class(2) < attribute(3) < pseudo-class(4) <
    /// pseudo-element(5)`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Whether at most one part of this kind may appear in a selector.
    ///
    /// Class, attribute, and pseudo-class parts may repeat; the rest are
    /// limited to one occurrence.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render one part as selector text.
    ///
    /// The value is taken verbatim; only the kind's prefix (and the brackets
    /// of an attribute part) is added.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}
