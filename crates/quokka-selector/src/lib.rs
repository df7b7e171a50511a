//! Fluent construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate builds selector text from structured calls per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). It does not parse
//! selector strings, and it does not match selectors against a document tree.
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - One factory per part kind: type, id, class, attribute, pseudo-class,
//!     pseudo-element
//!   - Fluent appends enforcing part cardinality and the fixed ordering
//!     `element < id < class < attribute < pseudo-class < pseudo-element`
//! - **Combined selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling tokens
//!   - Arbitrary nesting; nonstandard tokens pass through verbatim
//!
//! Part values are carried verbatim: no escaping, quoting, or identifier
//! validation is applied.
//!
//! # Example
//!
//! ```
//! use quokka_selector as css;
//!
//! let link = css::element("a").attribute("href$=\".png\"")?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), "a[href$=\".png\"]:focus");
//!
//! let cell = css::combine(css::element("tr"), ">", css::element("td"));
//! assert_eq!(cell.stringify(), "tr > td");
//! # Ok::<(), css::SelectorError>(())
//! ```

/// Combined selectors and combinator tokens per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combined;
/// Validation failures raised while appending selector parts.
pub mod error;
/// Selector part kinds, their ordering ranks, and their text forms.
pub mod part;
/// Incremental compound selector construction per [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound).
pub mod simple;

// Re-exports for convenience
pub use combined::{Combinator, CombinedSelector};
pub use error::SelectorError;
pub use part::PartKind;
pub use simple::SimpleSelector;

use quokka_common::warning::warn_once;

/// A built selector of either shape.
///
/// Factories hand out [`SimpleSelector`] values directly so that the append
/// methods stay available; both shapes convert into `Selector` wherever a
/// combined operand is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single compound selector segment, such as `div#main.container`.
    Simple(SimpleSelector),
    /// Two selectors joined by a combinator token, such as `ul > li`.
    Combined(CombinedSelector),
}

impl Selector {
    /// Return the selector text.
    ///
    /// Pure and repeatable; for a combined selector the operands are rendered
    /// left to right with single spaces around the combinator token.
    #[must_use]
    pub fn stringify(&self) -> String {
        match self {
            Self::Simple(simple) => simple.stringify(),
            Self::Combined(combined) => combined.stringify(),
        }
    }
}

impl From<SimpleSelector> for Selector {
    fn from(simple: SimpleSelector) -> Self {
        Self::Simple(simple)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// Start a selector with a type (element) part, rendered verbatim.
#[must_use]
pub fn element(value: &str) -> SimpleSelector {
    SimpleSelector::new(PartKind::Element, value)
}

/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
///
/// Start a selector with an ID part, rendered as `#value`.
#[must_use]
pub fn id(value: &str) -> SimpleSelector {
    SimpleSelector::new(PartKind::Id, value)
}

/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
///
/// Start a selector with a class part, rendered as `.value`.
#[must_use]
pub fn class(value: &str) -> SimpleSelector {
    SimpleSelector::new(PartKind::Class, value)
}

/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// Start a selector with an attribute part. The value carries the
/// bracket-free attribute syntax (for example `href$=".png"`); rendering
/// wraps it in `[...]`.
#[must_use]
pub fn attribute(value: &str) -> SimpleSelector {
    SimpleSelector::new(PartKind::Attribute, value)
}

/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
///
/// Start a selector with a pseudo-class part, rendered as `:value`.
#[must_use]
pub fn pseudo_class(value: &str) -> SimpleSelector {
    SimpleSelector::new(PartKind::PseudoClass, value)
}

/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
///
/// Start a selector with a pseudo-element part, rendered as `::value`.
#[must_use]
pub fn pseudo_element(value: &str) -> SimpleSelector {
    SimpleSelector::new(PartKind::PseudoElement, value)
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two built selectors with `combinator` between them.
///
/// The token is passed through verbatim, so any string is accepted; a token
/// outside the four CSS combinators ([`Combinator::token`]) is flagged once
/// on stderr but still used. Either operand may itself be a combined
/// selector, enabling arbitrary nesting.
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: &str,
    right: impl Into<Selector>,
) -> Selector {
    if !Combinator::is_known_token(combinator) {
        warn_once(
            "selector",
            &format!("unrecognized combinator token {combinator:?}"),
        );
    }
    Selector::Combined(CombinedSelector::new(left.into(), combinator, right.into()))
}
