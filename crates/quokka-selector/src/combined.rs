//! Combined selectors per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).

use crate::Selector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors." Written `A B`.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors." Written `A > B`.
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors." Written `A + B`.
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors." Written `A ~ B`.
    SubsequentSibling,
}

impl Combinator {
    /// The token rendered between the two joined selectors.
    ///
    /// The descendant token is itself a single space. The join format already
    /// places one space on each side of the token, so a descendant join
    /// renders as a three-space gap.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Whether `token` is one of the four CSS combinator tokens.
    #[must_use]
    pub fn is_known_token(token: &str) -> bool {
        matches!(token, " " | ">" | "+" | "~")
    }
}

/// Two selectors joined by a combinator token.
///
/// The operands are stored as already-built selectors and are only ever read
/// back as text, never mutated. Either side may itself be a combined
/// selector, so chains of combinators nest to any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    // The two joined operands.
    left: Box<Selector>,
    right: Box<Selector>,
    // The combinator token, stored verbatim.
    combinator: String,
}

impl CombinedSelector {
    /// Join two built selectors with `combinator` between them.
    ///
    /// The token is stored verbatim and is not validated against the four
    /// CSS combinator tokens.
    #[must_use]
    pub fn new(left: Selector, combinator: &str, right: Selector) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
            combinator: combinator.to_string(),
        }
    }

    /// Render the joined text: left, one space, the token, one space, right.
    #[must_use]
    pub fn stringify(&self) -> String {
        format!(
            "{} {} {}",
            self.left.stringify(),
            self.combinator,
            self.right.stringify()
        )
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// The combinator token between the operands.
    #[must_use]
    pub fn combinator(&self) -> &str {
        &self.combinator
    }
}
