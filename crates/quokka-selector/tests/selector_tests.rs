//! Integration tests for fluent selector construction.

use quokka_selector::{
    Combinator, PartKind, Selector, SelectorError, combine, element, id, pseudo_class,
};

// =============================================================================
// Factory Rendering Tests
// One factory per part kind; each renders its prefix and the verbatim value.
// =============================================================================

#[test]
fn test_element_factory_renders_verbatim() {
    assert_eq!(element("div").stringify(), "div");
}

#[test]
fn test_id_factory_renders_hash() {
    assert_eq!(id("main").stringify(), "#main");
}

#[test]
fn test_class_factory_renders_dot() {
    assert_eq!(quokka_selector::class("container").stringify(), ".container");
}

#[test]
fn test_attribute_factory_renders_brackets() {
    assert_eq!(
        quokka_selector::attribute("href$=\".png\"").stringify(),
        "[href$=\".png\"]"
    );
}

#[test]
fn test_pseudo_class_factory_renders_colon() {
    assert_eq!(pseudo_class("focus").stringify(), ":focus");
}

#[test]
fn test_pseudo_element_factory_renders_double_colon() {
    assert_eq!(quokka_selector::pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_empty_value_passes_through() {
    // Malformed values are not validated; only the prefix is added.
    assert_eq!(quokka_selector::class("").stringify(), ".");
    assert_eq!(element("").stringify(), "");
}

// =============================================================================
// Fluent Chaining Tests
// Appends concatenate onto the accumulated text, left to right.
// =============================================================================

#[test]
fn test_chained_id_and_classes() {
    let selector = id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_chained_element_attribute_pseudo_class() {
    let selector = element("a")
        .attribute("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_element_then_id() {
    // element(0) then id(1): ranks are non-decreasing, so this is valid.
    let selector = element("input").id("id").unwrap();
    assert_eq!(selector.stringify(), "input#id");
}

#[test]
fn test_full_ordering_chain() {
    // One part of every kind, in rank order.
    let selector = element("div")
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .attribute("href")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("before")
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "div#main.container[href]:focus::before"
    );
}

#[test]
fn test_repeatable_kinds_allow_equal_rank() {
    // class, attribute, and pseudo-class may repeat: equal rank is allowed.
    let selector = quokka_selector::class("a")
        .class("b")
        .unwrap()
        .attribute("x")
        .unwrap()
        .attribute("y")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), ".a.b[x][y]:hover:focus");
}

#[test]
fn test_stringify_is_repeatable() {
    let selector = id("main").class("container").unwrap();
    assert_eq!(selector.stringify(), "#main.container");
    assert_eq!(selector.stringify(), "#main.container");
}

#[test]
fn test_emitted_kinds_record_append_order() {
    let selector = element("a").class("x").unwrap().class("y").unwrap();
    assert_eq!(
        selector.emitted_kinds(),
        &[PartKind::Element, PartKind::Class, PartKind::Class]
    );
}

// =============================================================================
// Duplicate Rejection Tests
// element, id, and pseudo-element are limited to one occurrence.
// =============================================================================

#[test]
fn test_duplicate_element_rejected() {
    assert_eq!(
        element("a").element("a2"),
        Err(SelectorError::Duplicate {
            kind: PartKind::Element
        })
    );
}

#[test]
fn test_duplicate_id_rejected() {
    assert_eq!(
        id("one").id("two"),
        Err(SelectorError::Duplicate { kind: PartKind::Id })
    );
}

#[test]
fn test_duplicate_pseudo_element_rejected() {
    assert_eq!(
        quokka_selector::pseudo_element("before").pseudo_element("after"),
        Err(SelectorError::Duplicate {
            kind: PartKind::PseudoElement
        })
    );
}

#[test]
fn test_duplicate_beats_ordering() {
    // A second id is a duplicate even when the ordering check would also
    // reject it: cardinality is checked first, regardless of other state.
    let selector = element("input").id("a").unwrap().class("wide").unwrap();
    assert_eq!(
        selector.id("b"),
        Err(SelectorError::Duplicate { kind: PartKind::Id })
    );
}

// =============================================================================
// Ordering Rejection Tests
// A part whose rank is lower than the last appended kind's rank is rejected.
// =============================================================================

#[test]
fn test_element_after_id_rejected() {
    assert_eq!(
        id("id").element("input"),
        Err(SelectorError::OutOfOrder {
            kind: PartKind::Element,
            last: PartKind::Id,
        })
    );
}

#[test]
fn test_id_after_class_rejected() {
    assert_eq!(
        quokka_selector::class("container").id("main"),
        Err(SelectorError::OutOfOrder {
            kind: PartKind::Id,
            last: PartKind::Class,
        })
    );
}

#[test]
fn test_class_after_attribute_rejected() {
    assert_eq!(
        quokka_selector::attribute("href").class("container"),
        Err(SelectorError::OutOfOrder {
            kind: PartKind::Class,
            last: PartKind::Attribute,
        })
    );
}

#[test]
fn test_attribute_after_pseudo_class_rejected() {
    assert_eq!(
        pseudo_class("focus").attribute("href"),
        Err(SelectorError::OutOfOrder {
            kind: PartKind::Attribute,
            last: PartKind::PseudoClass,
        })
    );
}

#[test]
fn test_pseudo_class_after_pseudo_element_rejected() {
    assert_eq!(
        quokka_selector::pseudo_element("before").pseudo_class("hover"),
        Err(SelectorError::OutOfOrder {
            kind: PartKind::PseudoClass,
            last: PartKind::PseudoElement,
        })
    );
}

#[test]
fn test_error_messages_name_both_kinds() {
    let error = id("id").element("input").unwrap_err();
    let message = error.to_string();
    assert!(message.contains("element"));
    assert!(message.contains("id"));
}

// =============================================================================
// Combinator Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
// =============================================================================

#[test]
fn test_combinator_tokens() {
    assert_eq!(Combinator::Descendant.token(), " ");
    assert_eq!(Combinator::Child.token(), ">");
    assert_eq!(Combinator::NextSibling.token(), "+");
    assert_eq!(Combinator::SubsequentSibling.token(), "~");
}

#[test]
fn test_known_tokens() {
    assert!(Combinator::is_known_token(" "));
    assert!(Combinator::is_known_token(">"));
    assert!(Combinator::is_known_token("+"));
    assert!(Combinator::is_known_token("~"));
    assert!(!Combinator::is_known_token("=>"));
    assert!(!Combinator::is_known_token(""));
}

#[test]
fn test_combine_joins_with_single_spaces() {
    let combined = combine(element("ul"), ">", element("li"));
    assert_eq!(combined.stringify(), "ul > li");
}

#[test]
fn test_combine_matches_manual_concatenation() {
    let left = element("h1").class("title").unwrap();
    let right = element("p");
    let expected = format!("{} + {}", left.stringify(), right.stringify());
    assert_eq!(combine(left, "+", right).stringify(), expected);
}

#[test]
fn test_combine_accepts_any_token() {
    // The token is not validated; it is rendered verbatim.
    let combined = combine(element("a"), "=>", element("b"));
    assert_eq!(combined.stringify(), "a => b");
}

#[test]
fn test_combine_descendant_renders_three_space_gap() {
    // A single-space token between the two single join spaces.
    let combined = combine(element("tr"), Combinator::Descendant.token(), element("td"));
    assert_eq!(combined.stringify(), "tr   td");
}

#[test]
fn test_combine_nests_left_associatively() {
    let draggable = element("div")
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();
    let data = element("table").id("data").unwrap();
    let rows = element("tr").pseudo_class("nth-of-type(even)").unwrap();
    let cells = element("td").pseudo_class("nth-of-type(even)").unwrap();

    let combined = combine(
        combine(combine(draggable, "+", data), "~", rows),
        Combinator::Descendant.token(),
        cells,
    );
    assert_eq!(
        combined.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combined_selector_accessors() {
    let combined = combine(element("ul"), ">", element("li"));
    let Selector::Combined(inner) = combined else {
        panic!("combine must produce a combined selector");
    };
    assert_eq!(inner.combinator(), ">");
    assert_eq!(inner.left().stringify(), "ul");
    assert_eq!(inner.right().stringify(), "li");
}

// =============================================================================
// Part Kind Tests
// =============================================================================

#[test]
fn test_rank_order_is_fixed() {
    let order = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];
    for (expected, kind) in order.iter().enumerate() {
        assert_eq!(usize::from(kind.rank()), expected);
    }
}

#[test]
fn test_unique_kinds() {
    assert!(PartKind::Element.is_unique());
    assert!(PartKind::Id.is_unique());
    assert!(PartKind::PseudoElement.is_unique());
    assert!(!PartKind::Class.is_unique());
    assert!(!PartKind::Attribute.is_unique());
    assert!(!PartKind::PseudoClass.is_unique());
}

#[test]
fn test_kind_display_is_kebab_case() {
    assert_eq!(PartKind::Element.to_string(), "element");
    assert_eq!(PartKind::PseudoClass.to_string(), "pseudo-class");
    assert_eq!(PartKind::PseudoElement.to_string(), "pseudo-element");
}
