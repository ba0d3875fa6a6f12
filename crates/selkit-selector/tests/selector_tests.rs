//! Integration tests for compound selector construction and rendering.

use selkit_selector::{FragmentKind, SelectorError, SimpleSelector, Stringify, builder};

// ========== rendering ==========

#[test]
fn test_id_with_classes() {
    let mut selector = builder::id("main");
    let rendered = selector
        .class_name("container")
        .unwrap()
        .class_name("editable")
        .unwrap()
        .stringify();

    assert_eq!(rendered, "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let mut selector = builder::element("a");
    let rendered = selector
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .stringify();

    assert_eq!(rendered, r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_every_category_in_order() {
    let mut selector = builder::element("input");
    let _ = selector
        .id("email")
        .and_then(|s| s.class_name("field"))
        .and_then(|s| s.class_name("wide"))
        .and_then(|s| s.attr("type=email"))
        .and_then(|s| s.attr("required"))
        .and_then(|s| s.pseudo_class("focus"))
        .and_then(|s| s.pseudo_class("invalid"))
        .and_then(|s| s.pseudo_element("placeholder"))
        .unwrap();

    assert_eq!(
        selector.stringify(),
        "input#email.field.wide[type=email][required]:focus:invalid::placeholder"
    );
}

#[test]
fn test_accessors_read_back_every_slot() {
    let mut selector = builder::element("input");
    let _ = selector
        .id("email")
        .and_then(|s| s.class_name("field"))
        .and_then(|s| s.attr("type=email"))
        .and_then(|s| s.attr("required"))
        .and_then(|s| s.pseudo_class("focus"))
        .and_then(|s| s.pseudo_element("placeholder"))
        .unwrap();

    assert_eq!(selector.element_name(), Some("input"));
    assert_eq!(selector.id_value(), Some("email"));
    assert_eq!(selector.class_names(), ["field"]);
    assert_eq!(selector.attributes(), ["type=email", "required"]);
    assert_eq!(selector.pseudo_classes(), ["focus"]);
    assert_eq!(selector.pseudo_element_name(), Some("placeholder"));
}

#[test]
fn test_accessors_on_empty_selector() {
    let selector = SimpleSelector::new();
    assert_eq!(selector.element_name(), None);
    assert_eq!(selector.id_value(), None);
    assert!(selector.attributes().is_empty());
    assert!(selector.pseudo_classes().is_empty());
    assert_eq!(selector.pseudo_element_name(), None);
}

#[test]
fn test_empty_selector_renders_empty() {
    let selector = SimpleSelector::new();
    assert!(selector.is_empty());
    assert_eq!(selector.highest_kind(), None);
    assert_eq!(selector.stringify(), "");
}

#[test]
fn test_each_factory_fills_one_slot() {
    assert_eq!(builder::element("div").stringify(), "div");
    assert_eq!(builder::id("main").stringify(), "#main");
    assert_eq!(builder::class("btn").stringify(), ".btn");
    assert_eq!(builder::attr("href").stringify(), "[href]");
    assert_eq!(builder::pseudo_class("hover").stringify(), ":hover");
    assert_eq!(builder::pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_repeated_values_are_kept() {
    let mut selector = builder::class("a");
    let _ = selector.class_name("a").unwrap().class_name("b").unwrap();

    assert_eq!(selector.class_names(), ["a", "a", "b"]);
    assert_eq!(selector.stringify(), ".a.a.b");
}

#[test]
fn test_stringify_is_repeatable() {
    let mut selector = builder::element("p");
    let _ = selector.class_name("lead").unwrap();

    let first = selector.stringify();
    for _ in 0..5 {
        assert_eq!(selector.stringify(), first);
    }
    assert_eq!(selector.to_string(), first);
    assert_eq!(selector.class_names(), ["lead"]);
}

#[test]
fn test_fragments_iterate_in_render_order() {
    let mut selector = builder::element("li");
    let _ = selector
        .pseudo_class("first-child")
        .unwrap()
        .pseudo_element("marker")
        .unwrap();

    let fragments: Vec<_> = selector.fragments().collect();
    assert_eq!(
        fragments,
        [
            (FragmentKind::Element, "li"),
            (FragmentKind::PseudoClass, "first-child"),
            (FragmentKind::PseudoElement, "marker"),
        ]
    );
    assert_eq!(selector.highest_kind(), Some(FragmentKind::PseudoElement));
}

#[test]
fn test_generic_add_matches_named_methods() {
    let mut generic = SimpleSelector::new();
    let _ = generic
        .add(FragmentKind::Element, "a")
        .unwrap()
        .add(FragmentKind::Attribute, "href")
        .unwrap();

    let mut named = builder::element("a");
    let _ = named.attr("href").unwrap();

    assert_eq!(generic, named);
}

// ========== duplicate singleton slots ==========

#[test]
fn test_second_id_is_duplicate() {
    let mut selector = builder::id("a");
    assert_eq!(
        selector.id("b").unwrap_err(),
        SelectorError::DuplicateKind {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_second_id_after_later_fragments_is_still_duplicate() {
    let mut selector = builder::id("a");
    let _ = selector.class_name("c").unwrap().pseudo_class("hover").unwrap();

    assert_eq!(
        selector.id("b").unwrap_err(),
        SelectorError::DuplicateKind {
            kind: FragmentKind::Id
        }
    );
}

#[test]
fn test_second_pseudo_element_is_duplicate() {
    let mut selector = builder::element("p");
    let _ = selector.pseudo_element("before").unwrap();

    assert_eq!(
        selector.pseudo_element("after").unwrap_err(),
        SelectorError::DuplicateKind {
            kind: FragmentKind::PseudoElement
        }
    );
}

#[test]
fn test_second_element_alone_is_duplicate() {
    let mut selector = builder::element("div");
    assert_eq!(
        selector.element("span").unwrap_err(),
        SelectorError::DuplicateKind {
            kind: FragmentKind::Element
        }
    );
}

// ========== ordering ==========

#[test]
fn test_element_after_other_fragments_is_order_error() {
    let mut selector = builder::element("div");
    let _ = selector
        .id("main")
        .unwrap()
        .class_name("container")
        .unwrap()
        .class_name("draggable")
        .unwrap();

    assert_eq!(
        selector.element("x").unwrap_err(),
        SelectorError::Order {
            attempted: FragmentKind::Element,
            present: FragmentKind::Class,
        }
    );
}

#[test]
fn test_element_after_id_is_order_error() {
    let mut selector = builder::id("main");
    assert!(matches!(
        selector.element("div"),
        Err(SelectorError::Order {
            attempted: FragmentKind::Element,
            present: FragmentKind::Id,
        })
    ));
}

#[test]
fn test_id_after_class_is_order_error() {
    let mut selector = builder::class("btn");
    assert!(matches!(
        selector.id("main"),
        Err(SelectorError::Order { .. })
    ));
}

#[test]
fn test_class_after_attribute_is_order_error() {
    let mut selector = builder::attr("href");
    assert_eq!(
        selector.class_name("link").unwrap_err(),
        SelectorError::Order {
            attempted: FragmentKind::Class,
            present: FragmentKind::Attribute,
        }
    );
}

#[test]
fn test_attribute_after_pseudo_class_is_order_error() {
    let mut selector = builder::pseudo_class("hover");
    assert!(matches!(
        selector.attr("href"),
        Err(SelectorError::Order {
            present: FragmentKind::PseudoClass,
            ..
        })
    ));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_order_error() {
    let mut selector = builder::pseudo_element("after");
    assert_eq!(
        selector.pseudo_class("hover").unwrap_err(),
        SelectorError::Order {
            attempted: FragmentKind::PseudoClass,
            present: FragmentKind::PseudoElement,
        }
    );
}

#[test]
fn test_order_error_reports_latest_category() {
    let mut selector = builder::class("a");
    let _ = selector.attr("b").unwrap().pseudo_class("c").unwrap();

    let err = selector.class_name("d").unwrap_err();
    assert_eq!(err.kind(), FragmentKind::Class);
    assert_eq!(
        err,
        SelectorError::Order {
            attempted: FragmentKind::Class,
            present: FragmentKind::PseudoClass,
        }
    );
}

#[test]
fn test_every_backwards_pair_is_rejected() {
    let kinds = [
        FragmentKind::Element,
        FragmentKind::Id,
        FragmentKind::Class,
        FragmentKind::Attribute,
        FragmentKind::PseudoClass,
        FragmentKind::PseudoElement,
    ];

    for (later_index, &later) in kinds.iter().enumerate() {
        for &earlier in &kinds[..later_index] {
            let mut selector = SimpleSelector::with_fragment(later, "x");
            let err = selector.add(earlier, "y").unwrap_err();
            assert_eq!(
                err,
                SelectorError::Order {
                    attempted: earlier,
                    present: later,
                },
                "{earlier} after {later}"
            );
        }
    }
}

#[test]
fn test_rejected_call_leaves_selector_unchanged() {
    let mut selector = builder::element("div");
    let _ = selector.class_name("a").unwrap().pseudo_class("hover").unwrap();
    let before = selector.clone();

    assert!(selector.id("main").is_err());
    assert!(selector.element("span").is_err());
    assert!(selector.attr("href").is_err());

    assert_eq!(selector, before);
    assert_eq!(selector.stringify(), "div.a:hover");
}

#[test]
fn test_error_messages() {
    let duplicate = SelectorError::DuplicateKind {
        kind: FragmentKind::PseudoElement,
    };
    assert_eq!(
        duplicate.to_string(),
        "pseudo-element fragment is already set"
    );

    let order = SelectorError::Order {
        attempted: FragmentKind::Class,
        present: FragmentKind::Attribute,
    };
    assert_eq!(order.to_string(), "class fragment cannot follow attribute fragment");
}
