//! Every function here returns a fresh, independently owned node; nothing
//! is shared between calls.
//!
//! ```
//! use selkit_selector::{Stringify, builder};
//!
//! let selector = builder::combine(builder::element("div"), '+', builder::element("table"));
//! assert_eq!(selector.stringify(), "div + table");
//! ```

use crate::{Combinator, CombinedSelector, FragmentKind, SelectorNode, SimpleSelector};

/// Start a selector with an element (type) name.
#[must_use]
pub fn element(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::with_fragment(FragmentKind::Element, value)
}

/// Start a selector with an id.
#[must_use]
pub fn id(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::with_fragment(FragmentKind::Id, value)
}

/// Start a selector with a class name.
#[must_use]
pub fn class(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::with_fragment(FragmentKind::Class, value)
}

/// Start a selector with an attribute condition.
#[must_use]
pub fn attr(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::with_fragment(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class.
#[must_use]
pub fn pseudo_class(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::with_fragment(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> SimpleSelector {
    SimpleSelector::with_fragment(FragmentKind::PseudoElement, value)
}

/// Join two selectors with a combinator. Ownership of both moves into the
/// returned tree.
#[must_use]
pub fn combine(
    selector1: impl Into<SelectorNode>,
    combinator: impl Into<Combinator>,
    selector2: impl Into<SelectorNode>,
) -> CombinedSelector {
    CombinedSelector::new(selector1, combinator, selector2)
}
