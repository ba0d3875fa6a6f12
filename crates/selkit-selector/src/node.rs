use std::fmt;

use serde::Serialize;

use crate::{CombinedSelector, SimpleSelector};

/// Rendering of a selector to its canonical text.
///
/// Rendering is pure: it can be repeated any number of times and always
/// produces the same string. The text is the type's `Display` output.
pub trait Stringify: fmt::Display {
    /// Render the selector as selector text.
    fn stringify(&self) -> String {
        self.to_string()
    }
}

/// An owned selector of either kind.
///
/// This is what a [`CombinedSelector`] holds on each side, so trees can nest
/// to any depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectorNode {
    /// A compound selector with no combinator.
    Simple(SimpleSelector),
    /// Two selectors joined by a combinator.
    Combined(Box<CombinedSelector>),
}

impl SelectorNode {
    /// Whether this node is a compound selector with no combinator.
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    /// Number of combinators on the deepest path through this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Simple(_) => 0,
            Self::Combined(combined) => combined.depth(),
        }
    }
}

impl From<SimpleSelector> for SelectorNode {
    fn from(selector: SimpleSelector) -> Self {
        Self::Simple(selector)
    }
}

impl From<CombinedSelector> for SelectorNode {
    fn from(selector: CombinedSelector) -> Self {
        Self::Combined(Box::new(selector))
    }
}

impl fmt::Display for SelectorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(selector) => fmt::Display::fmt(selector, f),
            Self::Combined(selector) => fmt::Display::fmt(selector, f),
        }
    }
}

impl Stringify for SelectorNode {}
