use std::fmt;

use serde::Serialize;

use crate::{Combinator, SelectorNode, Stringify};

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Either side may itself be
/// combined, forming a binary tree of any depth. The tree is fixed once
/// built; both children are owned by it.
///
/// Renders as `left + " " + combinator + " " + right`. The combinator is
/// always padded by one space on each side, so the descendant combinator
/// (itself a space) renders as three spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedSelector {
    left: SelectorNode,
    combinator: Combinator,
    right: SelectorNode,
}

impl CombinedSelector {
    /// Join two selectors. The combinator is not validated; any symbol is
    /// rendered as given. See [`Combinator::is_canonical`].
    #[must_use]
    pub fn new(
        left: impl Into<SelectorNode>,
        combinator: impl Into<Combinator>,
        right: impl Into<SelectorNode>,
    ) -> Self {
        Self {
            left: left.into(),
            combinator: combinator.into(),
            right: right.into(),
        }
    }

    /// The selector before the combinator.
    #[must_use]
    pub const fn left(&self) -> &SelectorNode {
        &self.left
    }

    /// The combinator joining the two sides.
    #[must_use]
    pub const fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// The selector after the combinator.
    #[must_use]
    pub const fn right(&self) -> &SelectorNode {
        &self.right
    }

    /// Number of combinators on the deepest path through this tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.left.depth().max(self.right.depth())
    }

    /// Split the tree back into its owned parts.
    #[must_use]
    pub fn into_parts(self) -> (SelectorNode, Combinator, SelectorNode) {
        (self.left, self.combinator, self.right)
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

impl Stringify for CombinedSelector {}
