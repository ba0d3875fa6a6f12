use thiserror::Error;

use crate::FragmentKind;

/// Why a fragment was rejected.
///
/// Both variants indicate a construction mistake by the caller. A rejected
/// call never modifies the selector it was made on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton slot (element, id, pseudo-element) already holds a value.
    #[error("{kind} fragment is already set")]
    DuplicateKind {
        /// The slot that was already filled.
        kind: FragmentKind,
    },

    /// The fragment belongs before a category that is already present.
    #[error("{attempted} fragment cannot follow {present} fragment")]
    Order {
        /// The category that was being added.
        attempted: FragmentKind,
        /// The latest category already present in the selector.
        present: FragmentKind,
    },
}

impl SelectorError {
    /// The category of the rejected fragment.
    #[must_use]
    pub const fn kind(self) -> FragmentKind {
        match self {
            Self::DuplicateKind { kind } => kind,
            Self::Order { attempted, .. } => attempted,
        }
    }
}
