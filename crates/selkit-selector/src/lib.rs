//! Typed construction of CSS selectors.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element fragments
//!   - Enforcement of the canonical fragment order
//!     (element → id → class → attribute → pseudo-class → pseudo-element)
//!
//! - **Combined selectors** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling combinators
//!   - Arbitrarily nested left/right trees
//!
//! - **Serialization** to the canonical selector text and to JSON
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity
//!
//! # Example
//!
//! ```
//! use selkit_selector::{Stringify, builder};
//!
//! let mut link = builder::element("a");
//! link.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let list = builder::combine(builder::element("ul"), ">", link);
//! assert_eq!(list.stringify(), r#"ul > a[href$=".png"]:focus"#);
//! # Ok::<(), selkit_selector::SelectorError>(())
//! ```

/// Stateless factory functions that start every selector.
pub mod builder;
/// Combinator symbols joining two selectors.
pub mod combinator;
/// Two selectors joined by a combinator.
pub mod combined;
/// Errors raised while adding fragments.
pub mod error;
/// The six fragment categories and their fixed order.
pub mod kind;
/// Owned selector nodes and the rendering trait they share.
pub mod node;
/// A single compound selector.
pub mod simple;

// Re-exports for convenience
pub use combinator::Combinator;
pub use combined::CombinedSelector;
pub use error::SelectorError;
pub use kind::FragmentKind;
pub use node::{SelectorNode, Stringify};
pub use simple::SimpleSelector;
