//! Common utilities for selkit.
//!
//! This crate provides shared infrastructure used by the selector crate and the CLI:
//! - **Warning System** - deduplicated colored terminal diagnostics
//! - **JSON** - generic structured-value stringify/parse passthroughs
//! - **Rect** - a plain rectangle value object with JSON round-tripping

pub mod json;
pub mod rect;
pub mod warning;

pub use json::JsonError;
pub use rect::Rect;
