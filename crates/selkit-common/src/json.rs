//! Structured-value text codec.
//!
//! Thin passthroughs over `serde_json` so callers share one error type.
//! Object key order is whatever the value's `Serialize` impl produces;
//! sequences keep their order.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to convert between a value and its JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be rendered as JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text is not valid JSON, or does not have the expected shape.
    #[error("failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Serialize a value to compact JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value's `Serialize` impl fails
/// (for example a map with non-string keys).
pub fn stringify<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize a value to indented JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] under the same conditions as [`stringify`].
pub fn stringify_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Parse JSON text into a value.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] if the text is malformed or does not match `T`.
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Parse)
}
