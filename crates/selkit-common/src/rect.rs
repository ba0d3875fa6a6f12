//! Rectangle value object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::{self, JsonError};

/// An axis-aligned rectangle.
///
/// All fields are required when decoding; unknown fields are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f64,
    /// Vertical position of the top-left corner.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle by copying the named fields out of a plain JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Parse`] if `value` is not an object or lacks one
    /// of `x`, `y`, `width`, `height` as a number.
    pub fn from_value(value: Value) -> Result<Self, JsonError> {
        serde_json::from_value(value).map_err(JsonError::Parse)
    }

    /// Decode a rectangle from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::Parse`] if the text is not a rectangle object.
    pub fn from_json(text: &str) -> Result<Self, JsonError> {
        json::parse(text)
    }

    /// Encode this rectangle as compact JSON text.
    ///
    /// # Errors
    ///
    /// Propagates [`JsonError::Serialize`] from the codec. Non-finite
    /// fields encode as `null` and will not decode again.
    pub fn to_json(&self) -> Result<String, JsonError> {
        json::stringify(self)
    }

    /// Area covered by the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}
