//! Labeled bounding boxes and image dimensions.

use serde::{Deserialize, Serialize};

/// Label used for board-corner marker boxes.
pub const CORNER_LABEL: &str = "corner";

/// Axis-aligned labeled box in pixel coordinates (top-left origin).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Class label: [`CORNER_LABEL`] or a piece symbol such as `"K"`.
    #[serde(rename = "type")]
    pub label: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Board square (e.g. `"e4"`), only known for boxes from real captures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl BoundingBox {
    pub fn new(label: impl Into<String>, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            label: label.into(),
            left,
            top,
            width,
            height,
            position: None,
        }
    }

    /// Square corner-marker box with the given top-left and side length.
    pub fn corner(left: f64, top: f64, size: f64) -> Self {
        Self::new(CORNER_LABEL, left, top, size, size)
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[inline]
    pub fn is_corner(&self) -> bool {
        self.label == CORNER_LABEL
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either side is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new(640, 640)
    }
}
