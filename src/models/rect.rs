//! Rectangle shapes
//!
//! Three forms flow through the crate:
//! - `RectLike`: raw input, any field may be missing or a dimension string
//! - `PartialRect`: numeric, any field may still be missing
//! - `Rect`: every field present, in document space

use serde::{Deserialize, Serialize};

use crate::utils::parse_dimension;

/// A complete rectangle in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and size, deriving right and bottom
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// A rectangle whose every measurement is unknown
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// Check if the rectangle covers no area (negative extents included)
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A numeric rectangle with possibly missing fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialRect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PartialRect {
    /// Fill every missing field with NaN
    pub fn to_rect(&self) -> Rect {
        let nan = f64::NAN;
        Rect {
            top: self.top.unwrap_or(nan),
            left: self.left.unwrap_or(nan),
            right: self.right.unwrap_or(nan),
            bottom: self.bottom.unwrap_or(nan),
            width: self.width.unwrap_or(nan),
            height: self.height.unwrap_or(nan),
        }
    }
}

impl From<Rect> for PartialRect {
    fn from(rect: Rect) -> Self {
        Self {
            top: Some(rect.top),
            left: Some(rect.left),
            right: Some(rect.right),
            bottom: Some(rect.bottom),
            width: Some(rect.width),
            height: Some(rect.height),
        }
    }
}

/// A single raw measurement: either a number or a string such as `"12px"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f64),
    Text(String),
}

impl Dimension {
    /// Numeric value, parsing the leading number of a text dimension
    pub fn value(&self) -> f64 {
        match self {
            Dimension::Number(n) => *n,
            Dimension::Text(s) => parse_dimension(s),
        }
    }
}

impl From<f64> for Dimension {
    fn from(n: f64) -> Self {
        Dimension::Number(n)
    }
}

impl From<&str> for Dimension {
    fn from(s: &str) -> Self {
        Dimension::Text(s.to_string())
    }
}

/// Raw rectangle-like input, as received from configuration or style shorthand
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectLike {
    pub top: Option<Dimension>,
    pub left: Option<Dimension>,
    pub right: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

impl RectLike {
    /// A rectangle known only by its size
    pub fn sized(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Self {
            width: Some(width.into()),
            height: Some(height.into()),
            ..Self::default()
        }
    }
}

impl From<Rect> for RectLike {
    fn from(rect: Rect) -> Self {
        Self {
            top: Some(rect.top.into()),
            left: Some(rect.left.into()),
            right: Some(rect.right.into()),
            bottom: Some(rect.bottom.into()),
            width: Some(rect.width.into()),
            height: Some(rect.height.into()),
        }
    }
}
