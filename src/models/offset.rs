//! Placement output: the offset applied to a tooltip and the direction used

use serde::{Serialize, Serializer};
use std::fmt;

use super::direction::Direction;
use super::rect::RectLike;
use crate::utils::format_px;

/// A pixel value, serialized as a style string (`"105px"`)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Px(pub f64);

impl Px {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_px(self.0))
    }
}

impl Serialize for Px {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Position style for a tooltip
///
/// Always carries the tooltip's own size. `top` and `left` are set by the
/// placement calculator; one comes from the cross-axis centering and the
/// other from the main-axis placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    pub width: Px,
    pub height: Px,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Px>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Px>,
}

impl Offset {
    /// An offset seeded with the tooltip size and no position yet
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width: Px(width),
            height: Px(height),
            top: None,
            left: None,
        }
    }
}

impl From<&Offset> for RectLike {
    fn from(offset: &Offset) -> Self {
        Self {
            top: offset.top.map(|px| px.value().into()),
            left: offset.left.map(|px| px.value().into()),
            width: Some(offset.width.value().into()),
            height: Some(offset.height.value().into()),
            ..RectLike::default()
        }
    }
}

/// The outcome of a placement decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementResult {
    pub offset: Offset,
    pub place: Direction,
}
