//! Data model for tooltip placement
//!
//! Rectangles in their raw, partial and complete forms, the four
//! directions a tooltip can attach on, and the records produced by a
//! placement decision.

pub mod direction;
pub mod offset;
pub mod options;
pub mod rect;

// Re-export commonly used types
pub use direction::{opposite, Direction, DirectionList, DirectionValue, PlaceSpec};
pub use offset::{Offset, PlacementResult, Px};
pub use options::{AdjustOptions, GAP_PX};
pub use rect::{Dimension, PartialRect, Rect, RectLike};
