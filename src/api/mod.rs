//! Tooltip placement WASM API
//!
//! This module provides the JavaScript-facing API. Inputs arrive as loose
//! JS values, are decoded into the crate's typed records once, and the
//! results are handed back as plain JS objects.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, deserialization and error conversion
//! - `placement`: exported placement, geometry and lookup functions

pub mod helpers;
pub mod placement;

pub use placement::{
    adjust_tooltip, amend_rect, element_position, intersect_rects, opposite_direction,
    overflow_directions, placement_offset, resolve_names,
};
