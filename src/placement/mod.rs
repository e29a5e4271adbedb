//! Tooltip placement
//!
//! # Module Structure
//!
//! - `resolver`: element box plus scroll offsets to a document-space rectangle
//! - `calculator`: offset for one direction (centered cross axis, gap on main axis)
//! - `overflow`: which boundary edges a candidate offset crosses
//! - `engine`: tries candidates in order and keeps the first that fits

pub mod calculator;
pub mod engine;
pub mod overflow;
pub mod resolver;

pub use calculator::{offset_for, placement};
pub use engine::adjust;
pub use overflow::{over_dirs, overflow_edges};
pub use resolver::position;
