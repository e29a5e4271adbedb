//! Utility modules for tooltip placement
//!
//! This module contains small parsing helpers shared by the geometry
//! and API layers.

pub mod dimension;

// Re-export commonly used functions
pub use dimension::*;
