//! Error types for tooltip placement
//!
//! Malformed geometry is deliberately absent here: missing or unparseable
//! measurements degrade to NaN instead of failing.

use thiserror::Error;

/// Errors raised while resolving or placing a tooltip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Unrecognized direction name, or an empty direction list
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    /// Adjustment was requested with no candidate directions
    #[error("No candidate directions to try (empty direction list with auto disabled)")]
    EmptyDirectionList,

    /// A JS value could not be decoded into the expected record
    #[error("Failed to deserialize {0}")]
    Deserialize(String),
}

pub type Result<T> = std::result::Result<T, PlacementError>;
