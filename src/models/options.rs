//! Configuration records for placement calls

use serde::{Deserialize, Serialize};

/// Fixed clearance between tooltip and anchor along the main axis
pub const GAP_PX: f64 = 12.0;

/// Options for the adjustment engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustOptions {
    /// Split comma-separated strings and append the opposite of a lone
    /// direction as a fallback
    pub auto: bool,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self { auto: true }
    }
}
