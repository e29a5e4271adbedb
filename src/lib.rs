//! Tooltip Placement WASM Module
//!
//! Computes where to draw a tooltip relative to its anchor element. A
//! preferred direction (or an ordered list of them) is tried in turn; the
//! first whose offset stays inside the viewport wins, otherwise the first
//! preference is kept.
//!
//! Live measurements come from a `GeometryProvider`: `DomGeometry` in the
//! browser, `SyntheticGeometry` for headless use and tests.

pub mod api;
pub mod error;
pub mod geometry;
pub mod models;
pub mod names;
pub mod placement;
pub mod utils;

// Re-export commonly used types
pub use error::{PlacementError, Result};
pub use geometry::{amend, intersection, strip, GeometryProvider, SyntheticGeometry};
pub use models::*;
pub use names::{resolve, NameSource};
pub use placement::{adjust, over_dirs, placement, position};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
    }

    log::info!("Tooltip placement WASM module initialized");
}
