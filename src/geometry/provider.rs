//! Geometry provider interface
//!
//! All live measurements (element boxes, scroll offsets, viewport size)
//! come through `GeometryProvider`. The placement code never touches
//! window or document state directly, so it runs the same against the DOM
//! and against synthetic layouts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Rect;

/// Source of live layout measurements
pub trait GeometryProvider {
    /// Handle used to identify an element
    type Element: ?Sized;

    /// Bounding box of an element, relative to the viewport
    fn bounding_box(&self, element: &Self::Element) -> Rect;

    /// Page and root element scroll offsets
    fn scroll_offsets(&self) -> ScrollOffsets;

    /// Size of the visible viewport
    fn viewport_size(&self) -> ViewportSize;
}

/// Scroll state of the page and its root element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOffsets {
    /// `window.pageYOffset`, when the window reports one
    pub page_offset_y: Option<f64>,
    /// `window.pageXOffset`, when the window reports one
    pub page_offset_x: Option<f64>,
    pub root_scroll_top: f64,
    pub root_client_top: f64,
    pub root_scroll_left: f64,
    pub root_client_left: f64,
}

impl ScrollOffsets {
    /// Vertical shift from viewport to document coordinates
    pub fn win_top(&self) -> f64 {
        page_or_root(self.page_offset_y, self.root_scroll_top) - self.root_client_top
    }

    /// Horizontal shift from viewport to document coordinates
    pub fn win_left(&self) -> f64 {
        page_or_root(self.page_offset_x, self.root_scroll_left) - self.root_client_left
    }
}

// A zero or missing page offset falls back to the root element's scroll.
fn page_or_root(page: Option<f64>, root: f64) -> f64 {
    match page {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => root,
    }
}

/// Visible viewport size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// In-memory geometry for headless use and tests
///
/// Elements are identified by string keys. Looking up an unknown key
/// yields an all-NaN box.
#[derive(Debug, Clone)]
pub struct SyntheticGeometry {
    boxes: HashMap<String, Rect>,
    scroll: ScrollOffsets,
    viewport: ViewportSize,
}

impl SyntheticGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            boxes: HashMap::new(),
            scroll: ScrollOffsets::default(),
            viewport: ViewportSize { width, height },
        }
    }

    /// Register an element with its viewport-relative box
    pub fn with_element(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.set_element(id, rect);
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollOffsets) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn set_element(&mut self, id: impl Into<String>, rect: Rect) {
        self.boxes.insert(id.into(), rect);
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = ViewportSize { width, height };
    }
}

impl GeometryProvider for SyntheticGeometry {
    type Element = str;

    fn bounding_box(&self, element: &str) -> Rect {
        match self.boxes.get(element) {
            Some(rect) => *rect,
            None => {
                log::warn!("No geometry registered for element '{}'", element);
                Rect::nan()
            }
        }
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        self.scroll
    }

    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }
}
