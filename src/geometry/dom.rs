//! Browser-backed geometry provider

use web_sys::{Element, Window};

use super::provider::{GeometryProvider, ScrollOffsets, ViewportSize};
use crate::models::Rect;

/// Reads live measurements from the DOM through web-sys
#[derive(Debug, Clone)]
pub struct DomGeometry {
    window: Window,
}

impl DomGeometry {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Provider for the global `window`, if there is one
    pub fn from_global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    fn root_element(&self) -> Option<Element> {
        self.window.document().and_then(|doc| doc.document_element())
    }
}

impl GeometryProvider for DomGeometry {
    type Element = Element;

    fn bounding_box(&self, element: &Element) -> Rect {
        let r = element.get_bounding_client_rect();
        Rect {
            top: r.top(),
            left: r.left(),
            right: r.right(),
            bottom: r.bottom(),
            width: r.width(),
            height: r.height(),
        }
    }

    fn scroll_offsets(&self) -> ScrollOffsets {
        let mut offsets = ScrollOffsets {
            page_offset_y: self.window.page_y_offset().ok(),
            page_offset_x: self.window.page_x_offset().ok(),
            ..ScrollOffsets::default()
        };
        match self.root_element() {
            Some(root) => {
                offsets.root_scroll_top = f64::from(root.scroll_top());
                offsets.root_client_top = f64::from(root.client_top());
                offsets.root_scroll_left = f64::from(root.scroll_left());
                offsets.root_client_left = f64::from(root.client_left());
            }
            None => log::warn!("No document element; root scroll offsets treated as 0"),
        }
        offsets
    }

    fn viewport_size(&self) -> ViewportSize {
        let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or_else(|| {
                log::warn!("Viewport size unavailable");
                f64::NAN
            })
        };
        ViewportSize {
            width: read(self.window.inner_width()),
            height: read(self.window.inner_height()),
        }
    }
}
