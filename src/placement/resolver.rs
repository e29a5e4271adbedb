//! Screen position resolver

use crate::geometry::GeometryProvider;
use crate::models::Rect;

/// Absolute document-space rectangle of an element
///
/// Adds the current scroll offsets to the viewport-relative bounding box,
/// so every rectangle downstream shares one coordinate space regardless
/// of scroll position.
pub fn position<G: GeometryProvider + ?Sized>(geo: &G, element: &G::Element) -> Rect {
    let bbox = geo.bounding_box(element);
    let scroll = geo.scroll_offsets();
    let win_top = scroll.win_top();
    let win_left = scroll.win_left();

    Rect {
        top: bbox.top + win_top,
        left: bbox.left + win_left,
        right: bbox.right + win_left,
        bottom: bbox.bottom + win_top,
        width: bbox.width,
        height: bbox.height,
    }
}
