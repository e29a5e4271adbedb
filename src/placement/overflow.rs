//! Overflow detector

use crate::geometry::{amend, intersection, GeometryProvider};
use crate::models::{Direction, PartialRect, Rect, RectLike};

use super::resolver::position;

/// Boundary edges a tooltip offset crosses
///
/// The boundary is the viewport, intersected with `boundary`'s document
/// position when an element is given.
pub fn over_dirs<G: GeometryProvider + ?Sized>(
    geo: &G,
    offset: &RectLike,
    boundary: Option<&G::Element>,
) -> Vec<Direction> {
    let tip = amend(offset);
    let viewport = geo.viewport_size();
    let mut area = amend(&RectLike::sized(viewport.width, viewport.height)).to_rect();
    if let Some(element) = boundary {
        area = intersection(&area, &position(geo, element));
    }
    overflow_edges(&tip, &area)
}

/// Edges of `area` that `tip` extends past, in top/right/bottom/left order
///
/// Edges are checked independently, so a tooltip taller than the area
/// reports both top and bottom. Missing or NaN measurements never count
/// as overflow.
pub fn overflow_edges(tip: &PartialRect, area: &Rect) -> Vec<Direction> {
    let mut edges = Vec::new();
    if lt(tip.top, area.top) {
        edges.push(Direction::Top);
    }
    if gt(tip.right, area.right) {
        edges.push(Direction::Right);
    }
    if gt(tip.bottom, area.bottom) {
        edges.push(Direction::Bottom);
    }
    if lt(tip.left, area.left) {
        edges.push(Direction::Left);
    }
    edges
}

fn lt(value: Option<f64>, limit: f64) -> bool {
    matches!(value, Some(v) if v < limit)
}

fn gt(value: Option<f64>, limit: f64) -> bool {
    matches!(value, Some(v) if v > limit)
}
