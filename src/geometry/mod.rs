//! Rectangle geometry
//!
//! Normalizes raw rectangle input into numeric form and computes overlaps.
//! Every function returns a fresh value; inputs are never mutated.

pub mod dom;
pub mod provider;

pub use dom::DomGeometry;
pub use provider::{GeometryProvider, ScrollOffsets, SyntheticGeometry, ViewportSize};

use crate::models::{Dimension, PartialRect, Rect, RectLike};

/// Convert every dimension string to its leading number
///
/// Numbers pass through unchanged and missing fields stay missing.
pub fn strip(rect: &RectLike) -> PartialRect {
    let value = |d: &Option<Dimension>| d.as_ref().map(Dimension::value);
    PartialRect {
        top: value(&rect.top),
        left: value(&rect.left),
        right: value(&rect.right),
        bottom: value(&rect.bottom),
        width: value(&rect.width),
        height: value(&rect.height),
    }
}

/// Strip, then complete what can be derived
///
/// `top`/`left` default to 0. `right` and `bottom` are derived from
/// `left + width` and `top + height` when missing. Width and height are
/// never derived from the edges.
pub fn amend(rect: &RectLike) -> PartialRect {
    let mut r = strip(rect);
    let top = *r.top.get_or_insert(0.0);
    let left = *r.left.get_or_insert(0.0);
    if r.right.is_none() {
        r.right = r.width.map(|w| left + w);
    }
    if r.bottom.is_none() {
        r.bottom = r.height.map(|h| top + h);
    }
    r
}

/// Overlap of two rectangles
///
/// Width or height come out negative when the rectangles are disjoint;
/// callers decide what that means.
pub fn intersection(a: &Rect, b: &Rect) -> Rect {
    let top = nan_max(a.top, b.top);
    let left = nan_max(a.left, b.left);
    let right = nan_min(a.right, b.right);
    let bottom = nan_min(a.bottom, b.bottom);
    Rect {
        top,
        left,
        right,
        bottom,
        width: right - left,
        height: bottom - top,
    }
}

// f64::max drops a NaN operand; unknown geometry must stay unknown here.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}
