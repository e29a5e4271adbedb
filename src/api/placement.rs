//! Exported placement functions
//!
//! Geometry is read from the global `window` on every call; nothing is
//! cached between calls.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::helpers::{deserialize, deserialize_or_default, js_error, serialize};
use crate::geometry::{amend, intersection, DomGeometry};
use crate::models::{opposite, AdjustOptions, Direction, DirectionValue, PlaceSpec, RectLike};
use crate::names::{resolve, NameSource};
use crate::placement::{adjust, over_dirs, placement, position};

fn dom() -> Result<DomGeometry, JsValue> {
    DomGeometry::from_global().ok_or_else(|| {
        log::error!("No global window available");
        JsValue::from_str("No global window available")
    })
}

/// Place a tooltip around its anchor, falling back when it would overflow
///
/// `place` is a direction, a comma-separated string or a list of
/// directions. `options` may be omitted (`{auto: true}`).
#[wasm_bindgen(js_name = adjust)]
pub fn adjust_tooltip(
    place: JsValue,
    tooltip: &Element,
    origin: &Element,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options: AdjustOptions = deserialize_or_default(options, "adjust options")?;
    let value: DirectionValue = deserialize(place, "direction")?;
    let spec = PlaceSpec::from_value(&value, options.auto).map_err(js_error)?;

    let geo = dom()?;
    let result = adjust(&geo, &spec, tooltip, origin, &options).map_err(js_error)?;
    serialize(&result, "placement result")
}

/// Opposite of a direction (or of the first entry of a list)
#[wasm_bindgen(js_name = opposite)]
pub fn opposite_direction(direction: JsValue) -> Result<String, JsValue> {
    let value: DirectionValue = deserialize(direction, "direction")?;
    opposite(&value)
        .map(|d| d.as_str().to_string())
        .map_err(js_error)
}

/// Tooltip names addressed by an event source
#[wasm_bindgen(js_name = resolve)]
pub fn resolve_names(source: JsValue) -> Result<js_sys::Array, JsValue> {
    let source: NameSource = deserialize_or_default(source, "name source")?;
    Ok(resolve(&source)
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect())
}

/// Document-space rectangle of an element
#[wasm_bindgen(js_name = position)]
pub fn element_position(element: &Element) -> Result<JsValue, JsValue> {
    let geo = dom()?;
    serialize(&position(&geo, element), "position")
}

/// Offset for one direction, without any fallback
#[wasm_bindgen(js_name = placement)]
pub fn placement_offset(
    direction: &str,
    tooltip: &Element,
    origin: &Element,
) -> Result<JsValue, JsValue> {
    let direction: Direction = direction.parse().map_err(js_error)?;
    let geo = dom()?;
    serialize(&placement(&geo, direction, tooltip, origin), "offset")
}

/// Edges of the viewport (or of its overlap with `boundary`) that an offset crosses
#[wasm_bindgen(js_name = overDirs)]
pub fn overflow_directions(offset: JsValue, boundary: Option<Element>) -> Result<JsValue, JsValue> {
    let offset: RectLike = deserialize(offset, "offset")?;
    let geo = dom()?;
    serialize(&over_dirs(&geo, &offset, boundary.as_ref()), "overflow directions")
}

/// Complete a rectangle-like value: numeric fields, origin defaults, derived edges
#[wasm_bindgen(js_name = amend)]
pub fn amend_rect(rect: JsValue) -> Result<JsValue, JsValue> {
    let rect: RectLike = deserialize(rect, "rectangle")?;
    serialize(&amend(&rect), "amended rectangle")
}

/// Overlap of two rectangles; negative width or height means disjoint
#[wasm_bindgen(js_name = intersection)]
pub fn intersect_rects(a: JsValue, b: JsValue) -> Result<JsValue, JsValue> {
    let a = amend(&deserialize::<RectLike>(a, "first rectangle")?).to_rect();
    let b = amend(&deserialize::<RectLike>(b, "second rectangle")?).to_rect();
    serialize(&intersection(&a, &b), "intersection")
}
