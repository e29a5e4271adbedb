//! Adjustment engine
//!
//! Walks the candidate directions in order and returns the first whose
//! offset stays inside the viewport. When every candidate overflows, the
//! caller's first preference wins over any later one.

use crate::error::{PlacementError, Result};
use crate::geometry::GeometryProvider;
use crate::models::{AdjustOptions, PlaceSpec, PlacementResult, RectLike};

use super::calculator::placement;
use super::overflow::over_dirs;

/// Choose a direction for `tooltip` around `origin` and compute its offset
///
/// Fails with `EmptyDirectionList` when there is nothing to try, which
/// only happens for an empty list (a lone direction always gains its
/// opposite when `auto` is on, and is still one candidate when it is off).
pub fn adjust<G: GeometryProvider + ?Sized>(
    geo: &G,
    place: &PlaceSpec,
    tooltip: &G::Element,
    origin: &G::Element,
    options: &AdjustOptions,
) -> Result<PlacementResult> {
    let candidates = place.candidates(options.auto);
    let mut first: Option<PlacementResult> = None;

    for direction in candidates {
        let result = PlacementResult {
            offset: placement(geo, direction, tooltip, origin),
            place: direction,
        };
        if first.is_none() {
            first = Some(result);
        }

        let edges = over_dirs(geo, &RectLike::from(&result.offset), None);
        log::debug!("Candidate '{}' overflows {:?}", direction, edges);
        if edges.is_empty() {
            log::debug!("Placing tooltip on '{}'", direction);
            return Ok(result);
        }
    }

    let first = first.ok_or(PlacementError::EmptyDirectionList)?;
    log::warn!(
        "Every candidate overflows; falling back to '{}'",
        first.place
    );
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SyntheticGeometry;
    use crate::models::{Direction, Px, Rect};

    fn geo(anchor: Rect) -> SyntheticGeometry {
        SyntheticGeometry::new(1000.0, 1000.0)
            .with_element("tip", Rect::new(0.0, 0.0, 30.0, 10.0))
            .with_element("anchor", anchor)
    }

    #[test]
    fn test_preferred_direction_fits() {
        let geo = geo(Rect::new(100.0, 100.0, 50.0, 20.0));
        let result = adjust(
            &geo,
            &PlaceSpec::Single(Direction::Top),
            "tip",
            "anchor",
            &AdjustOptions::default(),
        )
        .unwrap();
        assert_eq!(result.place, Direction::Top);
        assert_eq!(result.offset.top, Some(Px(78.0)));
        assert_eq!(result.offset.left, Some(Px(110.0)));
    }

    #[test]
    fn test_falls_back_to_opposite() {
        let geo = geo(Rect::new(5.0, 100.0, 50.0, 20.0));
        let result = adjust(
            &geo,
            &PlaceSpec::Single(Direction::Top),
            "tip",
            "anchor",
            &AdjustOptions::default(),
        )
        .unwrap();
        assert_eq!(result.place, Direction::Bottom);
        assert_eq!(result.offset.top, Some(Px(37.0)));
    }

    #[test]
    fn test_exhausted_returns_first() {
        // Anchor in the top-left corner: neither top nor left can fit.
        let geo = geo(Rect::new(0.0, 0.0, 10.0, 10.0));
        let spec: PlaceSpec = "top,left".parse().unwrap();
        let result = adjust(&geo, &spec, "tip", "anchor", &AdjustOptions::default()).unwrap();
        assert_eq!(result.place, Direction::Top);
        assert_eq!(result.offset.top, Some(Px(-22.0)));
    }

    #[test]
    fn test_later_candidate_used_when_earlier_overflow() {
        let geo = geo(Rect::new(0.0, 0.0, 10.0, 10.0));
        let spec = PlaceSpec::List(vec![Direction::Top, Direction::Left, Direction::Right]);
        let result = adjust(&geo, &spec, "tip", "anchor", &AdjustOptions::default()).unwrap();
        assert_eq!(result.place, Direction::Right);
    }

    #[test]
    fn test_no_auto_keeps_single_candidate() {
        let geo = geo(Rect::new(5.0, 100.0, 50.0, 20.0));
        let result = adjust(
            &geo,
            &PlaceSpec::Single(Direction::Top),
            "tip",
            "anchor",
            &AdjustOptions { auto: false },
        )
        .unwrap();
        assert_eq!(result.place, Direction::Top);
    }

    #[test]
    fn test_empty_list_fails() {
        let geo = geo(Rect::new(100.0, 100.0, 50.0, 20.0));
        let result = adjust(
            &geo,
            &PlaceSpec::List(vec![]),
            "tip",
            "anchor",
            &AdjustOptions { auto: false },
        );
        assert_eq!(result, Err(PlacementError::EmptyDirectionList));
    }
}
