//! Placement calculator

use crate::geometry::GeometryProvider;
use crate::models::{Direction, Offset, Px, Rect, GAP_PX};

use super::resolver::position;

/// Offset putting `tooltip` on the `direction` side of `origin`
pub fn placement<G: GeometryProvider + ?Sized>(
    geo: &G,
    direction: Direction,
    tooltip: &G::Element,
    origin: &G::Element,
) -> Offset {
    let tip = position(geo, tooltip);
    let pos = position(geo, origin);
    offset_for(direction, &tip, &pos)
}

/// Offset for already resolved tooltip and anchor rectangles
///
/// The tooltip is centered on the anchor along the cross axis and sits
/// `GAP_PX` away from it along the main axis.
pub fn offset_for(direction: Direction, tip: &Rect, pos: &Rect) -> Offset {
    let mut offset = Offset::sized(tip.width, tip.height);

    if direction.is_vertical() {
        offset.left = Some(Px(pos.left + pos.width / 2.0 - tip.width / 2.0));
    } else {
        offset.top = Some(Px(pos.top + pos.height / 2.0 - tip.height / 2.0));
    }

    match direction {
        Direction::Top => offset.top = Some(Px(pos.top - tip.height - GAP_PX)),
        Direction::Bottom => offset.top = Some(Px(pos.top + pos.height + GAP_PX)),
        Direction::Right => offset.left = Some(Px(pos.right + GAP_PX)),
        Direction::Left => offset.left = Some(Px(pos.left - tip.width - GAP_PX)),
    }

    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rect {
        Rect::new(100.0, 100.0, 50.0, 20.0)
    }

    fn tip() -> Rect {
        Rect::new(0.0, 0.0, 30.0, 10.0)
    }

    #[test]
    fn test_top() {
        let o = offset_for(Direction::Top, &tip(), &anchor());
        assert_eq!(o.left.unwrap().to_string(), "110px");
        assert_eq!(o.top.unwrap().to_string(), "78px");
    }

    #[test]
    fn test_bottom() {
        let o = offset_for(Direction::Bottom, &tip(), &anchor());
        assert_eq!(o.left, Some(Px(110.0)));
        assert_eq!(o.top, Some(Px(132.0)));
    }

    #[test]
    fn test_right() {
        let o = offset_for(Direction::Right, &tip(), &anchor());
        assert_eq!(o.left.unwrap().to_string(), "162px");
        assert_eq!(o.top.unwrap().to_string(), "105px");
    }

    #[test]
    fn test_left() {
        let o = offset_for(Direction::Left, &tip(), &anchor());
        assert_eq!(o.left, Some(Px(58.0)));
        assert_eq!(o.top, Some(Px(105.0)));
    }

    #[test]
    fn test_size_is_copied_from_tooltip() {
        let o = offset_for(Direction::Left, &tip(), &anchor());
        assert_eq!(o.width, Px(30.0));
        assert_eq!(o.height, Px(10.0));
    }

    #[test]
    fn test_missing_size_degrades_to_nan() {
        let o = offset_for(Direction::Top, &Rect::nan(), &anchor());
        assert_eq!(o.top.unwrap().to_string(), "NaNpx");
        assert_eq!(o.width.to_string(), "NaNpx");
    }
}
