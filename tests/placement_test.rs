// End-to-end placement against synthetic page layouts

use tooltip_wasm::geometry::ScrollOffsets;
use tooltip_wasm::{
    adjust, opposite, over_dirs, placement, resolve, AdjustOptions, Direction, DirectionValue,
    NameSource, PlaceSpec, PlacementError, PlacementResult, Px, Rect, RectLike,
    SyntheticGeometry,
};

fn page(anchor: Rect) -> SyntheticGeometry {
    SyntheticGeometry::new(1000.0, 1000.0)
        .with_element("tooltip", Rect::new(0.0, 0.0, 30.0, 10.0))
        .with_element("anchor", anchor)
}

fn place(spec: &str, geo: &SyntheticGeometry) -> tooltip_wasm::Result<PlacementResult> {
    let options = AdjustOptions::default();
    let value = DirectionValue::from(spec);
    let spec = PlaceSpec::from_value(&value, options.auto)?;
    adjust(geo, &spec, "tooltip", "anchor", &options)
}

#[test]
fn test_top_placement_offsets() {
    let geo = page(Rect::new(100.0, 100.0, 50.0, 20.0));
    let offset = placement(&geo, Direction::Top, "tooltip", "anchor");
    assert_eq!(offset.left.unwrap().to_string(), "110px");
    assert_eq!(offset.top.unwrap().to_string(), "78px");
    assert_eq!(offset.width.to_string(), "30px");
    assert_eq!(offset.height.to_string(), "10px");
}

#[test]
fn test_right_placement_offsets() {
    let geo = page(Rect::new(100.0, 100.0, 50.0, 20.0));
    let offset = placement(&geo, Direction::Right, "tooltip", "anchor");
    assert_eq!(offset.left.unwrap().to_string(), "162px");
    assert_eq!(offset.top.unwrap().to_string(), "105px");
}

#[test]
fn test_top_overflow_falls_back_to_bottom() {
    let geo = page(Rect::new(4.0, 100.0, 50.0, 20.0));
    let result = place("top", &geo).expect("placement should succeed");

    assert_eq!(result.place, Direction::Bottom);
    assert_eq!(
        result.offset,
        placement(&geo, Direction::Bottom, "tooltip", "anchor")
    );
}

#[test]
fn test_all_candidates_overflow_keeps_first() {
    let geo = page(Rect::new(0.0, 0.0, 10.0, 10.0));
    let result = place("top,left", &geo).expect("placement should succeed");

    assert_eq!(result.place, Direction::Top);
    assert_eq!(
        result.offset,
        placement(&geo, Direction::Top, "tooltip", "anchor")
    );
}

#[test]
fn test_scrolled_page_still_fits() {
    // Offsets are in document space, so the page scroll shifts them down.
    let geo = page(Rect::new(5.0, 100.0, 50.0, 20.0)).with_scroll(ScrollOffsets {
        page_offset_y: Some(400.0),
        ..ScrollOffsets::default()
    });
    let result = place("bottom", &geo).expect("placement should succeed");
    assert_eq!(result.place, Direction::Bottom);
    assert_eq!(result.offset.top, Some(Px(437.0)));
}

#[test]
fn test_right_edge_falls_back_to_left() {
    let geo = page(Rect::new(500.0, 960.0, 30.0, 20.0));
    let result = place("right", &geo).expect("placement should succeed");
    assert_eq!(result.place, Direction::Left);
    assert_eq!(result.offset.left, Some(Px(918.0)));
    assert_eq!(result.offset.top, Some(Px(505.0)));
}

#[test]
fn test_unknown_direction_is_rejected() {
    let geo = page(Rect::new(100.0, 100.0, 50.0, 20.0));
    assert_eq!(
        place("top,diagonal", &geo),
        Err(PlacementError::InvalidDirection("diagonal".to_string()))
    );
}

#[test]
fn test_opposite_round_trip() {
    for d in Direction::ALL {
        let once = opposite(&DirectionValue::from(d.as_str())).unwrap();
        let twice = opposite(&DirectionValue::from(once.as_str())).unwrap();
        assert_eq!(twice, d);
    }
}

#[test]
fn test_overflow_against_container() {
    let geo = page(Rect::new(100.0, 100.0, 50.0, 20.0))
        .with_element("container", Rect::new(0.0, 0.0, 500.0, 120.0));
    let offset = placement(&geo, Direction::Bottom, "tooltip", "anchor");
    let offset = RectLike::from(&offset);

    assert!(over_dirs(&geo, &offset, None).is_empty());
    assert_eq!(
        over_dirs(&geo, &offset, Some("container")),
        vec![Direction::Bottom]
    );
}

#[test]
fn test_resolve_names() {
    let source: NameSource = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
    assert_eq!(resolve(&source), vec!["x"]);

    let source: NameSource =
        serde_json::from_str(r#"{"payload": {"name": ["a", "b"]}}"#).unwrap();
    assert_eq!(resolve(&source), vec!["a", "b"]);

    assert_eq!(resolve(&NameSource::default()), vec!["default"]);
}
