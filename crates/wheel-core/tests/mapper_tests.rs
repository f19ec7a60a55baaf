use wheel_core::WheelGeometry;

#[test]
fn padding_lets_first_and_last_item_center() {
    let g = WheelGeometry::new(60.0, 240.0);
    assert_eq!(g.padding(), 90.0);

    // First item centered at scroll 0.
    let s0 = g.scroll_offset_for(0.0);
    assert!(s0.abs() < 1e-9);

    // Last item of a 10-item wheel still reachable.
    let s9 = g.scroll_offset_for(9.0);
    assert_eq!(g.nearest_index(s9, 10), 9);
}

#[test]
fn padding_is_never_negative() {
    // Viewport smaller than one item.
    let g = WheelGeometry::new(60.0, 40.0);
    assert_eq!(g.padding(), 0.0);
}

#[test]
fn index_offset_round_trip() {
    for &(h, vh) in &[(60.0, 240.0), (48.0, 180.0), (33.5, 200.0), (60.0, 60.0)] {
        let g = WheelGeometry::new(h, vh);
        for i in 0..30usize {
            let s = g.scroll_offset_for(i as f64);
            assert_eq!(g.nearest_index(s, 30), i, "h={} vh={} i={}", h, vh, i);
        }
    }
}

#[test]
fn fractional_index_is_inverse_of_offset() {
    let g = WheelGeometry::new(60.0, 240.0);
    for tenths in 0..95 {
        let idx = tenths as f64 / 10.0;
        let s = g.scroll_offset_for(idx);
        assert!((g.fractional_index(s) - idx).abs() < 1e-9);
    }
}

#[test]
fn nearest_index_clamps_to_valid_range() {
    let g = WheelGeometry::new(60.0, 240.0);
    assert_eq!(g.nearest_index(-5000.0, 10), 0);
    assert_eq!(g.nearest_index(5000.0, 10), 9);
    assert_eq!(g.nearest_index(0.0, 0), 0);
}

#[test]
fn degenerate_measurements_fall_back_to_defaults() {
    for g in [
        WheelGeometry::new(0.0, 240.0),
        WheelGeometry::new(-3.0, 240.0),
        WheelGeometry::new(f64::NAN, f64::NAN),
    ] {
        assert!(g.item_height() > 0.0);
        assert!(g.viewport_height() > 0.0);
        assert!(g.fractional_index(100.0).is_finite());
    }
}

#[test]
fn resize_recenters_on_same_index() {
    // The same logical index maps to a sane offset under both geometries.
    let before = WheelGeometry::new(60.0, 240.0);
    let after = WheelGeometry::new(48.0, 180.0);
    let idx = 7usize;
    let s = after.scroll_offset_for(idx as f64);
    assert_eq!(after.nearest_index(s, 10), idx);
    assert_ne!(before.scroll_offset_for(idx as f64), s);
}
