// File: crates/indicator-core/tests/segment.rs
// Purpose: Validate the value/offset to pixel mapping of the filled segment.

use indicator_core::{segment, IndicatorState, Orientation, Segment};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn state(min: i32, max: i32, value: i32, offset: i32) -> IndicatorState {
    IndicatorState::default().with_range(min, max).with_value(value).with_offset(offset)
}

#[test]
fn default_state_fills_half_the_track() {
    let seg = segment(&IndicatorState::default(), 300.0);
    assert!(approx(seg.start, 0.0), "start = {}", seg.start);
    assert!(approx(seg.size, 150.0), "size = {}", seg.size);
    assert!(seg.is_visible());
}

#[test]
fn offset_above_value_spans_the_interval() {
    let seg = segment(&state(0, 100, 30, 70), 300.0);
    assert!(approx(seg.start, 90.0), "start = {}", seg.start);
    assert!(approx(seg.size, 120.0), "size = {}", seg.size);
}

#[test]
fn value_equal_to_offset_is_empty() {
    for v in [-20, 0, 13, 50, 100, 250] {
        let seg = segment(&state(0, 100, v, v), 300.0);
        assert_eq!(seg.size, 0.0);
        assert!(!seg.is_visible());
    }
}

#[test]
fn swapping_value_and_offset_is_symmetric() {
    for (a, b) in [(10, 90), (0, 100), (-5, 40), (75, 20), (33, 34)] {
        let s1 = segment(&state(0, 100, a, b), 317.0);
        let s2 = segment(&state(0, 100, b, a), 317.0);
        assert_eq!(s1, s2, "value={a} offset={b}");
    }
}

#[test]
fn in_range_segment_stays_inside_track() {
    let extent = 300.0;
    for value in (1..100).step_by(7) {
        for offset in (1..100).step_by(11) {
            let seg = segment(&state(0, 100, value, offset), extent);
            assert!(seg.start >= 0.0);
            assert!(seg.end() <= extent + 1e-3, "value={value} offset={offset} end={}", seg.end());
        }
    }
}

#[test]
fn shifted_range_maps_from_min() {
    // 150 in [100, 200] is halfway.
    let seg = segment(&state(100, 200, 150, 100), 200.0);
    assert!(approx(seg.start, 0.0));
    assert!(approx(seg.size, 100.0));
}

#[test]
fn zero_range_yields_empty_segment() {
    let seg = segment(&state(40, 40, 90, 0), 300.0);
    assert_eq!(seg, Segment::EMPTY);
}

#[test]
fn out_of_range_value_is_not_clamped() {
    let seg = segment(&state(0, 100, 150, 0), 300.0);
    assert!(approx(seg.size, 450.0));
    let seg = segment(&state(0, 100, 50, -50), 300.0);
    assert!(approx(seg.start, -150.0));
    assert!(approx(seg.size, 300.0));
}

#[test]
fn extreme_bounds_do_not_overflow() {
    let seg = segment(&state(i32::MIN, i32::MAX, i32::MAX, i32::MIN), 100.0);
    assert!(approx(seg.start, 0.0));
    assert!(approx(seg.size, 100.0));
}

#[test]
fn noise_threshold_hides_tiny_fills() {
    // One unit over a 10_000 range on a 300px track is 0.03px.
    let seg = segment(&state(0, 10_000, 1, 0), 300.0);
    assert!(seg.size > 0.0);
    assert!(!seg.is_visible());
}

#[test]
fn axis_extent_follows_orientation() {
    assert_eq!(Orientation::Horizontal.axis_extent(300, 50), 300);
    assert_eq!(Orientation::Vertical.axis_extent(300, 50), 50);
}
