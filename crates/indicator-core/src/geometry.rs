// File: crates/indicator-core/src/geometry.rs
// Summary: Range-to-pixel mapping for the filled segment and stroke placement helpers.

use skia_safe as skia;

use crate::state::IndicatorState;
use crate::types::Orientation;

/// Segments at or below this many pixels are not drawn.
pub const NOISE_THRESHOLD: f32 = 0.10;

/// The filled span along the bar's axis, in pixels from the track's start edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub size: f32,
}

impl Segment {
    pub const EMPTY: Segment = Segment { start: 0.0, size: 0.0 };

    /// Far edge of the segment (`start + size`).
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.size
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.size > NOISE_THRESHOLD
    }
}

/// Map the interval between `offset` and `value` onto `axis_extent` pixels.
///
/// The segment starts at whichever of the two is smaller, so a non-zero offset
/// lets the bar grow toward either edge. Values outside `[min, max]` are not
/// clamped. A zero range yields `Segment::EMPTY`.
pub fn segment(state: &IndicatorState, axis_extent: f32) -> Segment {
    let range = state.range();
    if range == 0 {
        return Segment::EMPTY;
    }
    let range = range as f64;
    let extent = axis_extent as f64;
    let span = (state.value as i64 - state.offset as i64).abs() as f64;
    let low = state.offset.min(state.value) as i64 - state.min as i64;
    Segment {
        start: (low as f64 / range * extent) as f32,
        size: (span / range * extent) as f32,
    }
}

/// Rectangle covered by `seg` inside `track`. Vertical bars grow up from the bottom.
pub fn fill_rect(track: skia::Rect, seg: Segment, orientation: Orientation) -> skia::Rect {
    match orientation {
        Orientation::Horizontal => {
            skia::Rect::from_xywh(track.left + seg.start, track.top, seg.size, track.height())
        }
        Orientation::Vertical => skia::Rect::from_xywh(
            track.left,
            track.top + track.height() - seg.end(),
            track.width(),
            seg.size,
        ),
    }
}

/// Gradient endpoints across `rect`: top-to-bottom for horizontal bars,
/// left-to-right for vertical ones (perpendicular to the direction of travel).
pub fn gradient_points(rect: skia::Rect, orientation: Orientation) -> (skia::Point, skia::Point) {
    match orientation {
        Orientation::Horizontal => (
            skia::Point::new(rect.left, rect.top),
            skia::Point::new(rect.left, rect.bottom),
        ),
        Orientation::Vertical => (
            skia::Point::new(rect.left, rect.top),
            skia::Point::new(rect.right, rect.top),
        ),
    }
}

/// Path rectangle for a stroke of `stroke_width` whose outer edge sits on `track`'s boundary.
pub fn outset_border_rect(track: skia::Rect, stroke_width: f32) -> skia::Rect {
    let max_half = track.width().min(track.height()) * 0.5;
    let half = clamp(stroke_width * 0.5, 0.0, max_half.max(0.0));
    skia::Rect::from_ltrb(track.left + half, track.top + half, track.right - half, track.bottom - half)
}

/// The single boundary line drawn with the fill: the track's right edge,
/// inset so the whole stroke lies inside the track.
pub fn inner_edge_line(track: skia::Rect, stroke_width: f32) -> (skia::Point, skia::Point) {
    let x = track.right - clamp(stroke_width * 0.5, 0.0, track.width().max(0.0));
    (skia::Point::new(x, track.top), skia::Point::new(x, track.bottom))
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_fill_is_anchored_to_bottom() {
        let track = skia::Rect::from_xywh(0.0, 0.0, 50.0, 300.0);
        let r = fill_rect(track, Segment { start: 0.0, size: 150.0 }, Orientation::Vertical);
        assert_eq!(r, skia::Rect::from_ltrb(0.0, 150.0, 50.0, 300.0));
    }

    #[test]
    fn horizontal_fill_starts_at_segment_start() {
        let track = skia::Rect::from_xywh(0.0, 0.0, 300.0, 50.0);
        let r = fill_rect(track, Segment { start: 90.0, size: 120.0 }, Orientation::Horizontal);
        assert_eq!(r, skia::Rect::from_ltrb(90.0, 0.0, 210.0, 50.0));
    }

    #[test]
    fn outset_stroke_stays_inside_track() {
        let track = skia::Rect::from_xywh(0.0, 0.0, 300.0, 50.0);
        let r = outset_border_rect(track, 2.0);
        assert_eq!(r, skia::Rect::from_ltrb(1.0, 1.0, 299.0, 49.0));
        // Wider than the track collapses to its centre line instead of inverting.
        let r = outset_border_rect(track, 400.0);
        assert_eq!(r.top, r.bottom);
    }

    #[test]
    fn inner_edge_sits_inside_right_edge() {
        let track = skia::Rect::from_xywh(0.0, 0.0, 300.0, 50.0);
        let (a, b) = inner_edge_line(track, 1.0);
        assert_eq!((a.x, a.y, b.x, b.y), (299.5, 0.0, 299.5, 50.0));
        let (a, b) = inner_edge_line(track, 4.0);
        assert_eq!((a.x, b.x), (298.0, 298.0));
        // Zero width collapses onto the edge itself.
        let (a, _) = inner_edge_line(track, 0.0);
        assert_eq!(a.x, 300.0);
        // Same placement for a vertical track: always the right edge.
        let tall = skia::Rect::from_xywh(10.0, 5.0, 40.0, 200.0);
        let (a, b) = inner_edge_line(tall, 2.0);
        assert_eq!((a.x, a.y, b.x, b.y), (49.0, 5.0, 49.0, 205.0));
    }

    #[test]
    fn gradient_runs_across_travel() {
        let rect = skia::Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        let (a, b) = gradient_points(rect, Orientation::Horizontal);
        assert_eq!((a.x, a.y, b.x, b.y), (10.0, 20.0, 10.0, 60.0));
        let (a, b) = gradient_points(rect, Orientation::Vertical);
        assert_eq!((a.x, a.y, b.x, b.y), (10.0, 20.0, 40.0, 20.0));
    }
}
