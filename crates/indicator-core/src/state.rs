// File: crates/indicator-core/src/state.rs
// Summary: IndicatorState, the numeric range/value/style snapshot a render reads.

use crate::theme::Palette;
use crate::types::Orientation;

/// Everything the renderer needs to draw one frame.
///
/// No invariant is enforced here: `value` and `offset` may lie outside
/// `[min, max]`, `max` may equal `min`, and `border_width` may be negative.
/// The renderer decides how each of those degrades.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorState {
    pub min: i32,
    pub max: i32,
    pub value: i32,
    /// Start reference of the filled segment.
    pub offset: i32,
    pub orientation: Orientation,
    pub palette: Palette,
    /// Outer border is stroked at twice this width, the inner edge at this width.
    pub border_width: f32,
    /// Number of dividers across the track. Stored only; the renderer draws none.
    pub divider_count: i32,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            value: 50,
            offset: 0,
            orientation: Orientation::Horizontal,
            palette: Palette::classic(),
            border_width: 1.0,
            divider_count: 10,
        }
    }
}

impl IndicatorState {
    /// `max - min`, widened so extreme bounds cannot overflow.
    #[inline]
    pub fn range(&self) -> i64 {
        self.max as i64 - self.min as i64
    }

    /// False when `max == min`; such a state renders the track only.
    #[inline]
    pub fn has_range(&self) -> bool {
        self.range() != 0
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }

    /// Border width usable for stroking: negative or non-finite widths become 0.
    pub fn effective_border_width(&self) -> f32 {
        if self.border_width.is_finite() {
            self.border_width.max(0.0)
        } else {
            0.0
        }
    }

    /// Builder-style range setter, handy in tests and demos.
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_control() {
        let s = IndicatorState::default();
        assert_eq!((s.min, s.max, s.value, s.offset), (0, 100, 50, 0));
        assert_eq!(s.orientation, Orientation::Horizontal);
        assert_eq!(s.border_width, 1.0);
        assert_eq!(s.divider_count, 10);
        assert_eq!(s.palette, Palette::classic());
    }

    #[test]
    fn range_does_not_overflow() {
        let s = IndicatorState::default().with_range(i32::MIN, i32::MAX);
        assert_eq!(s.range(), u32::MAX as i64);
        assert!(s.has_range());
        assert!(!IndicatorState::default().with_range(7, 7).has_range());
    }

    #[test]
    fn border_width_clamps_to_zero() {
        let s = IndicatorState::default().with_border_width(-3.0);
        assert_eq!(s.effective_border_width(), 0.0);
        let s = IndicatorState::default().with_border_width(f32::NAN);
        assert_eq!(s.effective_border_width(), 0.0);
        let s = IndicatorState::default().with_border_width(2.5);
        assert_eq!(s.effective_border_width(), 2.5);
    }
}
