// File: crates/indicator-core/src/types.rs
// Summary: Shared types and constants (control size, orientation).

/// Default control width in logical pixels.
pub const WIDTH: i32 = 300;
/// Default control height in logical pixels.
pub const HEIGHT: i32 = 50;

/// Direction of travel of the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Bar grows from the left edge towards the right.
    #[default]
    Horizontal,
    /// Bar grows from the bottom edge upwards.
    Vertical,
}

impl Orientation {
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// The other orientation.
    pub const fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Pick the axis extent: width when horizontal, height when vertical.
    #[inline]
    pub fn axis_extent<T>(self, width: T, height: T) -> T {
        if self.is_vertical() { height } else { width }
    }
}
