// File: crates/indicator-core/src/theme.rs
// Summary: Baseline palette constants and the per-instance color set of the bar.

use skia_safe as skia;

/// Light end of the track gradient (white smoke).
pub const BAR_BASE_LIGHT: skia::Color = skia::Color::from_rgb(245, 245, 245);
/// Dark end of the track gradient.
pub const BAR_BASE_DARK: skia::Color = skia::Color::from_rgb(199, 200, 201);
/// Light end of the fill gradient.
pub const BAR_LIGHT: skia::Color = skia::Color::from_rgb(102, 144, 252);
/// Dark end of the fill gradient.
pub const BAR_DARK: skia::Color = skia::Color::from_rgb(40, 68, 202);
/// Outer border and inner edge stroke (dark gray).
pub const BORDER: skia::Color = skia::Color::from_rgb(169, 169, 169);

/// Default host background behind the control.
pub const CONTROL_BACKGROUND: skia::Color = skia::Color::from_rgb(240, 240, 240);

/// The five colors an indicator is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background_light: skia::Color,
    pub background_dark: skia::Color,
    pub bar_light: skia::Color,
    pub bar_dark: skia::Color,
    pub border: skia::Color,
}

impl Palette {
    /// The stock palette every new indicator starts with.
    pub const fn classic() -> Self {
        Self {
            background_light: BAR_BASE_LIGHT,
            background_dark: BAR_BASE_DARK,
            bar_light: BAR_LIGHT,
            bar_dark: BAR_DARK,
            border: BORDER,
        }
    }

    pub const fn with_bar(mut self, light: skia::Color, dark: skia::Color) -> Self {
        self.bar_light = light;
        self.bar_dark = dark;
        self
    }

    pub const fn with_background(mut self, light: skia::Color, dark: skia::Color) -> Self {
        self.background_light = light;
        self.background_dark = dark;
        self
    }

    pub const fn with_border(mut self, border: skia::Color) -> Self {
        self.border = border;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
