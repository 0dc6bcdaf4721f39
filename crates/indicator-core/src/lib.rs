// File: crates/indicator-core/src/lib.rs
// Summary: Core library entry point; exports the indicator state, widget and renderer.

pub mod error;
pub mod geometry;
pub mod indicator;
pub mod render;
pub mod state;
pub mod theme;
pub mod types;

pub use error::RenderError;
pub use geometry::{segment, Segment, NOISE_THRESHOLD};
pub use indicator::{Host, LinearIndicator, NullHost};
pub use render::{render, render_with, RasterImage, RenderOptions};
pub use state::IndicatorState;
pub use theme::Palette;
pub use types::Orientation;

/// Re-exported so hosts can name colors without depending on skia-safe directly.
pub use skia_safe::Color;
