// File: crates/indicator-core/src/indicator.rs
// Summary: LinearIndicator widget; property setters that ask the host to redraw, and a paint entry point.

use std::rc::Rc;

use skia_safe as skia;

use crate::error::Result;
use crate::render::{render, RasterImage};
use crate::state::IndicatorState;
use crate::theme::{Palette, CONTROL_BACKGROUND};
use crate::types::{Orientation, HEIGHT, WIDTH};

/// The host toolkit side of the widget contract.
pub trait Host {
    /// Schedule a repaint; the host later calls [`LinearIndicator::paint`].
    fn request_redraw(&self);
}

/// Host that drops every request. Useful for headless rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl Host for NullHost {
    fn request_redraw(&self) {}
}

impl<H: Host + ?Sized> Host for &H {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}

impl<H: Host + ?Sized> Host for Rc<H> {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}

impl<H: Host + ?Sized> Host for Box<H> {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}

/// A horizontal or vertical range indicator embedded in a host.
///
/// Every setter requests exactly one redraw, even when the new value equals
/// the old one. `set_value` is the exception: it only redraws on change.
pub struct LinearIndicator<H: Host = NullHost> {
    state: IndicatorState,
    width: i32,
    height: i32,
    background: skia::Color,
    host: H,
}

impl LinearIndicator<NullHost> {
    pub fn headless() -> Self {
        Self::new(NullHost)
    }
}

impl<H: Host> LinearIndicator<H> {
    /// Default state at the stock 300x50 size.
    pub fn new(host: H) -> Self {
        Self::with_state(host, IndicatorState::default())
    }

    pub fn with_state(host: H, state: IndicatorState) -> Self {
        Self { state, width: WIDTH, height: HEIGHT, background: CONTROL_BACKGROUND, host }
    }

    pub fn host(&self) -> &H { &self.host }
    pub fn state(&self) -> &IndicatorState { &self.state }
    pub fn into_state(self) -> IndicatorState { self.state }

    pub fn size(&self) -> (i32, i32) { (self.width, self.height) }
    pub fn background(&self) -> skia::Color { self.background }

    pub fn min(&self) -> i32 { self.state.min }
    pub fn max(&self) -> i32 { self.state.max }
    pub fn value(&self) -> i32 { self.state.value }
    pub fn offset(&self) -> i32 { self.state.offset }
    pub fn orientation(&self) -> Orientation { self.state.orientation }
    pub fn is_vertical(&self) -> bool { self.state.is_vertical() }
    pub fn palette(&self) -> Palette { self.state.palette }
    pub fn bar_background_light(&self) -> skia::Color { self.state.palette.background_light }
    pub fn bar_background_dark(&self) -> skia::Color { self.state.palette.background_dark }
    pub fn bar_light(&self) -> skia::Color { self.state.palette.bar_light }
    pub fn bar_dark(&self) -> skia::Color { self.state.palette.bar_dark }
    pub fn border_color(&self) -> skia::Color { self.state.palette.border }
    pub fn border_width(&self) -> f32 { self.state.border_width }
    pub fn divider_count(&self) -> i32 { self.state.divider_count }

    /// Set the current value; redraws only when it actually changes.
    pub fn set_value(&mut self, value: i32) {
        if self.state.value != value {
            self.state.value = value;
            self.host.request_redraw();
        }
    }

    pub fn set_min(&mut self, min: i32) {
        self.update(|s| s.min = min);
    }

    pub fn set_max(&mut self, max: i32) {
        self.update(|s| s.max = max);
    }

    pub fn set_offset(&mut self, offset: i32) {
        self.update(|s| s.offset = offset);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.update(|s| s.orientation = orientation);
    }

    pub fn set_vertical(&mut self, vertical: bool) {
        self.set_orientation(Orientation::from_vertical(vertical));
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.update(|s| s.palette = palette);
    }

    pub fn set_bar_background_light(&mut self, color: skia::Color) {
        self.update(|s| s.palette.background_light = color);
    }

    pub fn set_bar_background_dark(&mut self, color: skia::Color) {
        self.update(|s| s.palette.background_dark = color);
    }

    pub fn set_bar_light(&mut self, color: skia::Color) {
        self.update(|s| s.palette.bar_light = color);
    }

    pub fn set_bar_dark(&mut self, color: skia::Color) {
        self.update(|s| s.palette.bar_dark = color);
    }

    pub fn set_border_color(&mut self, color: skia::Color) {
        self.update(|s| s.palette.border = color);
    }

    /// Negative widths are accepted here and drawn as zero.
    pub fn set_border_width(&mut self, width: f32) {
        self.update(|s| s.border_width = width);
    }

    /// Stored and reported back; dividers are not drawn.
    pub fn set_divider_count(&mut self, count: i32) {
        self.update(|s| s.divider_count = count);
    }

    /// Host-driven resize (the control repaints on resize).
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.host.request_redraw();
    }

    /// Host background color behind the bar.
    pub fn set_background(&mut self, color: skia::Color) {
        self.background = color;
        self.host.request_redraw();
    }

    /// Produce the frame for the current size, background and state.
    pub fn paint(&self) -> Result<RasterImage> {
        render(self.width, self.height, self.background, &self.state)
    }

    fn update(&mut self, f: impl FnOnce(&mut IndicatorState)) {
        f(&mut self.state);
        self.host.request_redraw();
    }
}

impl Default for LinearIndicator<NullHost> {
    fn default() -> Self {
        Self::headless()
    }
}
