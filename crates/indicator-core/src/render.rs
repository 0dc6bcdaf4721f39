// File: crates/indicator-core/src/render.rs
// Summary: Bar renderer; paints an IndicatorState onto a Skia CPU raster surface and returns RGBA pixels.

use skia_safe as skia;

use crate::error::{RenderError, Result};
use crate::geometry::{self, Segment};
use crate::state::IndicatorState;
use crate::theme::CONTROL_BACKGROUND;
use crate::types::{Orientation, HEIGHT, WIDTH};

/// Target surface of one render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: CONTROL_BACKGROUND,
        }
    }
}

impl RenderOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: skia::Color) -> Self {
        self.background = background;
        self
    }
}

/// Finished frame: unpremultiplied RGBA8, row-major, `stride` bytes per row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// The 0x0 image returned for degenerate surface sizes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn stride(&self) -> usize { self.stride }
    pub fn pixels(&self) -> &[u8] { &self.pixels }
    pub fn is_empty(&self) -> bool { self.pixels.is_empty() }

    /// RGBA at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// `(pixels, width, height, stride)`.
    pub fn into_rgba8(self) -> (Vec<u8>, u32, u32, usize) {
        (self.pixels, self.width, self.height, self.stride)
    }

    /// Pack pixels as `0xAARRGGBB`, the layout softbuffer frames expect.
    pub fn to_argb32(&self) -> Vec<u32> {
        self.pixels
            .chunks_exact(4)
            .map(|px| {
                let (r, g, b, a) = (px[0] as u32, px[1] as u32, px[2] as u32, px[3] as u32);
                (a << 24) | (r << 16) | (g << 8) | b
            })
            .collect()
    }

    /// Encode as PNG bytes. An empty image cannot be encoded.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Err(RenderError::EncodePng);
        }
        let info = rgba_info(self.width as i32, self.height as i32);
        let image = skia::images::raster_from_data(&info, skia::Data::new_copy(&self.pixels), self.stride)
            .ok_or(RenderError::EncodePng)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::EncodePng)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Render `state` into a `width` x `height` image cleared to `background`.
///
/// Non-positive sizes give an empty image and a zero range gives the track
/// without a fill. Errors only come from the raster backend.
pub fn render(width: i32, height: i32, background: skia::Color, state: &IndicatorState) -> Result<RasterImage> {
    if width <= 0 || height <= 0 {
        log::debug!("skipping render of degenerate {width}x{height} surface");
        return Ok(RasterImage::empty());
    }

    // The surface lives only for this call and is dropped on every return path.
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(RenderError::SurfaceAllocation { width, height })?;
    {
        let canvas = surface.canvas();
        canvas.clear(background);
        let track = skia::Rect::from_iwh(width, height);
        draw_bar(canvas, track, state);
    }

    let info = rgba_info(width, height);
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    Ok(RasterImage { width: width as u32, height: height as u32, stride, pixels })
}

/// `render` with size and background taken from `opts`.
pub fn render_with(opts: &RenderOptions, state: &IndicatorState) -> Result<RasterImage> {
    render(opts.width, opts.height, opts.background, state)
}

// ---- helpers ----------------------------------------------------------------

fn rgba_info(width: i32, height: i32) -> skia::ImageInfo {
    skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None)
}

fn draw_bar(canvas: &skia::Canvas, track: skia::Rect, state: &IndicatorState) {
    let palette = &state.palette;
    let orientation = state.orientation;
    let border_width = state.effective_border_width();
    if border_width != state.border_width {
        log::warn!("border width {} clamped to {border_width}", state.border_width);
    }

    // Track
    fill_gradient(canvas, track, orientation, palette.background_light, palette.background_dark);

    // Border around the whole thing
    let outer = border_width * 2.0;
    if outer > 0.0 {
        let paint = stroke_paint(palette.border, outer);
        canvas.draw_rect(geometry::outset_border_rect(track, outer), &paint);
    }

    if !state.has_range() {
        log::debug!("min == max ({}); drawing track only", state.min);
        return;
    }

    let extent = orientation.axis_extent(track.width(), track.height());
    let seg: Segment = geometry::segment(state, extent);
    log::trace!("segment start={} size={} extent={extent}", seg.start, seg.size);
    if !seg.is_visible() {
        return;
    }

    let fill = geometry::fill_rect(track, seg, orientation);
    fill_gradient(canvas, fill, orientation, palette.bar_light, palette.bar_dark);

    if border_width > 0.0 {
        let paint = stroke_paint(palette.border, border_width);
        let (p0, p1) = geometry::inner_edge_line(track, border_width);
        canvas.draw_line(p0, p1, &paint);
    }
}

fn fill_gradient(
    canvas: &skia::Canvas,
    rect: skia::Rect,
    orientation: Orientation,
    light: skia::Color,
    dark: skia::Color,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);

    let colors = [light, dark];
    let points = geometry::gradient_points(rect, orientation);
    match skia::Shader::linear_gradient(points, &colors[..], None, skia::TileMode::Clamp, None, None) {
        Some(shader) => {
            paint.set_shader(shader);
        }
        // Zero-thickness rect: no gradient direction, fall back to the light color.
        None => {
            paint.set_color(light);
        }
    }
    canvas.draw_rect(rect, &paint);
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(color);
    paint
}
