// File: crates/indicator-core/src/error.rs
// Summary: Error type for the environmental failures a render can hit.

use thiserror::Error;

/// Geometry never fails; these only come from the raster backend or file output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceAllocation { width: i32, height: i32 },
    #[error("failed to read pixels back from raster surface")]
    ReadPixels,
    #[error("encode PNG failed")]
    EncodePng,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
