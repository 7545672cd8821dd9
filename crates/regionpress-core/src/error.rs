//! Error types for regionpress-core
//!
//! Provides a unified error type for raster construction, pixel access and
//! region validation. Each variant carries enough context for diagnostics
//! without exposing internal layout details.

use thiserror::Error;

/// regionpress core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinates outside the raster
    #[error("pixel ({x}, {y}) outside {width}x{height} raster")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Region with zero width or height
    #[error("invalid region: {w}x{h} at ({x}, {y})")]
    InvalidRegion { x: u32, y: u32, w: u32, h: u32 },

    /// Raster dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
