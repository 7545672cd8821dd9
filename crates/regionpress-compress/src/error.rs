//! Error types for regionpress-compress

use regionpress_core::Region;
use thiserror::Error;

/// Errors that can occur during compression
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompressError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] regionpress_core::Error),

    /// Threshold is negative, NaN or infinite
    #[error("invalid threshold: {0} (must be finite and >= 0)")]
    InvalidThreshold(f64),

    /// Raster has no pixels
    #[error("empty raster: {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },

    /// Region is empty or extends past the raster
    #[error("region {region:?} does not fit inside {width}x{height} raster")]
    RegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },
}

/// Result type for compression operations
pub type CompressResult<T> = Result<T, CompressError>;
