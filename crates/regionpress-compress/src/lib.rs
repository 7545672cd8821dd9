//! regionpress-compress - Region-variance image compression
//!
//! This crate replaces near-uniform rectangular regions of a raster with
//! their average intensity. Two strategies are provided:
//!
//! - **Recursive** ([`compress_recursive`]) - depth-first quadtree
//!   subdivision, collapsing a region as soon as it is uniform enough
//! - **Iterative** ([`compress_iterative`]) - power-of-two grid sweeps over
//!   the whole raster, from the finest grid upward
//!
//! Both build on the region primitives [`RegionStats`] and [`fill_region`].
//! Only the raster's sample channel is inspected; collapsed regions are
//! written back as gray in all three colour channels.
//!
//! # Examples
//!
//! ```
//! use regionpress_compress::{compress_iterative, compress_recursive};
//! use regionpress_core::Raster;
//!
//! let source = Raster::from_gray_values(4, 4, &[100; 16]).unwrap();
//!
//! // Each strategy works on its own copy
//! let mut recursive = source.to_mut();
//! let mut iterative = source.to_mut();
//! compress_recursive(&mut recursive, 0.0).unwrap();
//! compress_iterative(&mut iterative, 0.0).unwrap();
//!
//! assert_eq!(recursive.get_rgb(3, 3), Some((100, 100, 100)));
//! assert_eq!(recursive.data(), iterative.data());
//! ```

pub mod error;
pub mod fill;
pub mod iterative;
pub mod options;
pub mod recursive;
pub mod stats;

// Re-export core types
pub use regionpress_core;

pub use error::{CompressError, CompressResult};
pub use fill::fill_region;
pub use iterative::{compress_iterative, compress_iterative_with};
pub use options::{CompressOptions, CompressSummary, RemainderPolicy};
pub use recursive::{compress_recursive, compress_recursive_with};
pub use stats::{RegionStats, average_intensity, region_stats, standard_deviation};

use regionpress_core::RasterAccess;

/// Compression strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first quadtree subdivision
    Recursive,
    /// Power-of-two grid sweep
    Iterative,
}

impl Strategy {
    /// All strategies, in the order a comparison reports them.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Human-readable strategy name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "Recursive",
            Strategy::Iterative => "Iterative",
        }
    }

    /// Run this strategy on `raster` in place.
    pub fn compress<R: RasterAccess + ?Sized>(
        self,
        raster: &mut R,
        options: &CompressOptions,
    ) -> CompressResult<CompressSummary> {
        match self {
            Strategy::Recursive => compress_recursive_with(raster, options),
            Strategy::Iterative => compress_iterative_with(raster, options),
        }
    }
}

/// Reject rasters without pixels before any work starts.
pub(crate) fn ensure_nonempty<R: RasterAccess + ?Sized>(raster: &R) -> CompressResult<()> {
    let (width, height) = (raster.width(), raster.height());
    if width == 0 || height == 0 {
        return Err(CompressError::EmptyRaster { width, height });
    }
    Ok(())
}
