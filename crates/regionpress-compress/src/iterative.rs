//! Iterative compressor - power-of-two grid sweep
//!
//! The raster is swept with grids of `step x step` cells for
//! `step = 2, 4, 8, ...` while `step <= min(W, H)`. Every cell whose channel
//! standard deviation is within the threshold is filled with its average.
//! Cells in the last column / row are clipped to the raster.
//!
//! Passes run from the smallest step upward and each pass re-measures the
//! output of the previous one, so blocks flattened at a small step can merge
//! with their neighbours at a larger step.

use crate::ensure_nonempty;
use crate::error::CompressResult;
use crate::fill::fill_unchecked;
use crate::options::{CompressOptions, CompressSummary};
use crate::stats::RegionStats;
use regionpress_core::{RasterAccess, Region};
use tracing::{debug, trace};

/// Compress `raster` in place with the iterative grid sweep.
///
/// Returns the same raster for chaining.
///
/// # Errors
///
/// Same as [`compress_recursive`](crate::compress_recursive).
pub fn compress_iterative<R: RasterAccess + ?Sized>(
    raster: &mut R,
    threshold: f64,
) -> CompressResult<&mut R> {
    let options = CompressOptions::new(threshold)?;
    compress_iterative_with(raster, &options)?;
    Ok(raster)
}

/// Compress `raster` in place with the iterative grid sweep and explicit
/// options.
///
/// The remainder policy does not apply: grid cells are always clipped to
/// the raster, so every pixel belongs to a cell in every pass.
pub fn compress_iterative_with<R: RasterAccess + ?Sized>(
    raster: &mut R,
    options: &CompressOptions,
) -> CompressResult<CompressSummary> {
    ensure_nonempty(raster)?;

    let width = raster.width();
    let height = raster.height();
    let limit = width.min(height);
    let mut summary = CompressSummary::default();

    let mut step: u32 = 2;
    while step <= limit {
        let collapsed_before = summary.regions_collapsed;
        for cell in Region::grid(width, height, step) {
            summary.regions_measured += 1;
            let stats = RegionStats::measure(raster, &cell);
            if stats.standard_deviation() <= options.threshold() {
                summary.pixels_filled += fill_unchecked(raster, &cell, stats.average_intensity());
                summary.regions_collapsed += 1;
            }
        }
        summary.depth += 1;
        trace!(
            step,
            collapsed = summary.regions_collapsed - collapsed_before,
            "grid pass finished"
        );

        step = match step.checked_mul(2) {
            Some(next) => next,
            None => break,
        };
    }

    debug!(
        threshold = options.threshold(),
        passes = summary.depth,
        measured = summary.regions_measured,
        collapsed = summary.regions_collapsed,
        pixels = summary.pixels_filled,
        "iterative compression finished"
    );
    Ok(summary)
}
