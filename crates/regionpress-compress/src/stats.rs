//! Region statistics
//!
//! Mean, population standard deviation and truncated average of the
//! sampled channel over a rectangular region. All functions are pure:
//! they read through [`RasterAccess`] and never mutate.

use crate::error::{CompressError, CompressResult};
use regionpress_core::{RasterAccess, Region};

/// Accumulated channel sums over one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStats {
    /// Number of pixels visited
    pub count: u64,
    /// Sum of channel values
    pub sum: u64,
    /// Sum of squared channel values
    pub sum_squares: u64,
}

impl RegionStats {
    /// Accumulate statistics in a single pass over `region`.
    ///
    /// The region must be non-empty and inside the raster; use
    /// [`region_stats`] for a checked version.
    pub fn measure<R: RasterAccess + ?Sized>(raster: &R, region: &Region) -> Self {
        let mut stats = RegionStats::default();
        for x in region.x..region.x + region.w {
            for y in region.y..region.y + region.h {
                let v = raster.channel_value(x, y) as u64;
                stats.sum += v;
                stats.sum_squares += v * v;
                stats.count += 1;
            }
        }
        stats
    }

    /// Arithmetic mean of the channel values.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }

    /// Population standard deviation.
    ///
    /// Computed as `sqrt(E[v^2] - mean^2)`; a negative residue from
    /// floating-point cancellation is treated as zero.
    pub fn standard_deviation(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self.sum_squares as f64 / self.count as f64 - mean * mean;
        variance.max(0.0).sqrt()
    }

    /// Mean truncated toward zero.
    pub fn average_intensity(&self) -> u8 {
        if self.count == 0 {
            return 0;
        }
        // sum <= 255 * count, so the quotient fits
        (self.sum / self.count) as u8
    }
}

pub(crate) fn ensure_region<R: RasterAccess + ?Sized>(
    raster: &R,
    region: &Region,
) -> CompressResult<()> {
    if region.fits_within(raster.width(), raster.height()) {
        Ok(())
    } else {
        Err(CompressError::RegionOutOfBounds {
            region: *region,
            width: raster.width(),
            height: raster.height(),
        })
    }
}

/// Measure `region` after checking it is non-empty and inside the raster.
///
/// # Errors
///
/// Returns [`CompressError::RegionOutOfBounds`] otherwise.
pub fn region_stats<R: RasterAccess + ?Sized>(
    raster: &R,
    region: &Region,
) -> CompressResult<RegionStats> {
    ensure_region(raster, region)?;
    Ok(RegionStats::measure(raster, region))
}

/// Population standard deviation of the sampled channel over `region`.
pub fn standard_deviation<R: RasterAccess + ?Sized>(
    raster: &R,
    region: &Region,
) -> CompressResult<f64> {
    region_stats(raster, region).map(|s| s.standard_deviation())
}

/// Truncated mean of the sampled channel over `region`.
pub fn average_intensity<R: RasterAccess + ?Sized>(
    raster: &R,
    region: &Region,
) -> CompressResult<u8> {
    region_stats(raster, region).map(|s| s.average_intensity())
}
