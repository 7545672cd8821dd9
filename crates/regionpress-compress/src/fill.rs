//! Region fill
//!
//! Writes one gray level over a rectangular region. This is the only
//! operation in the crate that mutates pixels.

use crate::error::CompressResult;
use crate::stats::ensure_region;
use regionpress_core::{RasterAccess, Region};

/// Set every pixel of `region` to gray `(intensity, intensity, intensity)`.
///
/// The gray level is written to all three colour channels regardless of
/// which channel the raster samples. Returns the number of pixels written.
///
/// # Errors
///
/// Returns [`CompressError::RegionOutOfBounds`](crate::CompressError::RegionOutOfBounds)
/// if the region is empty or extends past the raster.
pub fn fill_region<R: RasterAccess + ?Sized>(
    raster: &mut R,
    region: &Region,
    intensity: u8,
) -> CompressResult<u64> {
    ensure_region(raster, region)?;
    Ok(fill_unchecked(raster, region, intensity))
}

pub(crate) fn fill_unchecked<R: RasterAccess + ?Sized>(
    raster: &mut R,
    region: &Region,
    intensity: u8,
) -> u64 {
    for x in region.x..region.x + region.w {
        for y in region.y..region.y + region.h {
            raster.set_pixel_rgb(x, y, intensity, intensity, intensity);
        }
    }
    region.area()
}
