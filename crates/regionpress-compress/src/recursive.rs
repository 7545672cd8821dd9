//! Recursive compressor - depth-first quadtree subdivision
//!
//! Starting from the whole raster, a region whose channel standard
//! deviation is within the threshold is filled with its average and not
//! visited further. Otherwise it is split into four quadrants which are
//! processed in the fixed order top-left, top-right, bottom-left,
//! bottom-right.
//!
//! # Overview
//!
//! - Regions with width or height <= 1 are left untouched
//! - Quadrants are `(w/2, h/2)`; with [`RemainderPolicy::Skip`] the odd
//!   rightmost column / bottom row of a region is never visited
//! - Depth is bounded by `log2(min(W, H))` (`log2(max(W, H))` with
//!   [`RemainderPolicy::Cover`])

use crate::error::CompressResult;
use crate::fill::fill_unchecked;
use crate::options::{CompressOptions, CompressSummary, RemainderPolicy};
use crate::stats::RegionStats;
use crate::ensure_nonempty;
use regionpress_core::{RasterAccess, Region};
use tracing::debug;

/// Compress `raster` in place by recursive subdivision.
///
/// Returns the same raster for chaining.
///
/// # Errors
///
/// Returns [`CompressError::InvalidThreshold`](crate::CompressError::InvalidThreshold)
/// for a negative or non-finite threshold and
/// [`CompressError::EmptyRaster`](crate::CompressError::EmptyRaster) for a
/// raster without pixels. Nothing is modified on error.
///
/// # Examples
///
/// ```
/// use regionpress_compress::compress_recursive;
/// use regionpress_core::Raster;
///
/// let mut raster = Raster::from_gray_values(2, 2, &[10, 10, 12, 12])
///     .unwrap()
///     .to_mut();
/// compress_recursive(&mut raster, 1.0).unwrap();
/// assert_eq!(raster.get_rgb(0, 0), Some((11, 11, 11)));
/// ```
pub fn compress_recursive<R: RasterAccess + ?Sized>(
    raster: &mut R,
    threshold: f64,
) -> CompressResult<&mut R> {
    let options = CompressOptions::new(threshold)?;
    compress_recursive_with(raster, &options)?;
    Ok(raster)
}

/// Compress `raster` in place by recursive subdivision with explicit options.
pub fn compress_recursive_with<R: RasterAccess + ?Sized>(
    raster: &mut R,
    options: &CompressOptions,
) -> CompressResult<CompressSummary> {
    ensure_nonempty(raster)?;

    let mut summary = CompressSummary::default();
    let whole = Region::whole(raster.width(), raster.height());
    subdivide(raster, whole, 0, options, &mut summary);

    debug!(
        threshold = options.threshold(),
        remainder = options.remainder().name(),
        measured = summary.regions_measured,
        collapsed = summary.regions_collapsed,
        pixels = summary.pixels_filled,
        depth = summary.depth,
        "recursive compression finished"
    );
    Ok(summary)
}

fn subdivide<R: RasterAccess + ?Sized>(
    raster: &mut R,
    region: Region,
    depth: u32,
    options: &CompressOptions,
    summary: &mut CompressSummary,
) {
    if region.w <= 1 || region.h <= 1 {
        return;
    }

    summary.depth = summary.depth.max(depth);
    summary.regions_measured += 1;
    let stats = RegionStats::measure(raster, &region);
    if stats.standard_deviation() <= options.threshold() {
        summary.pixels_filled += fill_unchecked(raster, &region, stats.average_intensity());
        summary.regions_collapsed += 1;
        return;
    }

    let quadrants = match options.remainder() {
        RemainderPolicy::Skip => region.quadrants(),
        RemainderPolicy::Cover => region.tiling_quadrants(),
    };
    for quadrant in quadrants {
        subdivide(raster, quadrant, depth + 1, options, summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompressError;
    use regionpress_core::{Raster, RasterMut};

    fn gray(width: u32, height: u32, values: &[u8]) -> RasterMut {
        Raster::from_gray_values(width, height, values)
            .unwrap()
            .to_mut()
    }

    fn channel_values(r: &RasterMut) -> Vec<u8> {
        r.data().iter().map(|&p| (p >> 8) as u8).collect()
    }

    #[test]
    fn test_uniform_collapses_at_root() {
        let mut r = gray(4, 4, &[100; 16]);
        let summary =
            compress_recursive_with(&mut r, &CompressOptions::new(0.0).unwrap()).unwrap();
        assert_eq!(summary.regions_measured, 1);
        assert_eq!(summary.regions_collapsed, 1);
        assert_eq!(summary.pixels_filled, 16);
        assert_eq!(summary.depth, 0);
        assert_eq!(channel_values(&r), vec![100; 16]);
    }

    #[test]
    fn test_two_by_two_not_collapsed() {
        let mut r = gray(2, 2, &[0, 0, 0, 255]);
        let summary =
            compress_recursive_with(&mut r, &CompressOptions::new(10.0).unwrap()).unwrap();
        // 2x2 measured once, quadrants are 1x1 base cases
        assert_eq!(summary.regions_measured, 1);
        assert_eq!(summary.regions_collapsed, 0);
        assert_eq!(channel_values(&r), vec![0, 0, 0, 255]);
    }

    #[test]
    fn test_collapses_quadrants_independently() {
        // Left half 10/11 noise, right half 0/255 checkerboard
        #[rustfmt::skip]
        let values = [
            10, 11, 0, 255,
            11, 10, 255, 0,
            10, 11, 0, 255,
            11, 10, 255, 0,
        ];
        let mut r = gray(4, 4, &values);
        compress_recursive(&mut r, 1.0).unwrap();
        #[rustfmt::skip]
        let expected = [
            10, 10, 0, 255,
            10, 10, 255, 0,
            10, 10, 0, 255,
            10, 10, 255, 0,
        ];
        assert_eq!(channel_values(&r), expected);
    }

    #[test]
    fn test_odd_width_leaves_residual_column() {
        // 3x2: root not uniform, quadrants are 1x1 -> nothing changes
        let mut r = gray(3, 2, &[5, 6, 200, 5, 6, 200]);
        compress_recursive(&mut r, 1.0).unwrap();
        assert_eq!(channel_values(&r), vec![5, 6, 200, 5, 6, 200]);

        // 5x4: left 4x4 collapses per 2x2 quadrant, column x=4 is skipped
        let mut values = vec![0u8; 20];
        for y in 0..4 {
            for x in 0..5 {
                values[y * 5 + x] = if x == 4 { 250 } else { (x % 2) as u8 };
            }
        }
        let mut r = gray(5, 4, &values);
        compress_recursive(&mut r, 1.0).unwrap();
        for y in 0..4u32 {
            assert_eq!(r.get_rgb(4, y), Some((250, 250, 250)));
            for x in 0..4u32 {
                assert_eq!(r.get_rgb(x, y), Some((0, 0, 0)), "pixel ({x},{y})");
            }
        }
    }

    #[test]
    fn test_cover_policy_reaches_residual() {
        // 3x3 with noisy 2x2 bottom-right block reachable only by tiling
        #[rustfmt::skip]
        let values = [
            0, 200, 0,
            200, 40, 41,
            0, 41, 40,
        ];
        let mut skip = gray(3, 3, &values);
        compress_recursive(&mut skip, 1.0).unwrap();
        assert_eq!(channel_values(&skip), values);

        let mut cover = gray(3, 3, &values);
        let opts = CompressOptions::new(1.0)
            .unwrap()
            .with_remainder(RemainderPolicy::Cover);
        let summary = compress_recursive_with(&mut cover, &opts).unwrap();
        assert_eq!(summary.regions_collapsed, 1);
        #[rustfmt::skip]
        let expected = [
            0, 200, 0,
            200, 40, 40,
            0, 40, 40,
        ];
        assert_eq!(channel_values(&cover), expected);
    }

    #[test]
    fn test_single_pixel_untouched() {
        let mut r = Raster::new_filled(1, 1, 0x0102_0300).unwrap().to_mut();
        compress_recursive(&mut r, 1000.0).unwrap();
        assert_eq!(r.get_pixel(0, 0), Some(0x0102_0300));
    }

    #[test]
    fn test_invalid_threshold_leaves_raster_alone() {
        let mut r = gray(2, 2, &[1, 2, 3, 4]);
        assert!(matches!(
            compress_recursive(&mut r, -1.0),
            Err(CompressError::InvalidThreshold(_))
        ));
        assert_eq!(channel_values(&r), vec![1, 2, 3, 4]);
    }
}
