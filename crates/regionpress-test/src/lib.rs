//! regionpress-test - Regression test framework for regionpress
//!
//! This crate provides the shared helpers used by the `tests/*_reg.rs`
//! files of every workspace crate:
//!
//! - [`RegParams`]: value / raster checks that collect failures instead of
//!   panicking, reported by [`RegParams::cleanup`]
//! - Synthetic raster generators, deterministic for a given seed
//!
//! # Usage
//!
//! ```ignore
//! use regionpress_test::RegParams;
//!
//! let mut rp = RegParams::new("recursive");
//! rp.compare_values(100.0, value as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regionpress_core::{Raster, RasterMut, color};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // regionpress-test is at crates/regionpress-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a gray raster whose channel value at (x, y) is `f(x, y)`.
pub fn gray_raster<F>(width: u32, height: u32, f: F) -> TestResult<Raster>
where
    F: Fn(u32, u32) -> u8,
{
    let mut raster: RasterMut = Raster::new(width, height)?.to_mut();
    for y in 0..height {
        for x in 0..width {
            raster.set_pixel_unchecked(x, y, color::gray(f(x, y)));
        }
    }
    Ok(raster.into())
}

/// Build a raster of independent uniformly random colours.
pub fn random_raster(width: u32, height: u32, seed: u64) -> TestResult<Raster> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = Raster::new(width, height)?.to_mut();
    for pixel in raster.data_mut() {
        *pixel = color::compose_rgb(rng.r#gen(), rng.r#gen(), rng.r#gen());
    }
    Ok(raster.into())
}

/// Build a gray raster of `block x block` tiles with small per-pixel noise.
///
/// Each tile gets a random base level; every pixel adds noise in
/// `[-noise, noise]`. Useful for exercising partially uniform content.
pub fn blocky_raster(
    width: u32,
    height: u32,
    block: u32,
    noise: u8,
    seed: u64,
) -> TestResult<Raster> {
    let block = block.max(1);
    let mut rng = StdRng::seed_from_u64(seed);
    let tiles_x = width.div_ceil(block) as usize;
    let tiles_y = height.div_ceil(block) as usize;
    let bases: Vec<i32> = (0..tiles_x * tiles_y)
        .map(|_| rng.gen_range(0..=255))
        .collect();

    let mut raster = Raster::new(width, height)?.to_mut();
    for y in 0..height {
        for x in 0..width {
            let tile = (y / block) as usize * tiles_x + (x / block) as usize;
            let jitter = if noise == 0 {
                0
            } else {
                rng.gen_range(-(noise as i32)..=noise as i32)
            };
            let v = (bases[tile] + jitter).clamp(0, 255) as u8;
            raster.set_pixel_unchecked(x, y, color::gray(v));
        }
    }
    Ok(raster.into())
}
