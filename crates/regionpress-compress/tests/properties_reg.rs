//! Compression property regression test
//!
//! Runs both strategies over seeded random and blocky rasters and checks
//! properties that hold for any input:
//! 1. Dimensions are preserved and every run terminates
//! 2. A uniform region stays at its value for any threshold
//! 3. The number of altered pixels does not decrease with the threshold
//! 4. Recursive collapse of the whole raster writes the floored mean
//! 5. Unvisited residual strips keep their original pixels
//!
//! Run with:
//! ```
//! cargo test -p regionpress-compress --test properties_reg
//! ```

use regionpress_compress::{
    CompressOptions, RemainderPolicy, Strategy, compress_recursive_with, region_stats,
};
use regionpress_core::{Raster, Region};
use regionpress_test::{RegParams, blocky_raster, gray_raster, random_raster};

const SIZES: [(u32, u32); 6] = [(1, 7), (2, 2), (5, 3), (16, 16), (33, 20), (64, 47)];

fn run(source: &Raster, strategy: Strategy, options: &CompressOptions) -> Raster {
    let mut copy = source.to_mut();
    strategy.compress(&mut copy, options).unwrap();
    copy.into()
}

#[test]
fn properties_dimensions_preserved() {
    let mut rp = RegParams::new("properties_dims");

    for (i, &(w, h)) in SIZES.iter().enumerate() {
        let source = random_raster(w, h, i as u64).unwrap();
        for strategy in Strategy::ALL {
            for threshold in [0.0, 25.0, 200.0] {
                let out = run(&source, strategy, &CompressOptions::new(threshold).unwrap());
                rp.compare_values(w as f64, out.width() as f64, 0.0);
                rp.compare_values(h as f64, out.height() as f64, 0.0);
            }
        }
    }

    assert!(rp.cleanup(), "dimension test failed");
}

#[test]
fn properties_uniform_region_is_fixed_point() {
    let mut rp = RegParams::new("properties_uniform");

    for (w, h) in SIZES {
        let source = gray_raster(w, h, |_, _| 173).unwrap();
        for strategy in Strategy::ALL {
            for threshold in [0.0, 10.0, 1000.0] {
                let out = run(&source, strategy, &CompressOptions::new(threshold).unwrap());
                rp.compare_rasters(&source, &out);
            }
        }
    }

    assert!(rp.cleanup(), "uniform test failed");
}

#[test]
fn properties_threshold_monotonic() {
    let mut rp = RegParams::new("properties_monotonic");

    // Colour sources: any fill turns a pixel gray, so a filled pixel
    // always counts as altered
    let sources = [
        random_raster(48, 48, 1).unwrap(),
        random_raster(40, 24, 2).unwrap(),
        random_raster(32, 32, 3).unwrap(),
    ];
    let thresholds = [0.0, 1.0, 2.5, 5.0, 10.0, 40.0, 120.0];

    for source in &sources {
        for strategy in Strategy::ALL {
            let mut previous = 0u64;
            for &t in &thresholds {
                let out = run(source, strategy, &CompressOptions::new(t).unwrap());
                let altered = source.count_pixel_diffs(&out).unwrap();
                eprintln!("  {} threshold {:>6.1}: {} altered", strategy.name(), t, altered);
                if altered < previous {
                    rp.compare_values(previous as f64, altered as f64, 0.0);
                }
                previous = altered;
            }
        }
    }

    assert!(rp.cleanup(), "monotonic test failed");
}

#[test]
fn properties_whole_collapse_writes_mean() {
    let mut rp = RegParams::new("properties_mean");

    for seed in 0..4 {
        let source = blocky_raster(16, 16, 16, 4, seed).unwrap();
        let stats = region_stats(&source.to_mut(), &Region::whole(16, 16)).unwrap();
        let threshold = stats.standard_deviation();

        // Threshold equal to the root deviation collapses at the root
        let out = run(&source, Strategy::Recursive, &CompressOptions::new(threshold).unwrap());
        let expected = (stats.sum / stats.count) as f64;
        for (x, y) in [(0, 0), (7, 9), (15, 15)] {
            rp.compare_values(expected, out.channel_value(x, y).unwrap() as f64, 0.0);
        }
        rp.compare_values(stats.mean().floor(), expected, 0.0);
    }

    assert!(rp.cleanup(), "mean test failed");
}

#[test]
fn properties_residual_strip_untouched() {
    let mut rp = RegParams::new("properties_residual");

    // 9x9: left/top 8x8 is collapsible noise, last row and column alternate
    let source = gray_raster(9, 9, |x, y| {
        if x == 8 || y == 8 {
            if (x + y) % 2 == 0 { 0 } else { 255 }
        } else {
            100 + ((x * 3 + y) % 2) as u8
        }
    })
    .unwrap();

    let mut skip = source.to_mut();
    compress_recursive_with(&mut skip, &CompressOptions::new(1.0).unwrap()).unwrap();
    let skip: Raster = skip.into();
    for i in 0..9 {
        rp.compare_values(
            source.channel_value(8, i).unwrap() as f64,
            skip.channel_value(8, i).unwrap() as f64,
            0.0,
        );
        rp.compare_values(
            source.channel_value(i, 8).unwrap() as f64,
            skip.channel_value(i, 8).unwrap() as f64,
            0.0,
        );
    }
    rp.compare_values(100.0, skip.channel_value(3, 3).unwrap() as f64, 0.0);

    // Covering the remainder must still leave the strip alternating since
    // every strip-containing region mixes 0 and 255
    let mut cover = source.to_mut();
    let opts = CompressOptions::new(1.0)
        .unwrap()
        .with_remainder(RemainderPolicy::Cover);
    compress_recursive_with(&mut cover, &opts).unwrap();
    let cover: Raster = cover.into();
    rp.compare_values(
        source.channel_value(8, 0).unwrap() as f64,
        cover.channel_value(8, 0).unwrap() as f64,
        0.0,
    );

    assert!(rp.cleanup(), "residual test failed");
}
