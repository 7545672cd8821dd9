//! Raster and region regression test
//!
//! Tests raster creation, copy-on-write handles, pixel access through the
//! sample channel, quadrant splitting and grid iteration.

use regionpress_core::{Channel, Raster, RasterAccess, Region, color};
use regionpress_test::{RegParams, gray_raster};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    // --- Test 1: Creation ---
    let r = Raster::new(12, 5).expect("raster create");
    rp.compare_values(12.0, r.width() as f64, 0.0);
    rp.compare_values(5.0, r.height() as f64, 0.0);
    rp.compare_values(60.0, r.data().len() as f64, 0.0);
    rp.compare_values(1.0, if Raster::new(0, 5).is_err() { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: Independent copies ---
    let source = gray_raster(4, 4, |x, y| (x * 16 + y) as u8).expect("gray raster");
    let mut a = source.to_mut();
    let b = source.to_mut();
    a.set_rgb(0, 0, 255, 255, 255).expect("set rgb");
    rp.compare_values(0.0, b.get_rgb(0, 0).expect("pixel").0 as f64, 0.0);
    rp.compare_values(0.0, source.channel_value(0, 0).expect("pixel") as f64, 0.0);
    let a: Raster = a.into();
    rp.compare_values(1.0, source.count_pixel_diffs(&a).expect("diffs") as f64, 0.0);

    // --- Test 3: Sample channel ---
    let mut c = Raster::new_filled(2, 2, color::compose_rgb(10, 20, 30))
        .expect("raster create")
        .to_mut();
    rp.compare_values(30.0, c.channel_value(1, 1) as f64, 0.0);
    c.set_sample_channel(Channel::Red);
    rp.compare_values(10.0, c.channel_value(1, 1) as f64, 0.0);
    c.set_pixel_rgb(1, 1, 7, 7, 7);
    rp.compare_values(7.0, c.channel_value(1, 1) as f64, 0.0);
    rp.compare_values(255.0, color::alpha(c.get_pixel(1, 1).expect("pixel")) as f64, 0.0);

    assert!(rp.cleanup(), "raster regression test failed");
}

#[test]
fn region_reg() {
    let mut rp = RegParams::new("region");

    // --- Test 1: Quadrants of an even region tile it ---
    let q = Region::whole(8, 6).quadrants();
    let area: u64 = q.iter().map(Region::area).sum();
    rp.compare_values(48.0, area as f64, 0.0);
    rp.compare_values(4.0, q[3].x as f64, 0.0);
    rp.compare_values(3.0, q[3].y as f64, 0.0);

    // --- Test 2: Odd region leaves a residual strip ---
    let odd = Region::new(2, 1, 7, 5).expect("region");
    let area: u64 = odd.quadrants().iter().map(Region::area).sum();
    rp.compare_values(24.0, area as f64, 0.0);
    let area: u64 = odd.tiling_quadrants().iter().map(Region::area).sum();
    rp.compare_values(35.0, area as f64, 0.0);
    for quadrant in odd.tiling_quadrants() {
        let inside = quadrant.right() <= odd.right() && quadrant.bottom() <= odd.bottom();
        rp.compare_values(1.0, if inside { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 3: Grid cells cover the raster exactly once ---
    for (w, h, step) in [(10, 7, 2), (10, 7, 4), (16, 16, 8), (3, 3, 4)] {
        let mut hits = vec![0u32; (w * h) as usize];
        for cell in Region::grid(w, h, step) {
            rp.compare_values(1.0, if cell.fits_within(w, h) { 1.0 } else { 0.0 }, 0.0);
            for y in cell.y..cell.y + cell.h {
                for x in cell.x..cell.x + cell.w {
                    hits[(y * w + x) as usize] += 1;
                }
            }
        }
        let once = hits.iter().all(|&n| n == 1);
        rp.compare_values(1.0, if once { 1.0 } else { 0.0 }, 0.0);
    }

    // --- Test 4: Column-major order ---
    let cells: Vec<Region> = Region::grid(4, 4, 2).collect();
    rp.compare_values(4.0, cells.len() as f64, 0.0);
    rp.compare_values(0.0, cells[1].x as f64, 0.0);
    rp.compare_values(2.0, cells[1].y as f64, 0.0);

    assert!(rp.cleanup(), "region regression test failed");
}
