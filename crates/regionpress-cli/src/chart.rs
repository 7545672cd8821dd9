//! Grouped bar chart of compression times
//!
//! One group per image with an iterative (dark) and a recursive (light)
//! bar, drawn with the region fill primitive on a white canvas.

use anyhow::{Result, bail};
use regionpress_compress::fill_region;
use regionpress_core::{Raster, RasterMut, Region};

use crate::bench::ImageResult;

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;

const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 20;
const MARGIN_BOTTOM: u32 = 40;
const AXIS: u32 = 2;

pub const BACKGROUND: u8 = 255;
pub const AXIS_LEVEL: u8 = 0;
pub const ITERATIVE_LEVEL: u8 = 80;
pub const RECURSIVE_LEVEL: u8 = 170;

/// Render the timing chart for `results`.
pub fn render_chart(results: &[ImageResult]) -> Result<Raster> {
    if results.is_empty() {
        bail!("no results to chart");
    }

    let mut canvas = Raster::new(CHART_WIDTH, CHART_HEIGHT)?.to_mut();
    fill_region(&mut canvas, &Region::whole(CHART_WIDTH, CHART_HEIGHT), BACKGROUND)?;

    let plot_w = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;

    // Axes
    fill_region(
        &mut canvas,
        &Region::new(MARGIN_LEFT - AXIS, MARGIN_TOP, AXIS, plot_h + AXIS)?,
        AXIS_LEVEL,
    )?;
    fill_region(
        &mut canvas,
        &Region::new(MARGIN_LEFT - AXIS, baseline, plot_w + AXIS, AXIS)?,
        AXIS_LEVEL,
    )?;

    let max_seconds = results
        .iter()
        .flat_map(|r| [r.iterative.seconds, r.recursive.seconds])
        .fold(0.0f64, f64::max);
    let group_w = plot_w / results.len() as u32;
    let bar_w = (group_w / 3).max(1);

    for (i, result) in results.iter().enumerate() {
        let group_x = MARGIN_LEFT + i as u32 * group_w;
        let bars = [
            (group_x + group_w / 6, result.iterative.seconds, ITERATIVE_LEVEL),
            (group_x + group_w / 2, result.recursive.seconds, RECURSIVE_LEVEL),
        ];
        for (x, seconds, level) in bars {
            let h = bar_height(seconds, max_seconds, plot_h);
            if h == 0 {
                continue;
            }
            draw_bar(&mut canvas, x, baseline - h, bar_w, h, level)?;
        }
    }

    Ok(canvas.into())
}

fn bar_height(seconds: f64, max_seconds: f64, plot_h: u32) -> u32 {
    if max_seconds.is_nan() || max_seconds <= 0.0 || !seconds.is_finite() {
        return 0;
    }
    let scaled = (seconds / max_seconds * plot_h as f64).round();
    (scaled.max(0.0) as u32).min(plot_h)
}

fn draw_bar(canvas: &mut RasterMut, x: u32, y: u32, w: u32, h: u32, level: u8) -> Result<()> {
    fill_region(canvas, &Region::new(x, y, w, h)?, level)?;
    Ok(())
}
