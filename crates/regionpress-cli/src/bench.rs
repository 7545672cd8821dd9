//! Per-image strategy comparison

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use regionpress_compress::{CompressOptions, CompressSummary, Strategy};
use regionpress_core::{Channel, ImageFormat, Raster};
use regionpress_io::{encoded_size, read_image, write_image_mem_with_quality};
use tracing::{debug, error, info};

/// Settings shared by every image of a run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub options: CompressOptions,
    pub format: ImageFormat,
    pub quality: u8,
    pub channel: Channel,
    pub out_dir: Option<PathBuf>,
}

/// Outcome of one strategy on one image.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub strategy: Strategy,
    /// Wall-clock time of the compressor call only
    pub seconds: f64,
    pub encoded_bytes: u64,
    pub summary: CompressSummary,
}

/// Comparison of both strategies on one image.
#[derive(Debug, Clone)]
pub struct ImageResult {
    /// "Image N", numbered over successfully processed inputs
    pub label: String,
    pub original_bytes: u64,
    pub iterative: StrategyRun,
    pub recursive: StrategyRun,
}

/// Compare both strategies on every input, skipping unreadable ones.
pub fn run_all(inputs: &[PathBuf], config: &BenchConfig) -> Vec<ImageResult> {
    let mut results = Vec::with_capacity(inputs.len());
    for path in inputs {
        let label = format!("Image {}", results.len() + 1);
        match run_image(path, &label, config) {
            Ok(result) => {
                info!(
                    label = %result.label,
                    path = %path.display(),
                    iterative_s = result.iterative.seconds,
                    recursive_s = result.recursive.seconds,
                    "image compared"
                );
                for run in [&result.iterative, &result.recursive] {
                    debug!(
                        strategy = run.strategy.name(),
                        measured = run.summary.regions_measured,
                        collapsed = run.summary.regions_collapsed,
                        bytes = run.encoded_bytes,
                        "strategy result"
                    );
                }
                results.push(result);
            }
            Err(e) => error!(path = %path.display(), "skipping image: {e:#}"),
        }
    }
    results
}

fn run_image(path: &Path, label: &str, config: &BenchConfig) -> Result<ImageResult> {
    let raster = read_image(path).with_context(|| format!("failed to read {}", path.display()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string();
    compare(&raster, label, &stem, config)
}

/// Run both strategies on independent copies of `raster`.
pub fn compare(raster: &Raster, label: &str, stem: &str, config: &BenchConfig) -> Result<ImageResult> {
    let mut source = raster.to_mut();
    source.set_sample_channel(config.channel);
    let source: Raster = source.into();

    let original_bytes = encoded_size(&source, config.format, config.quality)
        .context("failed to encode original")?;
    let iterative = run_strategy(&source, Strategy::Iterative, stem, config)?;
    let recursive = run_strategy(&source, Strategy::Recursive, stem, config)?;

    Ok(ImageResult {
        label: label.to_string(),
        original_bytes,
        iterative,
        recursive,
    })
}

fn run_strategy(
    source: &Raster,
    strategy: Strategy,
    stem: &str,
    config: &BenchConfig,
) -> Result<StrategyRun> {
    let mut copy = source.to_mut();
    let start = Instant::now();
    let summary = strategy.compress(&mut copy, &config.options)?;
    let seconds = start.elapsed().as_secs_f64();
    let compressed: Raster = copy.into();

    let bytes = write_image_mem_with_quality(&compressed, config.format, config.quality)
        .with_context(|| format!("failed to encode {} output", strategy.name()))?;
    if let Some(dir) = &config.out_dir {
        let name = format!(
            "{}_{}.{}",
            stem,
            strategy.name().to_lowercase(),
            config.format.extension()
        );
        let path = dir.join(name);
        std::fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "kept compressed image");
    }

    Ok(StrategyRun {
        strategy,
        seconds,
        encoded_bytes: bytes.len() as u64,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionpress_test::blocky_raster;

    fn config(format: ImageFormat, out_dir: Option<PathBuf>) -> BenchConfig {
        BenchConfig {
            options: CompressOptions::new(10.0).unwrap(),
            format,
            quality: 75,
            channel: Channel::Blue,
            out_dir,
        }
    }

    #[test]
    fn test_compare_reports_both_strategies() {
        let raster = blocky_raster(64, 48, 8, 3, 9).unwrap();
        let result = compare(&raster, "Image 1", "blocky", &config(ImageFormat::Png, None)).unwrap();

        assert_eq!(result.label, "Image 1");
        assert_eq!(result.iterative.strategy, Strategy::Iterative);
        assert_eq!(result.recursive.strategy, Strategy::Recursive);
        assert!(result.original_bytes > 0);
        assert!(result.iterative.summary.regions_collapsed > 0);
        assert!(result.recursive.summary.regions_collapsed > 0);
        assert!(result.iterative.seconds >= 0.0);
    }

    #[test]
    fn test_compare_keeps_outputs() {
        let dir = std::env::temp_dir().join(format!("regionpress-bench-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let raster = blocky_raster(16, 16, 4, 0, 1).unwrap();
        compare(&raster, "Image 1", "tiles", &config(ImageFormat::Pnm, Some(dir.clone()))).unwrap();

        assert!(dir.join("tiles_iterative.pnm").exists());
        assert!(dir.join("tiles_recursive.pnm").exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_all_skips_unreadable_inputs() {
        let inputs = vec![PathBuf::from("/nonexistent/regionpress/missing.png")];
        let results = run_all(&inputs, &config(ImageFormat::Jpeg, None));
        assert!(results.is_empty());
    }
}
