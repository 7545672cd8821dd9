use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use regionpress_compress::{CompressOptions, RemainderPolicy};
use regionpress_core::{Channel, ImageFormat};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod bench;
mod chart;
mod report;

use bench::BenchConfig;

#[derive(Parser, Debug)]
#[command(name = "regionpress")]
#[command(about = "Compare recursive and iterative region compression on images")]
struct Cli {
    /// Input images (PNG, JPEG or binary PNM)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Largest channel standard deviation that still collapses a region
    #[arg(long, default_value_t = 10.0)]
    threshold: f64,
    /// Encoding used to measure output sizes
    #[arg(long, value_enum, default_value_t = OutputFormat::Jpeg)]
    format: OutputFormat,
    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
    /// Recursive handling of odd-sized regions
    #[arg(long, value_enum, default_value_t = Remainder::Skip)]
    remainder: Remainder,
    /// Colour channel the statistics are computed on
    #[arg(long, value_enum, default_value_t = SampleChannel::Blue)]
    channel: SampleChannel,
    /// Keep the compressed images in this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Write a bar chart of the timings as PNG
    #[arg(long)]
    chart: Option<PathBuf>,
    /// Log filter, e.g. "debug" or "regionpress_compress=trace" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Jpeg,
    Png,
    Pnm,
}

impl From<OutputFormat> for ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Pnm => ImageFormat::Pnm,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Remainder {
    Skip,
    Cover,
}

impl From<Remainder> for RemainderPolicy {
    fn from(remainder: Remainder) -> Self {
        match remainder {
            Remainder::Skip => RemainderPolicy::Skip,
            Remainder::Cover => RemainderPolicy::Cover,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SampleChannel {
    Red,
    Green,
    Blue,
}

impl From<SampleChannel> for Channel {
    fn from(channel: SampleChannel) -> Self {
        match channel {
            SampleChannel::Red => Channel::Red,
            SampleChannel::Green => Channel::Green,
            SampleChannel::Blue => Channel::Blue,
        }
    }
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log filter {level:?}"))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let options = CompressOptions::new(cli.threshold)
        .context("invalid --threshold")?
        .with_remainder(cli.remainder.into());
    let config = BenchConfig {
        options,
        format: cli.format.into(),
        quality: cli.quality,
        channel: cli.channel.into(),
        out_dir: cli.out_dir,
    };
    if let Some(dir) = &config.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    info!(
        images = cli.inputs.len(),
        threshold = cli.threshold,
        format = ?config.format,
        "starting comparison"
    );
    let results = bench::run_all(&cli.inputs, &config);
    print!("{}", report::render(&results));

    if results.is_empty() {
        bail!("none of the {} input images could be processed", cli.inputs.len());
    }
    if results.len() < cli.inputs.len() {
        warn!(
            skipped = cli.inputs.len() - results.len(),
            "some images were skipped"
        );
    }

    if let Some(path) = &cli.chart {
        let chart = chart::render_chart(&results)?;
        regionpress_io::write_image(&chart, path, ImageFormat::Png)
            .with_context(|| format!("failed to write chart {}", path.display()))?;
        info!(path = %path.display(), "wrote comparison chart");
    }

    Ok(())
}
