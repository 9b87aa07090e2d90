//! Inspect a raster image from the command line.
//!
//! Decodes the image with the `image` crate, runs the analysis pipeline
//! and prints a JSON report to stdout. The normalized (or binary) band can
//! be written out as a grayscale PNG with `--out`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use serde::Serialize;

use rasterscope::convert::{gray_from_normalized, raster_from_dynamic};
use rasterscope::{analyze, AnalysisConfig, Histogram, StatisticsSummary};

#[derive(Parser, Debug)]
#[command(
    name = "rasterscope",
    version,
    about = "Band, histogram and Otsu inspection for raster images"
)]
struct Cli {
    /// Image file to analyze (any format the `image` crate decodes).
    image: PathBuf,

    /// 1-based band to inspect.
    #[arg(long, default_value_t = 1)]
    band: u32,

    /// Binarize the band with Otsu's method before analysis.
    #[arg(long)]
    binarize: bool,

    /// Histogram bin count (32..=1024).
    #[arg(long, default_value_t = 256)]
    bins: usize,

    /// Write the analyzed band as a grayscale PNG to this path.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    image: &'a str,
    width: usize,
    height: usize,
    channels: usize,
    band: u32,
    threshold: Option<u8>,
    statistics: &'a StatisticsSummary,
    histogram: &'a Histogram,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = rasterscope::core::init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = image::ImageReader::open(&cli.image)?.decode()?;
    let raster = raster_from_dynamic(&decoded)?;

    let cfg = AnalysisConfig {
        band: cli.band,
        binarize: cli.binarize,
        bin_count: cli.bins,
    };
    let report = analyze(&raster, &cfg)?;

    if let Some(path) = &cli.out {
        let displayed = report
            .threshold
            .as_ref()
            .map_or(&report.band, |t| &t.binary);
        gray_from_normalized(displayed)?.save(path)?;
        log::info!("wrote {}", path.display());
    }

    let image_name = cli.image.display().to_string();
    let json = Report {
        image: &image_name,
        width: raster.width,
        height: raster.height,
        channels: raster.channels,
        band: cli.band,
        threshold: report.threshold.as_ref().map(|t| t.threshold),
        statistics: &report.statistics,
        histogram: &report.histogram,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
