//! High-level facade crate for the `rasterscope-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying analysis crates
//! - a one-call [`analyze`] pipeline that mirrors what an interactive
//!   viewer recomputes per widget change: band selection, 8-bit
//!   normalization, optional Otsu binarization, histogram and statistics
//! - (feature-gated) conversions between `image`-crate buffers and the
//!   core raster types, plus a small CLI.
//!
//! ## Quickstart
//!
//! ```no_run
//! use rasterscope::{analyze, AnalysisConfig};
//! use rasterscope::convert::raster_from_dynamic;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let decoded = ImageReader::open("scene.tif")?.decode()?;
//! let raster = raster_from_dynamic(&decoded)?;
//!
//! let report = analyze(&raster, &AnalysisConfig::default())?;
//! println!("mean intensity: {:.2}", report.statistics.mean);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `rasterscope::core`: raster/band types, band selection, normalization.
//! - `rasterscope::stats`: histogram binning and descriptive statistics.
//! - `rasterscope::threshold`: Otsu threshold selection and binarization.
//! - `rasterscope::convert` (feature `image`): `image`-crate ingestion/export.

pub use rasterscope_core as core;
pub use rasterscope_stats as stats;
pub use rasterscope_threshold as threshold;

pub use rasterscope_core::{
    normalize, select_band, to_luminance, Band, BandLayout, GeoTags, NormalizedBand, PixelSource,
    RasterError, RasterImage, Samples,
};
pub use rasterscope_stats::{Histogram, StatisticsSummary};
pub use rasterscope_threshold::{binarize, otsu_threshold, threshold_otsu, ThresholdResult};

mod analyze;
pub use analyze::{
    analyze, AnalysisConfig, AnalysisReport, AnalyzeError, MAX_BIN_COUNT, MIN_BIN_COUNT,
};

#[cfg(feature = "image")]
pub mod convert;
