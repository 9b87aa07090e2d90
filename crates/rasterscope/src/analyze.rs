use serde::{Deserialize, Serialize};

use rasterscope_core::{normalize, select_band, NormalizedBand, RasterError, RasterImage};
use rasterscope_stats as stats;
use rasterscope_stats::{Histogram, HistogramError, StatisticsSummary, SummaryError};
use rasterscope_threshold::{threshold_otsu, ThresholdResult};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Smallest histogram resolution the pipeline configuration accepts.
pub const MIN_BIN_COUNT: usize = 32;
/// Largest histogram resolution the pipeline configuration accepts.
pub const MAX_BIN_COUNT: usize = 1024;

/// Per-request analysis settings, supplied by the UI layer.
///
/// Immutable per call; the pipeline holds no session state between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// 1-based band selection.
    pub band: u32,
    /// Run Otsu binarization on the normalized band.
    pub binarize: bool,
    /// Histogram resolution, within `MIN_BIN_COUNT..=MAX_BIN_COUNT`.
    pub bin_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            band: 1,
            binarize: false,
            bin_count: 256,
        }
    }
}

impl AnalysisConfig {
    /// Check the configuration before any stage runs.
    pub fn validate(&self) -> Result<(), AnalyzeError> {
        if !(MIN_BIN_COUNT..=MAX_BIN_COUNT).contains(&self.bin_count) {
            return Err(AnalyzeError::InvalidBinCount {
                bin_count: self.bin_count,
                min: MIN_BIN_COUNT,
                max: MAX_BIN_COUNT,
            });
        }
        Ok(())
    }
}

/// Errors produced by the end-to-end pipeline.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("bin count {bin_count} outside supported range {min}..={max}")]
    InvalidBinCount {
        bin_count: usize,
        min: usize,
        max: usize,
    },

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Histogram(#[from] HistogramError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Everything one analysis pass produces for the rendering layer.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    /// The selected band in the 8-bit domain.
    pub band: NormalizedBand,
    /// Present when binarization was requested.
    pub threshold: Option<ThresholdResult>,
    /// Histogram of the displayed plane (binary when binarization is on).
    pub histogram: Histogram,
    /// Statistics of the displayed plane.
    pub statistics: StatisticsSummary,
}

/// Run the full inspection pipeline on one decoded image.
///
/// Selects the requested band, normalizes it into the 8-bit domain,
/// optionally binarizes with Otsu, then bins and summarizes the plane the
/// viewer will actually display: the binary one when binarization is on,
/// the normalized band otherwise.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, cfg),
        fields(
            width = img.width,
            height = img.height,
            channels = img.channels,
            band = cfg.band,
            bins = cfg.bin_count
        )
    )
)]
pub fn analyze(img: &RasterImage, cfg: &AnalysisConfig) -> Result<AnalysisReport, AnalyzeError> {
    cfg.validate()?;

    let band = select_band(img, cfg.band)?;
    let normalized = normalize(&band);

    let threshold = if cfg.binarize {
        Some(threshold_otsu(&normalized))
    } else {
        None
    };

    let displayed: &NormalizedBand = threshold.as_ref().map_or(&normalized, |t| &t.binary);
    let histogram = stats::histogram(displayed, cfg.bin_count)?;
    let statistics = stats::summarize(displayed)?;

    log::debug!(
        "analyzed {}x{} band {} ({} bins, binarize={})",
        img.width,
        img.height,
        cfg.band,
        cfg.bin_count,
        cfg.binarize
    );

    Ok(AnalysisReport {
        band: normalized,
        threshold,
        histogram,
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_raster() -> RasterImage {
        let data: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
        RasterImage::from_u8(8, 8, 1, data).unwrap()
    }

    #[test]
    fn default_config_matches_viewer_defaults() {
        let cfg = AnalysisConfig::default();
        assert_eq!((cfg.band, cfg.binarize, cfg.bin_count), (1, false, 256));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bin_count_outside_range_is_rejected() {
        for bin_count in [0, 31, 1025] {
            let cfg = AnalysisConfig {
                bin_count,
                ..AnalysisConfig::default()
            };
            let err = analyze(&gradient_raster(), &cfg).unwrap_err();
            assert!(
                matches!(err, AnalyzeError::InvalidBinCount { .. }),
                "bin_count={bin_count}"
            );
        }
    }

    #[test]
    fn report_without_binarization_has_no_threshold() {
        let report = analyze(&gradient_raster(), &AnalysisConfig::default()).unwrap();
        assert!(report.threshold.is_none());
        assert_eq!(report.histogram.total(), 64);
        assert_eq!(report.statistics.pixel_count, 64);
    }

    #[test]
    fn binarization_switches_the_analyzed_plane() {
        let cfg = AnalysisConfig {
            binarize: true,
            ..AnalysisConfig::default()
        };
        let report = analyze(&gradient_raster(), &cfg).unwrap();
        let result = report.threshold.expect("binarization requested");
        assert!(result.binary.data.iter().all(|&v| v == 0 || v == 255));
        // Statistics describe the binary plane, so only two levels remain.
        assert!(report.statistics.min == 0.0);
        assert!(report.statistics.max == 255.0);
    }

    #[test]
    fn zero_band_index_fails_fast() {
        let cfg = AnalysisConfig {
            band: 0,
            ..AnalysisConfig::default()
        };
        let err = analyze(&gradient_raster(), &cfg).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::Raster(RasterError::InvalidBandIndex { band: 0 })
        ));
    }
}
