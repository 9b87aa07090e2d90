use serde::{Deserialize, Serialize};

use rasterscope_core::PixelSource;

/// Upper edge of the fixed intensity domain every histogram covers.
pub const INTENSITY_CEILING: f64 = 256.0;

/// Binned intensity counts over the fixed domain [0, 256).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Per-bin pixel counts, length = bin count.
    pub counts: Vec<u64>,
    /// Bin boundaries, length = bin count + 1, strictly increasing.
    pub edges: Vec<f64>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Total pixels binned; always equals the input pixel count.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HistogramError {
    #[error("bin count must be at least 1, got {bins}")]
    InvalidBinCount { bins: usize },
    #[error("histogram input has no pixels")]
    EmptyInput,
}

/// Bin a plane's intensities into `bins` equal-width intervals over
/// [0, 256).
///
/// Bins are half-open `[lo, hi)` except the final one, which also takes
/// `hi` itself, so a stray sample at exactly 256 lands in the last bin.
/// Values outside the domain are clamped into the nearest edge bin, which
/// keeps the count conservation law intact for unnormalized float bands.
pub fn histogram<S: PixelSource>(src: &S, bins: usize) -> Result<Histogram, HistogramError> {
    if bins == 0 {
        return Err(HistogramError::InvalidBinCount { bins });
    }
    if src.pixel_count() == 0 {
        return Err(HistogramError::EmptyInput);
    }

    let width = INTENSITY_CEILING / bins as f64;
    let mut counts = vec![0u64; bins];
    for v in src.values() {
        let idx = ((v / width).floor().max(0.0) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let edges = (0..=bins).map(|i| width * i as f64).collect();
    Ok(Histogram { counts, edges })
}
