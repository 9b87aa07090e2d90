use serde::{Deserialize, Serialize};

use rasterscope_core::PixelSource;

/// Descriptive statistics over one band, computed over every pixel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    /// Average of the two middle values for even pixel counts.
    pub median: f64,
    /// Population standard deviation (divide by N).
    pub std_dev: f64,
    /// Population variance (divide by N).
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    pub pixel_count: usize,
}

impl StatisticsSummary {
    /// Name/value pairs in display order, for tabular rendering.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("mean", self.mean),
            ("median", self.median),
            ("std_dev", self.std_dev),
            ("variance", self.variance),
            ("min", self.min),
            ("max", self.max),
            ("range", self.range),
            ("pixel_count", self.pixel_count as f64),
        ]
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("statistics input has no pixels")]
    EmptyInput,
}

/// Compute the full statistics set for a plane.
///
/// Sorts a widened copy once for min/max/median; mean and variance are
/// taken over the same copy so every figure describes the identical pixel
/// set.
pub fn summarize<S: PixelSource>(src: &S) -> Result<StatisticsSummary, SummaryError> {
    let mut values: Vec<f64> = src.values().collect();
    let n = values.len();
    if n == 0 {
        return Err(SummaryError::EmptyInput);
    }
    values.sort_unstable_by(f64::total_cmp);

    let min = values[0];
    let max = values[n - 1];
    let median = if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    };
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / n as f64;

    Ok(StatisticsSummary {
        mean,
        median,
        std_dev: variance.sqrt(),
        variance,
        min,
        max,
        range: max - min,
        pixel_count: n,
    })
}
