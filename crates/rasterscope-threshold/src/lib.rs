//! Otsu threshold selection and binarization over normalized 8-bit bands.
//!
//! The threshold search runs one histogram pass over the band and then a
//! 256-step scan with running sums, so its cost is O(pixels + 256)
//! regardless of how many candidate thresholds exist.

use log::debug;

use rasterscope_core::NormalizedBand;

/// Value written for pixels strictly above the threshold.
pub const FOREGROUND: u8 = 255;
/// Value written for pixels at or below the threshold.
pub const BACKGROUND: u8 = 0;

/// Threshold plus the binary band it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdResult {
    /// Chosen cut in the normalized domain.
    pub threshold: u8,
    /// Same shape as the input, containing only 0 and 255.
    pub binary: NormalizedBand,
}

/// Pick the threshold maximizing between-class variance (Otsu's method).
///
/// Candidates run from 0 to 254; ties keep the smallest threshold. A band
/// with a single intensity level has no separation to find and yields 0.
pub fn otsu_threshold(band: &NormalizedBand) -> u8 {
    let mut hist = [0u64; 256];
    for &v in &band.data {
        hist[v as usize] += 1;
    }

    let total = band.data.len() as f64;
    let mut sum_total = 0.0;
    for (level, &count) in hist.iter().enumerate() {
        sum_total += level as f64 * count as f64;
    }

    let mut sum_below = 0.0;
    let mut weight_below = 0.0;
    let mut best_var = 0.0;
    let mut best_t = 0u8;

    for t in 0..255usize {
        weight_below += hist[t] as f64;
        if weight_below == 0.0 {
            continue;
        }
        let weight_above = total - weight_below;
        if weight_above == 0.0 {
            break;
        }

        sum_below += t as f64 * hist[t] as f64;
        let mean_below = sum_below / weight_below;
        let mean_above = (sum_total - sum_below) / weight_above;

        let diff = mean_below - mean_above;
        let between = weight_below * weight_above * diff * diff;
        if between > best_var {
            best_var = between;
            best_t = t as u8;
        }
    }

    debug!("otsu threshold {best_t} over {} pixels", band.data.len());
    best_t
}

/// Split at `threshold`: strictly greater becomes 255, everything else 0.
///
/// Pixels exactly at the threshold are background; callers comparing
/// against other thresholding code should check its convention for edge
/// pixels.
pub fn binarize(band: &NormalizedBand, threshold: u8) -> NormalizedBand {
    let data = band
        .data
        .iter()
        .map(|&v| if v > threshold { FOREGROUND } else { BACKGROUND })
        .collect();
    NormalizedBand {
        width: band.width,
        height: band.height,
        data,
    }
}

/// Compute the Otsu threshold and apply it in one step.
///
/// A constant band reports threshold 0 with an all-zero mask, rather than
/// lighting every pixel of a flat nonzero band as foreground.
pub fn threshold_otsu(band: &NormalizedBand) -> ThresholdResult {
    if is_flat(&band.data) {
        return ThresholdResult {
            threshold: 0,
            binary: NormalizedBand {
                width: band.width,
                height: band.height,
                data: vec![BACKGROUND; band.data.len()],
            },
        };
    }
    let threshold = otsu_threshold(band);
    ThresholdResult {
        threshold,
        binary: binarize(band, threshold),
    }
}

fn is_flat(data: &[u8]) -> bool {
    match data.first() {
        Some(&first) => data.iter().all(|&v| v == first),
        None => true,
    }
}
