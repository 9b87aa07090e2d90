use crate::band::{Band, NormalizedBand};
use crate::raster::Samples;

/// Rescale a band into the 8-bit domain.
///
/// 8-bit input is copied through unchanged. Anything else is min-max
/// mapped linearly onto [0, 255] with round-to-nearest. A constant band
/// has no range to stretch and maps to all zeros.
pub fn normalize(band: &Band) -> NormalizedBand {
    let data = match &band.samples {
        Samples::U8(data) => data.clone(),
        Samples::U16(data) => stretch(data),
        Samples::F32(data) => stretch(data),
    };
    NormalizedBand {
        width: band.width,
        height: band.height,
        data,
    }
}

fn stretch<T: Copy + Into<f64>>(data: &[T]) -> Vec<u8> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in data {
        let v: f64 = v.into();
        min = min.min(v);
        max = max.max(v);
    }
    if !(max > min) {
        // Constant (or empty) band: nothing to stretch.
        return vec![0; data.len()];
    }
    // Normalize to [0, 1] before scaling so an exact midpoint (127.5)
    // rounds to nearest instead of drifting below it through a
    // precomputed 255/range factor.
    let range = max - min;
    data.iter()
        .map(|&v| ((v.into() - min) / range * 255.0).round() as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(samples: Samples, width: usize, height: usize) -> Band {
        Band {
            width,
            height,
            samples,
        }
    }

    #[test]
    fn u8_input_passes_through() {
        let b = band(Samples::U8(vec![0, 17, 255, 3]), 2, 2);
        let n = normalize(&b);
        assert_eq!(n.data, vec![0, 17, 255, 3]);
    }

    #[test]
    fn u16_range_maps_onto_full_domain() {
        let b = band(Samples::U16(vec![100, 300, 500]), 3, 1);
        let n = normalize(&b);
        assert_eq!(n.data, vec![0, 128, 255]);
    }

    #[test]
    fn exact_midpoint_rounds_up() {
        // (1 - 0) / 2 * 255 = 127.5 exactly; round-to-nearest gives 128.
        let b = band(Samples::U16(vec![0, 1, 2]), 3, 1);
        let n = normalize(&b);
        assert_eq!(n.data, vec![0, 128, 255]);
    }

    #[test]
    fn float_band_rounds_to_nearest() {
        let b = band(Samples::F32(vec![0.0, 1.0, 3.0]), 3, 1);
        let n = normalize(&b);
        // (1 - 0) / 3 * 255 = 85.0
        assert_eq!(n.data, vec![0, 85, 255]);
    }

    #[test]
    fn constant_band_maps_to_zero() {
        let b = band(Samples::F32(vec![4.2; 6]), 3, 2);
        let n = normalize(&b);
        assert_eq!(n.data, vec![0; 6]);
    }

    #[test]
    fn negative_floats_are_shifted_into_range() {
        let b = band(Samples::F32(vec![-2.0, 0.0, 2.0]), 3, 1);
        let n = normalize(&b);
        assert_eq!(n.data, vec![0, 128, 255]);
    }

    #[test]
    fn output_shape_matches_input() {
        let b = band(Samples::U16(vec![9; 12]), 4, 3);
        let n = normalize(&b);
        assert_eq!((n.width, n.height, n.data.len()), (4, 3, 12));
    }
}
