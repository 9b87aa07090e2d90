use crate::raster::Samples;

/// One plane of a raster image, one sample per pixel, any supported depth.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub width: usize,
    pub height: usize,
    pub samples: Samples,
}

/// A band rescaled into the 8-bit domain [0, 255].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedBand {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // row-major, len = width * height
}

enum SampleSlice<'a> {
    U8(&'a [u8]),
    U16(&'a [u16]),
    F32(&'a [f32]),
}

/// Iterator over a plane's samples widened to `f64`, row-major.
pub struct Values<'a> {
    slice: SampleSlice<'a>,
    idx: usize,
}

impl Values<'_> {
    fn total_len(&self) -> usize {
        match self.slice {
            SampleSlice::U8(s) => s.len(),
            SampleSlice::U16(s) => s.len(),
            SampleSlice::F32(s) => s.len(),
        }
    }
}

impl Iterator for Values<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let v = match self.slice {
            SampleSlice::U8(s) => f64::from(*s.get(self.idx)?),
            SampleSlice::U16(s) => f64::from(*s.get(self.idx)?),
            SampleSlice::F32(s) => f64::from(*s.get(self.idx)?),
        };
        self.idx += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Values<'_> {}

/// Read access to any 2-D plane the analysis stages can consume.
///
/// Histogram and statistics only need dimensions and a widened sample
/// stream, so they accept raw and normalized bands through the same seam.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Samples widened to `f64`, row-major.
    fn values(&self) -> Values<'_>;

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }
}

impl PixelSource for Band {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn values(&self) -> Values<'_> {
        let slice = match &self.samples {
            Samples::U8(data) => SampleSlice::U8(data),
            Samples::U16(data) => SampleSlice::U16(data),
            Samples::F32(data) => SampleSlice::F32(data),
        };
        Values { slice, idx: 0 }
    }
}

impl PixelSource for NormalizedBand {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn values(&self) -> Values<'_> {
        Values {
            slice: SampleSlice::U8(&self.data),
            idx: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_widen_every_depth() {
        let band = Band {
            width: 2,
            height: 1,
            samples: Samples::U16(vec![3, 35_000]),
        };
        let vals: Vec<f64> = band.values().collect();
        assert_eq!(vals, vec![3.0, 35_000.0]);

        let band = Band {
            width: 2,
            height: 1,
            samples: Samples::F32(vec![0.5, -2.0]),
        };
        let vals: Vec<f64> = band.values().collect();
        assert_eq!(vals, vec![0.5, -2.0]);
    }

    #[test]
    fn values_is_exact_size() {
        let band = NormalizedBand {
            width: 3,
            height: 2,
            data: vec![1, 2, 3, 4, 5, 6],
        };
        let mut it = band.values();
        assert_eq!(it.len(), 6);
        it.next();
        assert_eq!(it.len(), 5);
        assert_eq!(band.pixel_count(), 6);
    }
}
