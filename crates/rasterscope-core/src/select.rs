use log::warn;

use crate::band::Band;
use crate::error::RasterError;
use crate::raster::{BandLayout, RasterImage, Samples};

/// Extract the 2-D plane for the 1-based band index `band`.
///
/// Grayscale images ignore the index. Multiband images return channel
/// `band - 1`; an index beyond the channel count falls back to the first
/// channel (with a warning) so a stale slider selection upstream can never
/// take the whole request down. Index 0 has no 1-based meaning and is
/// rejected.
pub fn select_band(img: &RasterImage, band: u32) -> Result<Band, RasterError> {
    if band == 0 {
        return Err(RasterError::InvalidBandIndex { band });
    }
    let channel = match img.layout() {
        BandLayout::Grayscale => 0,
        BandLayout::Multiband(channels) => {
            let idx = (band - 1) as usize;
            if idx < channels {
                idx
            } else {
                warn!("band {band} out of range for a {channels}-band image, using band 1");
                0
            }
        }
    };
    Ok(extract_channel(img, channel))
}

/// Collapse an image into a single luminance plane using Rec. 601 weights
/// (0.299 R + 0.587 G + 0.114 B), the grayscale conversion common imaging
/// libraries apply. Extra channels beyond the first three (e.g. alpha) are
/// ignored; a grayscale image passes through as its only band. Output keeps
/// the input sample depth, rounding integer depths to nearest.
pub fn to_luminance(img: &RasterImage) -> Result<Band, RasterError> {
    match img.layout() {
        BandLayout::Grayscale => Ok(extract_channel(img, 0)),
        BandLayout::Multiband(channels) if channels >= 3 => Ok(weighted_gray(img)),
        BandLayout::Multiband(channels) => Err(RasterError::UnsupportedLayout { channels }),
    }
}

fn extract_channel(img: &RasterImage, channel: usize) -> Band {
    let step = img.channels;
    let samples = match &img.samples {
        Samples::U8(data) => Samples::U8(strided(data, channel, step)),
        Samples::U16(data) => Samples::U16(strided(data, channel, step)),
        Samples::F32(data) => Samples::F32(strided(data, channel, step)),
    };
    Band {
        width: img.width,
        height: img.height,
        samples,
    }
}

fn strided<T: Copy>(data: &[T], offset: usize, step: usize) -> Vec<T> {
    data.iter().skip(offset).step_by(step).copied().collect()
}

fn weighted_gray(img: &RasterImage) -> Band {
    let step = img.channels;
    let luma = |r: f64, g: f64, b: f64| 0.299 * r + 0.587 * g + 0.114 * b;
    let samples = match &img.samples {
        Samples::U8(data) => Samples::U8(
            data.chunks_exact(step)
                .map(|px| {
                    luma(f64::from(px[0]), f64::from(px[1]), f64::from(px[2])).round() as u8
                })
                .collect(),
        ),
        Samples::U16(data) => Samples::U16(
            data.chunks_exact(step)
                .map(|px| {
                    luma(f64::from(px[0]), f64::from(px[1]), f64::from(px[2])).round() as u16
                })
                .collect(),
        ),
        Samples::F32(data) => Samples::F32(
            data.chunks_exact(step)
                .map(|px| luma(f64::from(px[0]), f64::from(px[1]), f64::from(px[2])) as f32)
                .collect(),
        ),
    };
    Band {
        width: img.width,
        height: img.height,
        samples,
    }
}
