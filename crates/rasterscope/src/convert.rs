//! Conversions between `image`-crate buffers and the core raster types.
//!
//! Decoding stays in the `image` crate; these helpers only reshape
//! already-decoded buffers, preserving channel layout and sample depth
//! where a matching depth exists.

use image::DynamicImage;

use rasterscope_core::{NormalizedBand, RasterError, RasterImage};

/// Ingest a decoded image, preserving its channel count and depth.
///
/// Exotic layouts without a matching `Samples` depth fall back through an
/// RGB8 conversion.
pub fn raster_from_dynamic(img: &DynamicImage) -> Result<RasterImage, RasterError> {
    let w = img.width() as usize;
    let h = img.height() as usize;
    match img {
        DynamicImage::ImageLuma8(buf) => RasterImage::from_u8(w, h, 1, buf.as_raw().clone()),
        DynamicImage::ImageLumaA8(buf) => RasterImage::from_u8(w, h, 2, buf.as_raw().clone()),
        DynamicImage::ImageRgb8(buf) => RasterImage::from_u8(w, h, 3, buf.as_raw().clone()),
        DynamicImage::ImageRgba8(buf) => RasterImage::from_u8(w, h, 4, buf.as_raw().clone()),
        DynamicImage::ImageLuma16(buf) => RasterImage::from_u16(w, h, 1, buf.as_raw().clone()),
        DynamicImage::ImageLumaA16(buf) => RasterImage::from_u16(w, h, 2, buf.as_raw().clone()),
        DynamicImage::ImageRgb16(buf) => RasterImage::from_u16(w, h, 3, buf.as_raw().clone()),
        DynamicImage::ImageRgba16(buf) => RasterImage::from_u16(w, h, 4, buf.as_raw().clone()),
        DynamicImage::ImageRgb32F(buf) => RasterImage::from_f32(w, h, 3, buf.as_raw().clone()),
        DynamicImage::ImageRgba32F(buf) => RasterImage::from_f32(w, h, 4, buf.as_raw().clone()),
        other => RasterImage::from_u8(w, h, 3, other.to_rgb8().into_raw()),
    }
}

/// Ingest an 8-bit grayscale buffer as a single-band raster.
pub fn raster_from_gray(img: &image::GrayImage) -> Result<RasterImage, RasterError> {
    RasterImage::from_u8(
        img.width() as usize,
        img.height() as usize,
        1,
        img.as_raw().clone(),
    )
}

/// Export a normalized (or binary) band for display or re-encoding.
pub fn gray_from_normalized(band: &NormalizedBand) -> Result<image::GrayImage, RasterError> {
    image::GrayImage::from_raw(band.width as u32, band.height as u32, band.data.clone()).ok_or(
        RasterError::ShapeMismatch {
            width: band.width,
            height: band.height,
            channels: 1,
            got: band.data.len(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterscope_core::Samples;

    #[test]
    fn rgb8_keeps_interleaved_layout() {
        let buf = image::RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let raster = raster_from_dynamic(&DynamicImage::ImageRgb8(buf)).unwrap();
        assert_eq!((raster.width, raster.height, raster.channels), (2, 1, 3));
        assert_eq!(raster.samples, Samples::U8(vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn luma16_keeps_depth() {
        let buf = image::ImageBuffer::from_raw(2, 1, vec![1000u16, 64000]).unwrap();
        let raster = raster_from_dynamic(&DynamicImage::ImageLuma16(buf)).unwrap();
        assert_eq!(raster.samples, Samples::U16(vec![1000, 64000]));
    }

    #[test]
    fn normalized_band_round_trips_through_gray() {
        let gray = image::GrayImage::from_raw(2, 2, vec![0, 85, 170, 255]).unwrap();
        let raster = raster_from_gray(&gray).unwrap();
        let band = rasterscope_core::select_band(&raster, 1).unwrap();
        let normalized = rasterscope_core::normalize(&band);
        let out = gray_from_normalized(&normalized).unwrap();
        assert_eq!(out.as_raw(), gray.as_raw());
    }
}
