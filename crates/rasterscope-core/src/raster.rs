use serde::{Deserialize, Serialize};

use crate::error::RasterError;

/// Pixel sample buffer for one of the supported depths.
///
/// Samples are stored row-major. Multi-band images interleave channels per
/// pixel (`[r, g, b, r, g, b, ..]`), matching the layout common decoders
/// hand out.
#[derive(Clone, Debug, PartialEq)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(data) => data.len(),
            Samples::U16(data) => data.len(),
            Samples::F32(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for samples already in the 8-bit domain.
    pub fn is_u8(&self) -> bool {
        matches!(self, Samples::U8(_))
    }
}

/// Channel layout of a raster, resolved once at band-selection entry so
/// later stages never re-inspect dimensionality.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BandLayout {
    /// Single plane, band selection is a no-op.
    Grayscale,
    /// Interleaved planes; holds the channel count.
    Multiband(usize),
}

/// Opaque display metadata attached by the decoding side (projection name,
/// acquisition info, ...). No pipeline stage ever reads it; it rides along
/// for the rendering layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoTags {
    pub entries: Vec<(String, String)>,
}

/// A decoded raster image: dimensions plus an interleaved sample buffer.
///
/// Constructed by the decoding collaborator, borrowed by every pipeline
/// stage, never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub samples: Samples,
    pub tags: Option<GeoTags>,
}

impl RasterImage {
    /// Build a raster, validating that the buffer matches the claimed shape.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        samples: Samples,
    ) -> Result<Self, RasterError> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(RasterError::EmptyImage {
                width,
                height,
                channels,
            });
        }
        let expected = width * height * channels;
        if samples.len() != expected {
            return Err(RasterError::ShapeMismatch {
                width,
                height,
                channels,
                got: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
            tags: None,
        })
    }

    pub fn from_u8(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, RasterError> {
        Self::new(width, height, channels, Samples::U8(data))
    }

    pub fn from_u16(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u16>,
    ) -> Result<Self, RasterError> {
        Self::new(width, height, channels, Samples::U16(data))
    }

    pub fn from_f32(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, RasterError> {
        Self::new(width, height, channels, Samples::F32(data))
    }

    /// Attach decoder metadata for pass-through display.
    pub fn with_tags(mut self, tags: GeoTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn layout(&self) -> BandLayout {
        if self.channels == 1 {
            BandLayout::Grayscale
        } else {
            BandLayout::Multiband(self.channels)
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
