/// Errors produced by the core raster stages.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("empty image (width={width}, height={height}, channels={channels})")]
    EmptyImage {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("sample buffer length {got} does not match {width}x{height}x{channels}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        channels: usize,
        got: usize,
    },

    #[error("band index {band} is not a valid 1-based selection")]
    InvalidBandIndex { band: u32 },

    #[error("luminance conversion expects 1 or at least 3 channels, image has {channels}")]
    UnsupportedLayout { channels: usize },
}
