//! Core types and utilities for raster band inspection.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! decode any file format and does *not* render anything: it receives
//! already-decoded sample buffers from the caller and hands back new
//! buffers, leaving I/O and display to the surrounding layers.

mod band;
mod error;
mod logger;
mod normalize;
mod raster;
mod select;

pub use band::{Band, NormalizedBand, PixelSource, Values};
pub use error::RasterError;
pub use normalize::normalize;
pub use raster::{BandLayout, GeoTags, RasterImage, Samples};
pub use select::{select_band, to_luminance};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
