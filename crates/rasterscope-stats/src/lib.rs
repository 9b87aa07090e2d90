//! Histogram binning and descriptive statistics for raster bands.
//!
//! Both operations consume anything implementing
//! [`PixelSource`](rasterscope_core::PixelSource), so raw and normalized
//! bands go through the same entry points. Every call recomputes from the
//! supplied plane; nothing is cached between calls.

mod histogram;
mod summary;

pub use histogram::{histogram, Histogram, HistogramError, INTENSITY_CEILING};
pub use summary::{summarize, StatisticsSummary, SummaryError};
