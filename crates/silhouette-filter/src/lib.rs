//! silhouette-filter - Image filtering operations
//!
//! This crate provides the gray-level filters of the extraction pipeline:
//!
//! - Histogram equalization ([`enhance`])
//! - Bilateral filtering, an edge-preserving smoothing ([`bilateral`])

pub mod bilateral;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use bilateral::{BilateralParams, bilateral_filter, bilateral_gray, make_range_kernel};
pub use enhance::{TrcLut, equalize_hist, equalize_trc, trc_map};

use silhouette_core::Image;

/// Fail unless the image is single-channel.
pub(crate) fn require_gray(image: &Image) -> FilterResult<()> {
    if !image.is_gray() {
        return Err(FilterError::UnsupportedChannels {
            expected: "1 (gray)",
            actual: image.channels().count(),
        });
    }
    Ok(())
}
