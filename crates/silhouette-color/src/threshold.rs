//! Band thresholding
//!
//! Converts gray images into {0, 255} masks:
//! - [`threshold_band`] keeps samples inside an inclusive band
//! - [`threshold_nonzero`] keeps every nonzero sample, restoring a binary
//!   mask after it has been smoothed

use crate::{ColorError, ColorResult};
use silhouette_core::{BACKGROUND, Channels, FOREGROUND, Image};

/// Inclusive intensity band `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdBand {
    /// Lowest intensity kept
    pub min: u8,
    /// Highest intensity kept
    pub max: u8,
}

impl ThresholdBand {
    /// Create a band, rejecting `min > max`.
    pub fn new(min: u8, max: u8) -> ColorResult<Self> {
        let band = Self { min, max };
        band.validate()?;
        Ok(band)
    }

    /// Check that the band is not inverted.
    pub fn validate(&self) -> ColorResult<()> {
        if self.min > self.max {
            return Err(ColorError::InvalidParameters(format!(
                "threshold band is inverted: {}..={}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Whether `v` lies inside the band.
    #[inline]
    pub fn contains(&self, v: u8) -> bool {
        self.min <= v && v <= self.max
    }
}

fn binarize(image: &Image, keep: impl Fn(u8) -> bool) -> ColorResult<Image> {
    if !image.is_gray() {
        return Err(ColorError::UnsupportedChannels {
            expected: "1 (gray)",
            actual: image.channels().count(),
        });
    }
    let data = image
        .data()
        .iter()
        .map(|&v| if keep(v) { FOREGROUND } else { BACKGROUND })
        .collect();
    Ok(Image::from_vec(
        image.width(),
        image.height(),
        Channels::Gray,
        data,
    )?)
}

/// Binarize a gray image against an inclusive band.
///
/// Samples with `min <= v <= max` become 255, all others 0.
///
/// # Errors
///
/// Returns an error if the image is not gray or the band is inverted.
pub fn threshold_band(image: &Image, band: ThresholdBand) -> ColorResult<Image> {
    band.validate()?;
    binarize(image, |v| band.contains(v))
}

/// Binarize a gray image at zero: nonzero samples become 255.
pub fn threshold_nonzero(image: &Image) -> ColorResult<Image> {
    binarize(image, |v| v != 0)
}
