//! Image enhancement operations
//!
//! Tone reproduction curve (TRC) mapping and histogram equalization.

use crate::{FilterResult, require_gray};
use silhouette_core::{Image, ImageMut};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input pixel values [0..255] to output pixel values [0..255].
pub type TrcLut = [u8; 256];

/// Generate a histogram equalization TRC lookup table.
///
/// The lowest occupied intensity maps to 0. Every higher intensity `v`
/// maps to `round(255 * c(v) / (N - n0))`, where `c(v)` counts the pixels
/// above the lowest occupied intensity and at most `v`, `N` is the pixel
/// count and `n0` the count of the lowest occupied intensity. An image
/// with a single intensity gets the identity table.
///
/// # Arguments
///
/// * `image` - Input gray image
pub fn equalize_trc(image: &Image) -> FilterResult<TrcLut> {
    require_gray(image)?;
    let hist = image.gray_histogram()?;
    let total: u64 = hist.iter().map(|&c| c as u64).sum();

    let mut lut = [0u8; 256];
    let Some(lowest) = hist.iter().position(|&c| c != 0) else {
        return Ok(identity_lut());
    };
    if hist[lowest] as u64 == total {
        return Ok(identity_lut());
    }

    let scale = 255.0 / (total - hist[lowest] as u64) as f64;
    let mut cumul = 0u64;
    for (v, entry) in lut.iter_mut().enumerate().skip(lowest + 1) {
        cumul += hist[v] as u64;
        *entry = (cumul as f64 * scale).round().clamp(0.0, 255.0) as u8;
    }

    Ok(lut)
}

fn identity_lut() -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = i as u8;
    }
    lut
}

/// Apply a TRC lookup table to an image in-place.
///
/// Every sample is remapped, so RGB images have each channel remapped
/// independently.
pub fn trc_map(image: &mut ImageMut, lut: &TrcLut) {
    for v in image.data_mut() {
        *v = lut[*v as usize];
    }
}

/// Equalize the histogram of a gray image.
///
/// # Errors
///
/// Returns [`crate::FilterError::UnsupportedChannels`] for non-gray input.
pub fn equalize_hist(image: &Image) -> FilterResult<Image> {
    let lut = equalize_trc(image)?;
    let mut out = image.to_mut();
    trc_map(&mut out, &lut);
    Ok(out.into())
}
