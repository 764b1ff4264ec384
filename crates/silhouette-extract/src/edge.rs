//! Edge mask construction
//!
//! Two half-masks are built from independent colour features and
//! intersected, so only outline pixels that both features agree on
//! survive:
//!
//! 1. **Half A**: the image formed from (Lab b\*, equalized Luv v\*, red)
//!    is converted to gray, equalized, smoothed, band-thresholded and
//!    dilated.
//! 2. **Half B**: the equalized XYZ Z plane is smoothed and
//!    band-thresholded.
//! 3. **Combine**: the intersection is dilated, smoothed and
//!    re-binarized.

use crate::{ExtractResult, SegmentationConfig};
use silhouette_color::{ChannelProjections, convert_to_gray, threshold_band, threshold_nonzero};
use silhouette_core::Image;
use silhouette_filter::{BilateralParams, bilateral_filter, equalize_hist};
use silhouette_morph::{Sel, dilate_n};

/// Smooth a mask and turn every nonzero sample back into foreground.
///
/// The bilateral filter leaves a {0, 255} mask almost binary; the
/// re-binarization keeps the mask binary and grows the mask by the
/// pixels the smoothing lifted off zero.
pub fn smooth_mask(mask: &Image, params: &BilateralParams) -> ExtractResult<Image> {
    let smoothed = bilateral_filter(mask, params)?;
    Ok(threshold_nonzero(&smoothed)?)
}

/// Build the first half-mask from the Lab, Luv and red projections.
pub fn edge_half_a(
    projections: &ChannelProjections,
    config: &SegmentationConfig,
    sel: &Sel,
) -> ExtractResult<Image> {
    let luv_v_eq = equalize_hist(&projections.luv_v)?;
    let merged = Image::create_rgb_image(&projections.lab_b, &luv_v_eq, &projections.red)?;

    let gray = convert_to_gray(&merged)?;
    let gray = equalize_hist(&gray)?;
    let gray = bilateral_filter(&gray, &config.smoothing)?;

    let band = threshold_band(&gray, config.band_a)?;
    Ok(dilate_n(&band, sel, config.edge_dilate_iterations)?)
}

/// Build the second half-mask from the XYZ Z projection.
pub fn edge_half_b(
    projections: &ChannelProjections,
    config: &SegmentationConfig,
) -> ExtractResult<Image> {
    let z = equalize_hist(&projections.xyz_z)?;
    let z = bilateral_filter(&z, &config.smoothing)?;
    Ok(threshold_band(&z, config.band_b)?)
}

/// Intersect the half-masks and grow the result into a closed outline.
pub fn combine_edges(
    half_a: &Image,
    half_b: &Image,
    config: &SegmentationConfig,
    sel: &Sel,
) -> ExtractResult<Image> {
    let both = half_a.and_mask(half_b)?;
    let grown = dilate_n(&both, sel, config.combined_dilate_iterations)?;
    smooth_mask(&grown, &config.smoothing)
}
