//! Output rendering
//!
//! Stencils a detail image through the final mask, crops it to the mask's
//! bounding box and paints the cleared background white.

use crate::ExtractResult;
use silhouette_color::ChannelProjections;
use silhouette_core::{BoundingBox, Image};
use silhouette_filter::equalize_hist;

/// Stack three gray planes into an RGB image.
pub fn merge_channels(red: &Image, green: &Image, blue: &Image) -> ExtractResult<Image> {
    Ok(Image::create_rgb_image(red, green, blue)?)
}

/// The two detail images the mask is applied to
#[derive(Debug, Clone)]
pub struct DetailImages {
    /// Red channel with the equalized Luv lightness in green and blue
    pub color: Image,
    /// Equalized Luv lightness in all three channels
    pub gray: Image,
}

/// Build the color and gray detail images from the projections.
pub fn detail_images(projections: &ChannelProjections) -> ExtractResult<DetailImages> {
    let lightness = equalize_hist(&projections.luv_l)?;
    Ok(DetailImages {
        color: merge_channels(&projections.red, &lightness, &lightness)?,
        gray: merge_channels(&lightness, &lightness, &lightness)?,
    })
}

/// Apply the mask, crop to it and whiten the background.
///
/// Pure black pixels inside the mask are whitened as well.
pub fn render(detail: &Image, mask: &Image) -> ExtractResult<(Image, BoundingBox)> {
    let masked = detail.clone().apply_mask(mask)?;
    let (cropped, bbox) = masked.crop_to_mask(mask)?;
    Ok((cropped.whiten_background(), bbox))
}
