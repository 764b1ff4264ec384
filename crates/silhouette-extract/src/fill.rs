//! Hole filling
//!
//! Turns a closed edge outline into a solid mask: the background
//! reachable from the flood seed is everything outside the outline, so
//! its complement is the outline plus its inside. Erosion then removes
//! thin edge debris and dilation restores the body.

use crate::edge::smooth_mask;
use crate::{ExtractResult, SegmentationConfig};
use silhouette_core::Image;
use silhouette_morph::{Sel, dilate_n, erode_n};
use silhouette_region::{ConnectivityType, background_reachable};

/// Fill everything the outline encloses.
///
/// Fails with [`crate::ExtractError::SeedNotBackground`] when the
/// configured seed is outside the mask or on an edge pixel.
pub fn fill_enclosed(edges: &Image, config: &SegmentationConfig) -> ExtractResult<Image> {
    let (seed_x, seed_y) = config.flood_seed;
    let outside = background_reachable(edges, seed_x, seed_y, ConnectivityType::FourWay)?;
    Ok(outside.invert().or_mask(edges)?)
}

/// Erode, smooth, dilate and smooth a filled mask.
pub fn clean_filled(filled: &Image, config: &SegmentationConfig, sel: &Sel) -> ExtractResult<Image> {
    let eroded = erode_n(filled, sel, config.fill_erode_iterations)?;
    let eroded = smooth_mask(&eroded, &config.smoothing)?;
    log::debug!(
        "fill: {} foreground pixels after erosion",
        eroded.count_foreground()
    );

    let dilated = dilate_n(&eroded, sel, config.fill_dilate_iterations)?;
    smooth_mask(&dilated, &config.smoothing)
}
