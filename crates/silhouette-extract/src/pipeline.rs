//! Segmentation pipeline
//!
//! Chains the stages into one run over an RGB image:
//!
//! 1. **Projection**: Luv, Lab, XYZ and red planes
//! 2. **Edges**: two half-masks from independent features, intersected
//! 3. **Fill**: flood the outside of the outline and keep the rest
//! 4. **Cleanup**: erosion and dilation with smoothing in between
//! 5. **Render**: mask, crop and whiten a color and a gray detail image
//!
//! The mask phase runs once per image and both renders reuse its result.
//! The pipeline holds only its configuration, so one instance can serve
//! any number of runs, from any number of threads.

use crate::edge::{combine_edges, edge_half_a, edge_half_b};
use crate::fill::{clean_filled, fill_enclosed};
use crate::render::{detail_images, render};
use crate::{DegeneracyThresholds, ExtractError, ExtractResult, SegmentationConfig};
use silhouette_color::{ChannelProjections, project_channels};
use silhouette_core::{BoundingBox, Channels, Image};
use silhouette_morph::Sel;

/// Intermediate masks of one mask phase
#[derive(Debug, Clone)]
pub struct MaskStages {
    /// First half-mask (Lab/Luv/red features)
    pub edge_a: Image,
    /// Second half-mask (XYZ Z feature)
    pub edge_b: Image,
    /// Combined, grown edge outline
    pub edges: Image,
    /// Outline with its inside filled
    pub filled: Image,
    /// Final mask after cleanup
    pub mask: Image,
}

/// Non-fatal signs that the mask does not isolate a single object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// The mask covers almost the whole image
    NearlyFull {
        /// Fraction of the image covered by the mask
        coverage: f64,
    },
    /// The crop is too small to hold an object
    Tiny {
        /// Crop width
        width: u32,
        /// Crop height
        height: u32,
    },
}

/// Result of one extraction
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Cropped color rendering on white
    pub color: Image,
    /// Cropped gray rendering on white
    pub gray: Image,
    /// Bounding box of the mask in source coordinates
    pub bounding_box: BoundingBox,
    /// Set when the result looks degenerate
    pub degeneracy: Option<Degeneracy>,
}

/// Check a final mask and its crop against the degeneracy limits.
///
/// A nearly full mask takes precedence over a tiny crop.
pub fn assess_degeneracy(
    mask: &Image,
    bbox: &BoundingBox,
    limits: &DegeneracyThresholds,
) -> Option<Degeneracy> {
    let coverage = mask.foreground_fraction();
    if coverage > limits.max_coverage {
        return Some(Degeneracy::NearlyFull { coverage });
    }
    let (width, height) = (bbox.crop_width(), bbox.crop_height());
    if width < limits.min_side || height < limits.min_side {
        return Some(Degeneracy::Tiny { width, height });
    }
    None
}

/// Silhouette segmentation pipeline
///
/// # Example
///
/// ```ignore
/// use silhouette_extract::{SegmentationConfig, SegmentationPipeline};
///
/// let pipeline = SegmentationPipeline::new(SegmentationConfig::default())?;
/// let extraction = pipeline.run(&image)?;
/// ```
#[derive(Debug, Clone)]
pub struct SegmentationPipeline {
    config: SegmentationConfig,
    sel: Sel,
}

impl SegmentationPipeline {
    /// Create a pipeline, validating the configuration.
    pub fn new(config: SegmentationConfig) -> ExtractResult<Self> {
        config.validate()?;
        let sel = Sel::create_square(config.sel_size)?;
        Ok(Self { config, sel })
    }

    /// The configuration this pipeline runs with
    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Run the mask phase on an RGB image.
    pub fn build_mask(&self, image: &Image) -> ExtractResult<MaskStages> {
        let projections = self.project(image)?;
        self.build_mask_from(&projections)
    }

    /// Mask, crop and whiten one detail image.
    pub fn render(&self, detail: &Image, mask: &Image) -> ExtractResult<(Image, BoundingBox)> {
        render(detail, mask)
    }

    /// Extract the silhouette from an RGB image.
    ///
    /// # Errors
    ///
    /// * [`ExtractError::InvalidImage`] if the image is not RGB
    /// * [`ExtractError::SeedNotBackground`] if the flood seed is outside
    ///   the image or lands on the edge outline
    /// * [`ExtractError::EmptyMask`] if no foreground survives
    pub fn run(&self, image: &Image) -> ExtractResult<Extraction> {
        let projections = self.project(image)?;
        let stages = self.build_mask_from(&projections)?;
        if stages.mask.count_foreground() == 0 {
            log::debug!("final mask is empty");
            return Err(ExtractError::EmptyMask);
        }

        let details = detail_images(&projections)?;
        let (color, bounding_box) = self.render(&details.color, &stages.mask)?;
        let (gray, _) = self.render(&details.gray, &stages.mask)?;
        log::debug!(
            "crop {}x{} at ({}, {})",
            color.width(),
            color.height(),
            bounding_box.x_min,
            bounding_box.y_min
        );

        let degeneracy = assess_degeneracy(&stages.mask, &bounding_box, &self.config.degeneracy);
        match degeneracy {
            Some(Degeneracy::NearlyFull { coverage }) => log::warn!(
                "mask covers {:.1}% of the image; the background was probably not separated",
                coverage * 100.0
            ),
            Some(Degeneracy::Tiny { width, height }) => {
                log::warn!("extracted region is only {}x{} pixels", width, height)
            }
            None => {}
        }

        Ok(Extraction {
            color,
            gray,
            bounding_box,
            degeneracy,
        })
    }

    fn project(&self, image: &Image) -> ExtractResult<ChannelProjections> {
        if image.channels() != Channels::Rgb {
            return Err(ExtractError::InvalidImage(format!(
                "expected an RGB image, got {} channel(s)",
                image.channels().count()
            )));
        }
        log::debug!("projecting {}x{} image", image.width(), image.height());
        Ok(project_channels(image)?)
    }

    fn build_mask_from(&self, projections: &ChannelProjections) -> ExtractResult<MaskStages> {
        let config = &self.config;

        let edge_a = edge_half_a(projections, config, &self.sel)?;
        log::debug!("edge half A: {} foreground pixels", edge_a.count_foreground());
        let edge_b = edge_half_b(projections, config)?;
        log::debug!("edge half B: {} foreground pixels", edge_b.count_foreground());

        let edges = combine_edges(&edge_a, &edge_b, config, &self.sel)?;
        log::debug!("combined edges: {} foreground pixels", edges.count_foreground());

        let filled = fill_enclosed(&edges, config)?;
        log::debug!("filled: {} foreground pixels", filled.count_foreground());

        let mask = clean_filled(&filled, config, &self.sel)?;
        log::debug!("final mask: {} foreground pixels", mask.count_foreground());

        Ok(MaskStages {
            edge_a,
            edge_b,
            edges,
            filled,
            mask,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(w: u32, h: u32, data: Vec<u8>) -> Image {
        Image::from_vec(w, h, Channels::Gray, data).unwrap()
    }

    #[test]
    fn test_assess_nearly_full() {
        let mask = gray(4, 4, vec![255; 16]);
        let bbox = BoundingBox::new(0, 0, 3, 3);
        let found = assess_degeneracy(&mask, &bbox, &DegeneracyThresholds::default());
        assert_eq!(found, Some(Degeneracy::NearlyFull { coverage: 1.0 }));
    }

    #[test]
    fn test_assess_tiny() {
        let mut data = vec![0; 100];
        data[55] = 255;
        data[56] = 255;
        let mask = gray(10, 10, data);
        let bbox = BoundingBox::of_mask(&mask).unwrap();
        let found = assess_degeneracy(&mask, &bbox, &DegeneracyThresholds::default());
        assert_eq!(
            found,
            Some(Degeneracy::Tiny {
                width: 1,
                height: 1
            })
        );
    }

    #[test]
    fn test_assess_ok() {
        let mut data = vec![0; 100];
        for y in 2..8 {
            for x in 3..7 {
                data[y * 10 + x] = 255;
            }
        }
        let mask = gray(10, 10, data);
        let bbox = BoundingBox::of_mask(&mask).unwrap();
        assert_eq!(
            assess_degeneracy(&mask, &bbox, &DegeneracyThresholds::default()),
            None
        );
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = SegmentationConfig::default().with_sel_size(0);
        assert!(matches!(
            SegmentationPipeline::new(config),
            Err(ExtractError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_rejects_gray() {
        let pipeline = SegmentationPipeline::new(SegmentationConfig::default()).unwrap();
        let image = gray(8, 8, vec![0; 64]);
        assert!(matches!(
            pipeline.run(&image),
            Err(ExtractError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_pipeline_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SegmentationPipeline>();
        assert_send_sync::<Extraction>();
    }
}
