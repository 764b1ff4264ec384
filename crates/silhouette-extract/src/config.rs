//! Pipeline configuration
//!
//! The defaults are tuned for photographs of animals in front of cluttered
//! backgrounds. They are not adaptive: other material usually needs its
//! own threshold bands.

use crate::{ExtractError, ExtractResult};
use silhouette_color::ThresholdBand;
use silhouette_filter::BilateralParams;

/// Limits beyond which an extraction is reported as degenerate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegeneracyThresholds {
    /// Mask coverage (fraction of the image) above which the mask is
    /// considered to have swallowed the background (default: 0.95)
    pub max_coverage: f64,
    /// Crop side length below which the result is considered a speck
    /// (default: 3)
    pub min_side: u32,
}

impl Default for DegeneracyThresholds {
    fn default() -> Self {
        Self {
            max_coverage: 0.95,
            min_side: 3,
        }
    }
}

/// Configuration of the segmentation pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationConfig {
    /// Side of the square structuring element (default: 5)
    pub sel_size: u32,

    /// Band kept from the merged Lab/Luv/red feature image (default: 198..=228)
    pub band_a: ThresholdBand,

    /// Band kept from the XYZ Z feature image (default: 90..=120)
    pub band_b: ThresholdBand,

    /// Edge-preserving smoothing applied to features and masks
    pub smoothing: BilateralParams,

    /// Dilations of the first half-mask (default: 2)
    pub edge_dilate_iterations: u32,

    /// Dilations of the combined edge mask (default: 2)
    pub combined_dilate_iterations: u32,

    /// Erosions after hole filling (default: 6)
    pub fill_erode_iterations: u32,

    /// Dilations after the erosions (default: 4)
    pub fill_dilate_iterations: u32,

    /// Start of the background flood fill (default: (0, 0))
    pub flood_seed: (u32, u32),

    /// Degeneracy reporting limits
    pub degeneracy: DegeneracyThresholds,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            sel_size: 5,
            band_a: ThresholdBand { min: 198, max: 228 },
            band_b: ThresholdBand { min: 90, max: 120 },
            smoothing: BilateralParams::default(),
            edge_dilate_iterations: 2,
            combined_dilate_iterations: 2,
            fill_erode_iterations: 6,
            fill_dilate_iterations: 4,
            flood_seed: (0, 0),
            degeneracy: DegeneracyThresholds::default(),
        }
    }
}

impl SegmentationConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the structuring element size
    pub fn with_sel_size(mut self, size: u32) -> Self {
        self.sel_size = size;
        self
    }

    /// Set the first threshold band
    pub fn with_band_a(mut self, band: ThresholdBand) -> Self {
        self.band_a = band;
        self
    }

    /// Set the second threshold band
    pub fn with_band_b(mut self, band: ThresholdBand) -> Self {
        self.band_b = band;
        self
    }

    /// Set the smoothing parameters
    pub fn with_smoothing(mut self, params: BilateralParams) -> Self {
        self.smoothing = params;
        self
    }

    /// Set the dilation counts of the first half-mask and the combined mask
    pub fn with_edge_dilations(mut self, half: u32, combined: u32) -> Self {
        self.edge_dilate_iterations = half;
        self.combined_dilate_iterations = combined;
        self
    }

    /// Set the erosion and dilation counts applied after hole filling
    pub fn with_fill_cleanup(mut self, erode: u32, dilate: u32) -> Self {
        self.fill_erode_iterations = erode;
        self.fill_dilate_iterations = dilate;
        self
    }

    /// Set the flood fill seed
    pub fn with_flood_seed(mut self, x: u32, y: u32) -> Self {
        self.flood_seed = (x, y);
        self
    }

    /// Set the degeneracy limits
    pub fn with_degeneracy(mut self, thresholds: DegeneracyThresholds) -> Self {
        self.degeneracy = thresholds;
        self
    }

    /// Validate the configuration
    ///
    /// The flood seed can only be checked against an image and is
    /// validated when the pipeline runs.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.sel_size == 0 {
            return Err(ExtractError::InvalidConfig(
                "sel_size must be positive".to_string(),
            ));
        }
        self.band_a
            .validate()
            .map_err(|e| ExtractError::InvalidConfig(format!("band_a: {e}")))?;
        self.band_b
            .validate()
            .map_err(|e| ExtractError::InvalidConfig(format!("band_b: {e}")))?;
        self.smoothing
            .validate()
            .map_err(|e| ExtractError::InvalidConfig(format!("smoothing: {e}")))?;
        let coverage = self.degeneracy.max_coverage;
        if !(coverage > 0.0 && coverage <= 1.0) {
            return Err(ExtractError::InvalidConfig(format!(
                "max_coverage must be in (0, 1], got {coverage}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SegmentationConfig::default();
        assert_eq!(config.sel_size, 5);
        assert_eq!((config.band_a.min, config.band_a.max), (198, 228));
        assert_eq!((config.band_b.min, config.band_b.max), (90, 120));
        assert_eq!(config.smoothing.diameter, 9);
        assert_eq!(config.fill_erode_iterations, 6);
        assert_eq!(config.fill_dilate_iterations, 4);
        assert_eq!(config.flood_seed, (0, 0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = SegmentationConfig::new()
            .with_band_a(ThresholdBand { min: 10, max: 20 })
            .with_edge_dilations(0, 1)
            .with_fill_cleanup(1, 3)
            .with_flood_seed(4, 2);
        assert_eq!(config.band_a.max, 20);
        assert_eq!(config.edge_dilate_iterations, 0);
        assert_eq!(config.combined_dilate_iterations, 1);
        assert_eq!(config.fill_erode_iterations, 1);
        assert_eq!(config.fill_dilate_iterations, 3);
        assert_eq!(config.flood_seed, (4, 2));
    }

    #[test]
    fn test_validate_rejects() {
        let inverted = SegmentationConfig::new().with_band_b(ThresholdBand { min: 121, max: 90 });
        assert!(matches!(
            inverted.validate(),
            Err(ExtractError::InvalidConfig(_))
        ));
        assert!(SegmentationConfig::new().with_sel_size(0).validate().is_err());
        let flat = SegmentationConfig::new()
            .with_smoothing(BilateralParams::default().with_sigma_space(0.0));
        assert!(flat.validate().is_err());
        let coverage = SegmentationConfig::new().with_degeneracy(DegeneracyThresholds {
            max_coverage: 1.5,
            min_side: 3,
        });
        assert!(coverage.validate().is_err());
    }
}
