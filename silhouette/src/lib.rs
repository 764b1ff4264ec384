//! Silhouette - single-object extraction from photographs
//!
//! Isolates the one foreground object (a photographed animal) of an RGB
//! image and returns it cropped onto a white background, once with a
//! color-enhanced and once with a gray-enhanced rendering.
//!
//! # Overview
//!
//! - Color space projections and band thresholding ([`color`])
//! - Histogram equalization and bilateral smoothing ([`filter`])
//! - Mask morphology ([`morph`]) and seed fill ([`region`])
//! - The segmentation pipeline ([`extract`])
//! - PNG and PNM file I/O ([`io`])
//!
//! # Example
//!
//! ```
//! use silhouette::{Channels, Image};
//! use silhouette::extract::{SegmentationConfig, SegmentationPipeline};
//!
//! let pipeline = SegmentationPipeline::new(SegmentationConfig::default()).unwrap();
//! let image = Image::new(32, 24, Channels::Rgb).unwrap();
//! // a blank image has no silhouette to extract
//! assert!(pipeline.run(&image).is_err());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use silhouette_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use silhouette_color as color;
pub use silhouette_extract as extract;
pub use silhouette_filter as filter;
pub use silhouette_io as io;
pub use silhouette_morph as morph;
pub use silhouette_region as region;
