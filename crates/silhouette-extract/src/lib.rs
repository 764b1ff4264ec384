//! silhouette-extract - Single-object silhouette extraction
//!
//! This crate chains the color, filter, morphology and region stages into
//! the extraction pipeline:
//!
//! - **Edge masks** ([`edge`]) - two feature half-masks and their intersection
//! - **Hole filling** ([`fill`]) - outline to solid mask, then cleanup
//! - **Rendering** ([`render`]) - mask, crop and whiten the detail images
//! - **Pipeline** ([`pipeline`]) - the full run with degeneracy reporting
//!
//! Stage progress is logged through the `log` facade at debug level;
//! degenerate results are logged as warnings.
//!
//! # Example
//!
//! ```
//! use silhouette_core::{Channels, Image};
//! use silhouette_extract::{ExtractError, SegmentationConfig, SegmentationPipeline};
//!
//! let pipeline = SegmentationPipeline::new(SegmentationConfig::default()).unwrap();
//! let blank = Image::new(16, 16, Channels::Rgb).unwrap();
//! assert!(matches!(pipeline.run(&blank), Err(ExtractError::EmptyMask)));
//! ```

pub mod config;
pub mod edge;
mod error;
pub mod fill;
pub mod pipeline;
pub mod render;

pub use config::{DegeneracyThresholds, SegmentationConfig};
pub use error::{ExtractError, ExtractResult};
pub use pipeline::{
    Degeneracy, Extraction, MaskStages, SegmentationPipeline, assess_degeneracy,
};
pub use render::{DetailImages, detail_images, merge_channels};
