//! Error types for silhouette-extract
//!
//! Errors from the stage crates are folded into the pipeline taxonomy:
//! channel and shape problems become [`ExtractError::InvalidImage`],
//! rejected parameters become [`ExtractError::InvalidConfig`].

use silhouette_color::ColorError;
use silhouette_filter::FilterError;
use silhouette_morph::MorphError;
use silhouette_region::RegionError;
use thiserror::Error;

/// Errors that can occur during silhouette extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Wrong channel count, empty or mismatched shapes
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The final mask has no foreground pixels
    #[error("mask has no foreground pixels")]
    EmptyMask,

    /// Flood seed outside the image or on an edge pixel
    #[error("flood seed ({x}, {y}) is not on a background pixel")]
    SeedNotBackground { x: u32, y: u32 },

    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

impl From<silhouette_core::Error> for ExtractError {
    fn from(e: silhouette_core::Error) -> Self {
        match e {
            silhouette_core::Error::EmptyMask => ExtractError::EmptyMask,
            other => ExtractError::InvalidImage(other.to_string()),
        }
    }
}

impl From<ColorError> for ExtractError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::Core(e) => e.into(),
            ColorError::InvalidParameters(msg) => ExtractError::InvalidConfig(msg),
            other => ExtractError::InvalidImage(other.to_string()),
        }
    }
}

impl From<FilterError> for ExtractError {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::Core(e) => e.into(),
            FilterError::InvalidKernel(msg) | FilterError::InvalidParameters(msg) => {
                ExtractError::InvalidConfig(msg)
            }
            other => ExtractError::InvalidImage(other.to_string()),
        }
    }
}

impl From<MorphError> for ExtractError {
    fn from(e: MorphError) -> Self {
        match e {
            MorphError::Core(e) => e.into(),
            MorphError::InvalidSel(msg) => ExtractError::InvalidConfig(msg),
            other => ExtractError::InvalidImage(other.to_string()),
        }
    }
}

impl From<RegionError> for ExtractError {
    fn from(e: RegionError) -> Self {
        match e {
            RegionError::Core(e) => e.into(),
            RegionError::InvalidSeed { x, y } | RegionError::SeedNotBackground { x, y } => {
                ExtractError::SeedNotBackground { x, y }
            }
            other => ExtractError::InvalidImage(other.to_string()),
        }
    }
}
