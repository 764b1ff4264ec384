//! Silhouette Color - Color space projection and thresholding
//!
//! This crate provides the color stages of the extraction pipeline:
//!
//! - **Color space conversion** ([`colorspace`]): RGB -> gray, XYZ, L\*a\*b\*, L\*u\*v\*
//!   and the per-channel projections the pipeline consumes
//! - **Thresholding** ([`threshold`]): inclusive band binarization

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use silhouette_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    // Types
    ChannelProjections,
    Lab,
    Luv,
    Xyz,
    // Pixel-level conversions
    encode_lab,
    encode_luv,
    encode_xyz,
    rgb_to_gray,
    rgb_to_lab,
    rgb_to_luv,
    rgb_to_xyz,
    // Image-level conversions
    convert_to_gray,
    project_channels,
};

// Re-export threshold types and functions
pub use threshold::{ThresholdBand, threshold_band, threshold_nonzero};
