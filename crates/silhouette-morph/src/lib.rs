//! silhouette-morph - Morphological operations on masks
//!
//! This crate provides:
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Erosion, dilation, opening and closing of gray masks, including
//!   iterated variants

pub mod binary;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use binary::{close, dilate, dilate_n, erode, erode_n, open};
