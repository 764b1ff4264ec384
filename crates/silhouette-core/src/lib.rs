//! Silhouette Core - Basic data structures for silhouette extraction
//!
//! This crate provides the data structures shared by every stage of the
//! extraction pipeline:
//!
//! - [`Image`] / [`ImageMut`] - 8-bit image container (immutable / mutable)
//! - [`Channels`] - gray (1 sample) or RGB (3 samples) pixel layout
//! - [`BoundingBox`] - tight rectangle around the foreground of a mask
//!
//! Masks are plain [`Channels::Gray`] images whose samples are 0
//! (background) or 255 (foreground). Mask combination, stencil
//! application, cropping and background recoloring live on [`Image`].

pub mod box_;
pub mod error;
pub mod pix;

pub use box_::BoundingBox;
pub use error::{Error, Result};
pub use pix::{Channels, Image, ImageMut, RgbComponent};

/// Sample value of a foreground mask pixel.
pub const FOREGROUND: u8 = 255;

/// Sample value of a background mask pixel.
pub const BACKGROUND: u8 = 0;
