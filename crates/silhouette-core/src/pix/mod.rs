//! Image - The main image container
//!
//! `Image` holds 8-bit samples for either one channel (gray, masks) or
//! three channels (RGB).
//!
//! # Pixel layout
//!
//! - Samples are stored interleaved, row-major, with no row padding
//! - For RGB images the channel order is R, G, B
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.
//! Stages that want to reuse a buffer take the `Image` by value and call
//! `try_into_mut`, which only copies when the buffer is still shared.

mod access;
mod clip;
mod histogram;
mod mask;
mod rgb;

pub use rgb::RgbComponent;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Channel layout (samples per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single 8-bit channel: grayscale images and masks
    Gray = 1,
    /// Three 8-bit channels in R, G, B order
    Rgb = 3,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `count` is not 1 or 3.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            _ => Err(Error::InvalidChannels(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Interleaved samples, `width * height * channels` long
    data: Vec<u8>,
}

impl ImageData {
    #[inline]
    fn row_len(&self) -> usize {
        self.width as usize * self.channels.count() as usize
    }
}

/// Image - Main image container
///
/// # Examples
///
/// ```
/// use silhouette_core::{Channels, Image};
///
/// let image = Image::new(640, 480, Channels::Gray).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with the specified dimensions and layout.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize * channels.count() as usize;
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                channels,
                data: vec![0u8; len],
            }),
        })
    }

    /// Create an image from an existing interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `data` does not hold exactly
    /// `width * height * channels` samples.
    pub fn from_vec(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * channels.count() as usize;
        if data.len() != expected {
            return Err(Error::BufferLength {
                width,
                height,
                channels: channels.count(),
                actual: data.len(),
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    /// Create an image with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let image = Self::new(width, height, channels)?;
        let mut image_mut = image.to_mut_unique();
        image_mut.fill(value);
        Ok(image_mut.into())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Check whether this is a single-channel image.
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.inner.channels == Channels::Gray
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the samples of a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let len = self.inner.row_len();
        let start = y as usize * len;
        &self.inner.data[start..start + len]
    }

    /// Create a zeroed image with the same dimensions and layout.
    pub fn create_template(&self) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: vec![0u8; self.inner.data.len()],
            }),
        }
    }

    /// Check if two images have the same width, height, and layout.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.channels == other.inner.channels
    }

    /// Fail unless this is a single-channel image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for RGB images.
    pub fn check_gray(&self) -> Result<()> {
        if self.is_gray() {
            Ok(())
        } else {
            Err(Error::UnsupportedChannels {
                expected: "1 (gray)",
                actual: self.channels().count(),
            })
        }
    }

    /// Fail unless this is a three-channel image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] for gray images.
    pub fn check_rgb(&self) -> Result<()> {
        if self.channels() == Channels::Rgb {
            Ok(())
        } else {
            Err(Error::UnsupportedChannels {
                expected: "3 (RGB)",
                actual: self.channels().count(),
            })
        }
    }

    /// Fail unless `other` has the same width and height.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn check_same_size(&self, other: &Image) -> Result<()> {
        if self.width() == other.width() && self.height() == other.height() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            })
        }
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns an [`ImageMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Convert into a mutable image, copying only if the buffer is shared.
    pub fn to_mut_unique(self) -> ImageMut {
        self.try_into_mut().unwrap_or_else(|shared| shared.to_mut())
    }

    /// Create a mutable copy of this image.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable image
///
/// Allows modification of image data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        let len = self.inner.row_len();
        let start = y as usize * len;
        &mut self.inner.data[start..start + len]
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }
}

impl From<ImageMut> for Image {
    fn from(image_mut: ImageMut) -> Self {
        Image {
            inner: Arc::new(image_mut.inner),
        }
    }
}
