//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Gray accessors read the single sample; RGB accessors read the
//! three interleaved samples of a pixel.

use super::{Channels, Image, ImageMut};
use crate::error::{Error, Result};

#[inline]
fn sample_index(width: u32, channels: Channels, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * channels.count() as usize
}

impl Image {
    /// Get a gray sample at (x, y).
    ///
    /// For RGB images this returns the red sample. Returns `None` if the
    /// coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a gray sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[sample_index(self.width(), self.channels(), x, y)]
    }

    /// Get RGB values at (x, y).
    ///
    /// Gray images report the same value for all three components.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = sample_index(self.width(), self.channels(), x, y);
        let data = self.data();
        Some(match self.channels() {
            Channels::Gray => (data[idx], data[idx], data[idx]),
            Channels::Rgb => (data[idx], data[idx + 1], data[idx + 2]),
        })
    }

    /// Get all samples of the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_samples(&self, x: u32, y: u32) -> &[u8] {
        let idx = sample_index(self.width(), self.channels(), x, y);
        &self.data()[idx..idx + self.channels().count() as usize]
    }
}

impl ImageMut {
    /// Get a gray sample at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a gray sample without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data()[sample_index(self.width(), self.channels(), x, y)]
    }

    /// Set a gray sample at (x, y).
    ///
    /// For RGB images all three samples are set to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a gray sample without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let channels = self.channels();
        let idx = sample_index(self.width(), channels, x, y);
        self.data_mut()[idx..idx + channels.count() as usize].fill(val);
    }

    /// Set an RGB pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for bad coordinates and
    /// [`Error::UnsupportedChannels`] for gray images.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.check_bounds(x, y)?;
        if self.channels() != Channels::Rgb {
            return Err(Error::UnsupportedChannels {
                expected: "3 (RGB)",
                actual: self.channels().count(),
            });
        }
        let idx = sample_index(self.width(), Channels::Rgb, x, y);
        self.data_mut()[idx..idx + 3].copy_from_slice(&[r, g, b]);
        Ok(())
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}
