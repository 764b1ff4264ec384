//! RGB component operations
//!
//! Functions for extracting individual color channels of RGB images and
//! stacking gray images back into an RGB image.

use super::{Channels, Image};
use crate::error::{Error, Result};

/// Color component selector for RGB channel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbComponent {
    /// Red channel (sample 0)
    Red,
    /// Green channel (sample 1)
    Green,
    /// Blue channel (sample 2)
    Blue,
}

impl RgbComponent {
    #[inline]
    fn offset(self) -> usize {
        match self {
            RgbComponent::Red => 0,
            RgbComponent::Green => 1,
            RgbComponent::Blue => 2,
        }
    }
}

impl Image {
    /// Extract a single color component as a gray image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] if the image is not RGB.
    pub fn get_rgb_component(&self, comp: RgbComponent) -> Result<Image> {
        self.check_rgb()?;
        let offset = comp.offset();
        let data: Vec<u8> = self
            .data()
            .chunks_exact(3)
            .map(|px| px[offset])
            .collect();
        Image::from_vec(self.width(), self.height(), Channels::Gray, data)
    }

    /// Split an RGB image into its red, green and blue gray planes.
    pub fn split_rgb(&self) -> Result<(Image, Image, Image)> {
        Ok((
            self.get_rgb_component(RgbComponent::Red)?,
            self.get_rgb_component(RgbComponent::Green)?,
            self.get_rgb_component(RgbComponent::Blue)?,
        ))
    }

    /// Create an RGB image from three gray component images.
    ///
    /// All three images must be gray and have the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] if a component is not gray
    /// and [`Error::DimensionMismatch`] if the sizes differ.
    pub fn create_rgb_image(red: &Image, green: &Image, blue: &Image) -> Result<Image> {
        red.check_gray()?;
        green.check_gray()?;
        blue.check_gray()?;
        red.check_same_size(green)?;
        red.check_same_size(blue)?;

        let mut data = Vec::with_capacity(red.data().len() * 3);
        for ((&r, &g), &b) in red.data().iter().zip(green.data()).zip(blue.data()) {
            data.extend_from_slice(&[r, g, b]);
        }
        Image::from_vec(red.width(), red.height(), Channels::Rgb, data)
    }

    /// Expand a gray image into an RGB image with equal components.
    pub fn gray_to_rgb(&self) -> Result<Image> {
        if self.channels() == Channels::Rgb {
            return Err(Error::UnsupportedChannels {
                expected: "1 (gray)",
                actual: 3,
            });
        }
        Image::create_rgb_image(self, self, self)
    }
}
