//! Mask operations
//!
//! Masks are gray images whose samples are 0 (background) or 255
//! (foreground). Readers treat any nonzero sample as foreground.
//!
//! - [`Image::and_mask`] / [`Image::or_mask`] / [`Image::invert`] combine masks
//! - [`Image::apply_mask`] stencils an image through a mask
//! - [`Image::whiten_background`] turns all-zero pixels white

use super::{Channels, Image};
use crate::error::Result;
use crate::{BACKGROUND, FOREGROUND};

impl Image {
    fn combine_masks(&self, other: &Image, op: impl Fn(bool, bool) -> bool) -> Result<Image> {
        self.check_gray()?;
        other.check_gray()?;
        self.check_same_size(other)?;
        let data = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(&a, &b)| {
                if op(a != 0, b != 0) {
                    FOREGROUND
                } else {
                    BACKGROUND
                }
            })
            .collect();
        Image::from_vec(self.width(), self.height(), Channels::Gray, data)
    }

    /// Pixel-wise intersection of two masks.
    ///
    /// # Errors
    ///
    /// Returns an error if either image is not gray or the sizes differ.
    pub fn and_mask(&self, other: &Image) -> Result<Image> {
        self.combine_masks(other, |a, b| a && b)
    }

    /// Pixel-wise union of two masks.
    ///
    /// # Errors
    ///
    /// Returns an error if either image is not gray or the sizes differ.
    pub fn or_mask(&self, other: &Image) -> Result<Image> {
        self.combine_masks(other, |a, b| a || b)
    }

    /// Invert every sample (`255 - v`).
    ///
    /// On a {0, 255} mask this swaps foreground and background. Works on
    /// RGB images as a photometric negative.
    pub fn invert(self) -> Image {
        let mut image_mut = self.to_mut_unique();
        for v in image_mut.data_mut() {
            *v = !*v;
        }
        image_mut.into()
    }

    /// Keep pixels where the mask is nonzero and zero the rest.
    ///
    /// The mask must be gray and the same size as the image; the image
    /// may be gray or RGB.
    pub fn apply_mask(self, mask: &Image) -> Result<Image> {
        mask.check_gray()?;
        self.check_same_size(mask)?;
        let spp = self.channels().count() as usize;
        let mut image_mut = self.to_mut_unique();
        for (px, &m) in image_mut.data_mut().chunks_exact_mut(spp).zip(mask.data()) {
            if m == 0 {
                px.fill(0);
            }
        }
        Ok(image_mut.into())
    }

    /// Paint every pixel whose samples are all zero white.
    ///
    /// Any pixel with a nonzero sample is left unchanged, so true-black
    /// foreground pixels also become white.
    pub fn whiten_background(self) -> Image {
        let spp = self.channels().count() as usize;
        let mut image_mut = self.to_mut_unique();
        for px in image_mut.data_mut().chunks_exact_mut(spp) {
            if px.iter().all(|&v| v == 0) {
                px.fill(255);
            }
        }
        image_mut.into()
    }

    /// Count pixels with at least one nonzero sample.
    pub fn count_foreground(&self) -> u64 {
        let spp = self.channels().count() as usize;
        self.data()
            .chunks_exact(spp)
            .filter(|px| px.iter().any(|&v| v != 0))
            .count() as u64
    }

    /// Fraction of pixels counted by [`Image::count_foreground`].
    pub fn foreground_fraction(&self) -> f64 {
        let total = self.width() as f64 * self.height() as f64;
        self.count_foreground() as f64 / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(w: u32, h: u32, data: &[u8]) -> Image {
        Image::from_vec(w, h, Channels::Gray, data.to_vec()).unwrap()
    }

    #[test]
    fn test_and_or() {
        let a = mask(2, 2, &[255, 255, 0, 0]);
        let b = mask(2, 2, &[255, 0, 255, 0]);
        assert_eq!(a.and_mask(&b).unwrap().data(), &[255, 0, 0, 0]);
        assert_eq!(a.or_mask(&b).unwrap().data(), &[255, 255, 255, 0]);
    }

    #[test]
    fn test_and_treats_nonzero_as_foreground() {
        let a = mask(3, 1, &[1, 17, 0]);
        let b = mask(3, 1, &[200, 255, 255]);
        assert_eq!(a.and_mask(&b).unwrap().data(), &[255, 255, 0]);
    }

    #[test]
    fn test_combine_mismatch() {
        let a = mask(2, 2, &[0; 4]);
        let b = mask(4, 1, &[0; 4]);
        assert!(a.and_mask(&b).is_err());
        let rgb = Image::new(2, 2, Channels::Rgb).unwrap();
        assert!(a.or_mask(&rgb).is_err());
    }

    #[test]
    fn test_invert() {
        let a = mask(3, 1, &[0, 255, 10]);
        assert_eq!(a.invert().data(), &[255, 0, 245]);
    }

    #[test]
    fn test_apply_mask_rgb() {
        let image = Image::new_filled(2, 1, Channels::Rgb, 90).unwrap();
        let m = mask(2, 1, &[0, 255]);
        let out = image.apply_mask(&m).unwrap();
        assert_eq!(out.data(), &[0, 0, 0, 90, 90, 90]);
    }

    #[test]
    fn test_whiten_background() {
        let image = Image::from_vec(3, 1, Channels::Rgb, vec![0, 0, 0, 0, 5, 0, 7, 7, 7]).unwrap();
        let out = image.whiten_background();
        assert_eq!(out.data(), &[255, 255, 255, 0, 5, 0, 7, 7, 7]);
    }

    #[test]
    fn test_count_foreground() {
        let a = mask(4, 1, &[0, 255, 3, 0]);
        assert_eq!(a.count_foreground(), 2);
        assert!((a.foreground_fraction() - 0.5).abs() < 1e-12);
    }
}
