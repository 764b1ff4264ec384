//! Rectangle clipping operations for images
//!
//! Functions for extracting rectangular sub-regions from images,
//! including the crop to a mask's bounding box.

use super::Image;
use crate::box_::BoundingBox;
use crate::error::{Error, Result};

impl Image {
    /// Extract a rectangular sub-region from the image.
    ///
    /// If the rectangle extends beyond the image bounds, it is clipped to
    /// the valid region. The output keeps the channel layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the requested width or
    /// height is 0 or the origin is outside the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use silhouette_core::{Channels, Image};
    ///
    /// let image = Image::new(100, 80, Channels::Rgb).unwrap();
    /// let clipped = image.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);
    /// assert_eq!(clipped.height(), 20);
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Image> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();
        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);
        let spp = self.channels().count() as usize;

        let mut dst = Image::new(clip_w, clip_h, self.channels())?.to_mut_unique();
        let start = x as usize * spp;
        let end = start + clip_w as usize * spp;
        for dy in 0..clip_h {
            let src_row = &self.row_data(y + dy)[start..end];
            dst.row_data_mut(dy).copy_from_slice(src_row);
        }
        Ok(dst.into())
    }

    /// Crop the image to the bounding box of a mask's foreground.
    ///
    /// The crop covers `[x_min, x_max) x [y_min, y_max)` of the box, at
    /// least one pixel on each axis. Returns the crop together with the
    /// box it was taken from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMask`] if the mask has no foreground,
    /// [`Error::UnsupportedChannels`] if the mask is not gray and
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn crop_to_mask(&self, mask: &Image) -> Result<(Image, BoundingBox)> {
        mask.check_gray()?;
        self.check_same_size(mask)?;
        let bbox = BoundingBox::of_mask(mask).ok_or(Error::EmptyMask)?;
        let cropped =
            self.clip_rectangle(bbox.x_min, bbox.y_min, bbox.crop_width(), bbox.crop_height())?;
        Ok((cropped, bbox))
    }
}
