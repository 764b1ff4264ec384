//! BoundingBox - Tight rectangle around a mask's foreground
//!
//! The box stores the minimum and maximum foreground coordinates
//! (inclusive). Cropping uses the half-open range
//! `[x_min, x_max) x [y_min, y_max)`, widened to one pixel when that
//! range would be empty.

use crate::pix::Image;

/// Bounding rectangle of the nonzero samples of a mask
///
/// Like the other small geometry values in this crate, this is a plain
/// `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Smallest x with a foreground sample
    pub x_min: u32,
    /// Smallest y with a foreground sample
    pub y_min: u32,
    /// Largest x with a foreground sample
    pub x_max: u32,
    /// Largest y with a foreground sample
    pub y_max: u32,
}

impl BoundingBox {
    /// Create a box from its extreme coordinates.
    ///
    /// The coordinates are reordered so that `min <= max` on each axis.
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            x_min: x0.min(x1),
            y_min: y0.min(y1),
            x_max: x0.max(x1),
            y_max: y0.max(y1),
        }
    }

    /// Compute the bounding box of the nonzero samples of a gray mask.
    ///
    /// Returns `None` if the mask has no nonzero sample or is not gray.
    pub fn of_mask(mask: &Image) -> Option<Self> {
        if !mask.is_gray() {
            return None;
        }
        let mut found: Option<BoundingBox> = None;
        for y in 0..mask.height() {
            let row = mask.row_data(y);
            let Some(first) = row.iter().position(|&v| v != 0) else {
                continue;
            };
            // a row with a first hit always has a last hit
            let last = row.iter().rposition(|&v| v != 0).unwrap_or(first);
            let (first, last) = (first as u32, last as u32);
            found = Some(match found {
                None => BoundingBox::new(first, y, last, y),
                Some(b) => BoundingBox {
                    x_min: b.x_min.min(first),
                    y_min: b.y_min,
                    x_max: b.x_max.max(last),
                    y_max: y,
                },
            });
        }
        found
    }

    /// Width of the crop window, at least 1.
    #[inline]
    pub fn crop_width(&self) -> u32 {
        (self.x_max - self.x_min).max(1)
    }

    /// Height of the crop window, at least 1.
    #[inline]
    pub fn crop_height(&self) -> u32 {
        (self.y_max - self.y_min).max(1)
    }

    /// Width of the inclusive extent.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x_max - self.x_min + 1
    }

    /// Height of the inclusive extent.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y_max - self.y_min + 1
    }

    /// Number of pixels in the inclusive extent.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check whether (x, y) lies within the inclusive extent.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}
