//! Histogram generation for gray images

use super::Image;
use crate::error::Result;

impl Image {
    /// Compute the 256-bin histogram of a gray image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedChannels`] for RGB images.
    pub fn gray_histogram(&self) -> Result<[u32; 256]> {
        self.check_gray()?;
        let mut hist = [0u32; 256];
        for &v in self.data() {
            hist[v as usize] += 1;
        }
        Ok(hist)
    }
}
