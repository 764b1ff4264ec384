//! Bilateral filtering (edge-preserving smoothing)
//!
//! Bilateral filtering is a non-linear, edge-preserving smoothing filter.
//! It combines a spatial Gaussian filter with a range (intensity) Gaussian filter.
//!
//! The bilateral filter has the property of smoothing uniform regions while
//! preserving edges.
//!
//! # Algorithm
//!
//! For each pixel, the output is a weighted average of the pixels in a
//! circular neighborhood where:
//! - Spatial weight: Gaussian based on distance from center pixel
//! - Range weight: Gaussian based on intensity difference from center pixel
//!
//! Neighbors beyond the image border are taken by reflection about the
//! edge pixel, without repeating it (`dcb|abcd|cba`).
//!
//! # Example
//!
//! ```ignore
//! use silhouette_filter::{BilateralParams, bilateral_filter};
//!
//! let smoothed = bilateral_filter(&gray, &BilateralParams::default())?;
//! ```

use crate::{FilterError, FilterResult, Kernel, require_gray};
use silhouette_core::Image;

/// Parameters of the bilateral filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilateralParams {
    /// Neighborhood diameter in pixels; the window radius is `diameter / 2`
    pub diameter: u32,
    /// Standard deviation of the range (intensity) Gaussian
    pub sigma_color: f32,
    /// Standard deviation of the spatial Gaussian
    pub sigma_space: f32,
}

impl Default for BilateralParams {
    fn default() -> Self {
        Self {
            diameter: 9,
            sigma_color: 75.0,
            sigma_space: 75.0,
        }
    }
}

impl BilateralParams {
    /// Set the neighborhood diameter
    pub fn with_diameter(mut self, diameter: u32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Set the range sigma
    pub fn with_sigma_color(mut self, sigma: f32) -> Self {
        self.sigma_color = sigma;
        self
    }

    /// Set the spatial sigma
    pub fn with_sigma_space(mut self, sigma: f32) -> Self {
        self.sigma_space = sigma;
        self
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if the diameter is 0 or
    /// either sigma is not a positive finite number.
    pub fn validate(&self) -> FilterResult<()> {
        if self.diameter == 0 {
            return Err(FilterError::InvalidParameters(
                "diameter must be positive".to_string(),
            ));
        }
        if !(self.sigma_color.is_finite() && self.sigma_color > 0.0) {
            return Err(FilterError::InvalidParameters(
                "sigma_color must be positive".to_string(),
            ));
        }
        if !(self.sigma_space.is_finite() && self.sigma_space > 0.0) {
            return Err(FilterError::InvalidParameters(
                "sigma_space must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Create a range kernel for bilateral filtering
///
/// Creates a 256-element array where each element represents the weight
/// for a given intensity difference (0-255).
///
/// # Arguments
/// * `range_stdev` - Standard deviation for the range Gaussian (must be > 0.0)
pub fn make_range_kernel(range_stdev: f32) -> FilterResult<[f32; 256]> {
    if range_stdev <= 0.0 {
        return Err(FilterError::InvalidParameters(
            "range_stdev must be positive".to_string(),
        ));
    }

    let mut kernel = [0.0f32; 256];
    let denom = 2.0 * range_stdev * range_stdev;

    for (i, val) in kernel.iter_mut().enumerate() {
        *val = (-(i as f32 * i as f32) / denom).exp();
    }

    Ok(kernel)
}

/// Reflect an out-of-range coordinate back into `0..n` (`dcb|abcd|cba`).
#[inline]
fn reflect_101(mut i: i32, n: i32) -> i32 {
    if n == 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * n - 2 - i;
        } else {
            return i;
        }
    }
}

/// Apply a bilateral filter to a gray image with explicit kernels
///
/// # Arguments
/// * `image` - Input gray image
/// * `spatial_kernel` - Spatial weights; zero elements are outside the window
/// * `range_kernel` - 256-element range kernel indexed by intensity difference
pub fn bilateral_gray(
    image: &Image,
    spatial_kernel: &Kernel,
    range_kernel: &[f32; 256],
) -> FilterResult<Image> {
    require_gray(image)?;

    let w = image.width() as i32;
    let h = image.height() as i32;
    let taps = spatial_kernel.taps();
    let src = image.data();

    let mut out_mut = image.create_template().to_mut_unique();
    let out = out_mut.data_mut();

    for y in 0..h {
        for x in 0..w {
            let center_val = src[(y * w + x) as usize] as i32;

            let mut sum = 0.0f32;
            let mut weight_sum = 0.0f32;

            for &(dx, dy, spatial_weight) in &taps {
                let sx = reflect_101(x + dx, w);
                let sy = reflect_101(y + dy, h);

                let neighbor_val = src[(sy * w + sx) as usize] as i32;
                let intensity_diff = (center_val - neighbor_val).unsigned_abs() as usize;
                let weight = spatial_weight * range_kernel[intensity_diff.min(255)];
                sum += neighbor_val as f32 * weight;
                weight_sum += weight;
            }

            let result = if weight_sum > 0.0 {
                (sum / weight_sum).round() as i32
            } else {
                center_val
            };

            out[(y * w + x) as usize] = result.clamp(0, 255) as u8;
        }
    }

    Ok(out_mut.into())
}

/// Apply a bilateral filter to a gray image
///
/// The window is the disk of radius `diameter / 2` around each pixel.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] for invalid parameters and
/// [`FilterError::UnsupportedChannels`] for non-gray input.
pub fn bilateral_filter(image: &Image, params: &BilateralParams) -> FilterResult<Image> {
    params.validate()?;
    require_gray(image)?;

    let spatial_kernel = Kernel::gaussian_disk(params.diameter / 2, params.sigma_space)?;
    let range_kernel = make_range_kernel(params.sigma_color)?;
    bilateral_gray(image, &spatial_kernel, &range_kernel)
}
