//! Filter kernels
//!
//! Defines the 2D weight grid used by neighborhood filters. Elements
//! outside the filter's support are stored as 0.0.

use crate::{FilterError, FilterResult};

/// A 2D filter kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a new zero kernel with the center in the middle.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive: {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0.0; width as usize * height as usize],
        })
    }

    /// Create a circular Gaussian kernel.
    ///
    /// The kernel is `(2 * radius + 1)` square. Elements at distance
    /// `d <= radius` from the center get `exp(-d^2 / (2 * sigma^2))`;
    /// corner elements outside the disk are 0.0. Weights are not
    /// normalized.
    pub fn gaussian_disk(radius: u32, sigma: f32) -> FilterResult<Self> {
        if sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(
                "sigma must be positive".to_string(),
            ));
        }
        let size = 2 * radius + 1;
        let mut kernel = Self::new(size, size)?;
        let r = radius as i32;
        let coeff = -0.5 / (sigma * sigma);
        for ky in 0..size {
            for kx in 0..size {
                let dx = kx as i32 - r;
                let dy = ky as i32 - r;
                let d2 = dx * dx + dy * dy;
                if d2 <= r * r {
                    kernel.set(kx, ky, (d2 as f32 * coeff).exp());
                }
            }
        }
        Ok(kernel)
    }

    /// Get the kernel width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center x coordinate
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center y coordinate
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the value at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set the value at (x, y); out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Offsets from the center and weights of all nonzero elements.
    pub fn taps(&self) -> Vec<(i32, i32, f32)> {
        let mut taps = Vec::new();
        for ky in 0..self.height {
            for kx in 0..self.width {
                let w = self.data[(ky * self.width + kx) as usize];
                if w != 0.0 {
                    taps.push((kx as i32 - self.cx as i32, ky as i32 - self.cy as i32, w));
                }
            }
        }
        taps
    }

    /// Sum of all elements
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
