//! Error types for silhouette-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// silhouette-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid sample count per pixel
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Unsupported channel layout for this operation
    #[error("unsupported channel layout: expected {expected}, got {actual} channel(s)")]
    UnsupportedChannels { expected: &'static str, actual: u32 },

    /// Pixel buffer length does not match the declared geometry
    #[error("buffer length {actual} does not match {width}x{height}x{channels}")]
    BufferLength {
        width: u32,
        height: u32,
        channels: u32,
        actual: usize,
    },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Mask has no foreground pixels
    #[error("mask has no foreground pixels")]
    EmptyMask,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for silhouette-core operations
pub type Result<T> = std::result::Result<T, Error>;
