//! I/O error types
//!
//! PNG and PNM failures are both reported through [`IoError`].

use thiserror::Error;

/// Error type for reading and writing images.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Neither PNG nor binary PNM, or a sample layout we do not handle
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed PNM header or truncated sample data
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The PNG decoder rejected the stream
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder failed
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded dimensions or data the image model refuses
    #[error("core error: {0}")]
    Core(#[from] silhouette_core::Error),
}

/// Result alias for image I/O.
pub type IoResult<T> = Result<T, IoError>;
