//! Errors raised by the regression harness itself

use thiserror::Error;

/// Harness failure, as opposed to a failed comparison
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture image could not be read
    #[error("cannot read fixture '{path}': {message}")]
    ImageLoad { path: String, message: String },

    /// An output image could not be written to the regout directory
    #[error("cannot write '{path}': {message}")]
    ImageWrite { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
