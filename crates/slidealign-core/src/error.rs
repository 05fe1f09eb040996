//! Error types for slidealign-core
//!
//! Provides a unified error type for buffer construction and captcha
//! geometry. Each variant carries enough context for diagnostics.

use thiserror::Error;

/// slidealign-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid buffer or layer dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel data length does not match `width * height`
    #[error("buffer size mismatch: {width}x{height} needs {expected} pixels, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// The foreground layer (pixels or intrinsic size) is missing
    #[error("foreground layer is missing")]
    MissingForeground,

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
