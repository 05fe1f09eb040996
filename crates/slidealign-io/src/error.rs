//! I/O error types

use thiserror::Error;

/// Error type for layer decoding and composite encoding.
#[derive(Error, Debug)]
pub enum IoError {
    /// Opening, reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a PNG, or PNG support is compiled out
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The PNG decoder rejected the input
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder failed
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded pixels do not form a valid layer
    #[error("layer error: {0}")]
    Core(#[from] slidealign_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
