//! Error types for slidealign-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Pixel slice length does not match the stated dimensions
    #[error("buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
