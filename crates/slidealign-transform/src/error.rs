//! Error types for slidealign-transform

use thiserror::Error;

/// Errors that can occur while drawing or compositing
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] slidealign_core::Error),

    /// Layer does not match the geometry the compositor was built for
    #[error("layer size {actual_w}x{actual_h} does not match expected {expected_w}x{expected_h}")]
    LayerMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },

    /// Singular matrix (non-invertible)
    #[error("singular transformation matrix")]
    SingularMatrix,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
