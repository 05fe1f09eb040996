//! Error types for slidealign-align

use thiserror::Error;

/// Errors that can occur during the offset search
#[derive(Debug, Error)]
pub enum AlignError {
    /// The captcha assets cannot be aligned (missing foreground, zero or
    /// oversized foreground dimensions)
    #[error("precondition failed: {0}")]
    Precondition(#[from] slidealign_core::Error),

    /// Compositing failed
    #[error("transform error: {0}")]
    Transform(#[from] slidealign_transform::TransformError),

    /// Invalid search configuration
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The caller-supplied offset is not a finite number
    #[error("invalid custom offset: {0}")]
    InvalidOffset(f32),

    /// No candidate scored below the initial best
    #[error("no candidate scored below {sentinel}")]
    NoCandidate { sentinel: f32 },

    /// The search was cancelled; no result is produced
    #[error("alignment search cancelled")]
    Cancelled,
}

/// Result type for alignment operations
pub type AlignResult<T> = Result<T, AlignError>;
