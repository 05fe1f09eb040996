//! Cooperative cancellation

use crate::{AlignError, AlignResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable cancellation handle.
///
/// All clones share one flag; [`CancelToken::cancel`] may be called from
/// any thread and is observed by the search before its next candidate.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// `Err(AlignError::Cancelled)` once cancellation was requested
    pub fn check(&self) -> AlignResult<()> {
        if self.is_cancelled() {
            Err(AlignError::Cancelled)
        } else {
            Ok(())
        }
    }
}
