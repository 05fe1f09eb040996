//! slidealign-align - Slide captcha offset search
//!
//! This crate ties the compositor and the disorder scorer together:
//!
//! - **Candidates**: descending sweep of background shifts, or one replayed offset
//! - **Search**: composite and score every candidate, keep the least disordered
//! - **Cancellation**: a shared flag checked before each candidate
//!
//! # Quick Start
//!
//! ```no_run
//! use slidealign_align::{CancelToken, OffsetSearch};
//! use slidealign_core::{CaptchaAssets, Layer};
//!
//! let fg = Layer::from_argb(40, 80, vec![0; 40 * 80]).unwrap();
//! let bg = Layer::from_argb(160, 80, vec![0xFFEEEEEE; 160 * 80]).unwrap();
//! let assets = CaptchaAssets::new(fg, Some(bg));
//!
//! let result = OffsetSearch::new()
//!     .find_best_alignment(&assets, None, &CancelToken::new())
//!     .unwrap();
//! println!("offset {} ({}x{})", result.best_offset, result.width(), result.height());
//! ```

pub mod cancel;
pub mod candidates;
pub mod config;
mod error;
pub mod search;

pub use cancel::CancelToken;
pub use candidates::Candidates;
pub use config::{INITIAL_BEST, MAX_PADDING, MAX_THUMBNAIL_HEIGHT, SearchConfig};
pub use error::{AlignError, AlignResult};
pub use search::{OffsetSearch, ResultImageData, Trial, find_best_alignment};

// Re-export core for convenience
pub use slidealign_core;
