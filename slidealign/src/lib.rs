//! slidealign - Slide captcha alignment
//!
//! A slide captcha ships a foreground stencil and a wider background strip.
//! Shifting the background under the stencil by the right amount completes
//! the glyphs; this library finds that shift.
//!
//! # Overview
//!
//! - Layer decoding and composite export (`io`)
//! - Captcha compositing under the fixed mirror/rotate transform (`transform`)
//! - Dark-component disorder scoring (`region`)
//! - Offset search with replay and cancellation (`align`)
//!
//! # Example
//!
//! ```
//! use slidealign::{CaptchaAssets, Layer, find_best_alignment};
//!
//! let fg = Layer::from_argb(16, 80, vec![0; 16 * 80]).unwrap();
//! let bg = Layer::from_argb(53, 80, vec![0xFFEEEEEE; 53 * 80]).unwrap();
//! let result = find_best_alignment(&CaptchaAssets::new(fg, Some(bg)), None).unwrap();
//! assert_eq!((result.width(), result.height()), (80, 48));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use slidealign_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use slidealign_align as align;
pub use slidealign_io as io;
pub use slidealign_region as region;
pub use slidealign_transform as transform;

pub use slidealign_align::{
    AlignError, CancelToken, OffsetSearch, ResultImageData, SearchConfig, find_best_alignment,
};
