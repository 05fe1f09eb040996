//! slidealign-region - Region analysis for slidealign
//!
//! This crate provides:
//!
//! - **Dark-pixel connected components** - flood fill over a flat ARGB buffer
//! - **Disorder scoring** - how fragmented the surviving dark strokes are
//!
//! # Example
//!
//! ```
//! use slidealign_core::PixelBuffer;
//! use slidealign_region::DisorderScorer;
//!
//! let mut buf = PixelBuffer::filled(10, 20, 0xFFEEEEEE).unwrap();
//! for y in 2..18 {
//!     for x in 4..7 {
//!         buf.set(x, y, 0xFF000000).unwrap();
//!     }
//! }
//!
//! // 3 transitions above and 3 below a 48-pixel stroke
//! let mut scorer = DisorderScorer::new();
//! assert_eq!(scorer.score(&buf), 6.0 / 48.0);
//! ```

pub mod conncomp;
pub mod disorder;
pub mod error;

// Re-export core types
pub use slidealign_core;

pub use conncomp::{ConnectedComponent, DARK_THRESHOLD, FloodScratch, find_dark_components, is_dark};
pub use disorder::{DisorderReport, DisorderScorer, MIN_COMPONENT_SIZE, ScoreParams, disorder_score};
pub use error::{RegionError, RegionResult};
