//! slidealign-transform - Drawing and compositing for slidealign
//!
//! This crate provides:
//!
//! - [`AffineMatrix`] - 2D affine transforms (translate, scale/mirror, rotate)
//! - [`Canvas`] - A pixel buffer with an explicit local-to-device matrix
//! - [`Compositor`] - Places the captcha background and foreground layers
//!   onto a reset canvas for one candidate offset
//!
//! # Example
//!
//! ```
//! use slidealign_core::{Layer, PixelBuffer};
//! use slidealign_transform::Compositor;
//!
//! let fg: Layer = PixelBuffer::filled(40, 80, 0x00000000).unwrap().into();
//! let mut compositor = Compositor::for_foreground(&fg).unwrap();
//! let out = compositor.composite(None, &fg, 0).unwrap();
//! assert_eq!((out.width(), out.height()), (80, 72));
//! ```

pub mod affine;
pub mod canvas;
pub mod compositor;
mod error;

pub use affine::AffineMatrix;
pub use canvas::{Canvas, RectF};
pub use compositor::{Compositor, captcha_transform};
pub use error::{TransformError, TransformResult};
