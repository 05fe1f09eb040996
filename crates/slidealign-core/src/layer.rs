//! Layer - an immutable, shareable pixel buffer
//!
//! # Ownership model
//!
//! `Layer` uses `Arc` for cheap cloning (shared ownership). Layers are
//! read-only inputs to compositing; to edit pixels, build a
//! [`PixelBuffer`] and convert it with `Into<Layer>`.

use crate::buffer::PixelBuffer;
use crate::error::Result;
use std::sync::Arc;

/// An immutable rectangular ARGB pixel buffer.
///
/// # Examples
///
/// ```
/// use slidealign_core::{Layer, PixelBuffer};
///
/// let layer: Layer = PixelBuffer::filled(16, 80, 0xFF000000).unwrap().into();
/// let shared = layer.clone();
/// assert_eq!(shared.width(), 16);
/// assert_eq!(shared.get(0, 79), Some(0xFF000000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    inner: Arc<PixelBuffer>,
}

impl Layer {
    /// Build a layer from row-major ARGB pixels.
    pub fn from_argb(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        Ok(PixelBuffer::from_vec(width, height, pixels)?.into())
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        self.inner.get(x, y)
    }

    /// All pixels, row-major
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        self.inner.pixels()
    }

    /// Borrow the underlying buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}

impl From<PixelBuffer> for Layer {
    fn from(buffer: PixelBuffer) -> Self {
        Self {
            inner: Arc::new(buffer),
        }
    }
}
