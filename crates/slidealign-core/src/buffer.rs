//! PixelBuffer - a flat, mutable ARGB pixel buffer
//!
//! # Pixel layout
//!
//! - One `u32` per pixel, row-major, no row padding
//! - Color order is ARGB (alpha in the most significant byte)
//! - The pixel at `(x, y)` lives at index `y * width + x`

use crate::error::{Error, Result};

/// A mutable, owned pixel buffer.
///
/// # Examples
///
/// ```
/// use slidealign_core::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(4, 3).unwrap();
/// buf.fill(0xFFEEEEEE);
/// assert_eq!(buf.get(3, 2), Some(0xFFEEEEEE));
/// assert_eq!(buf.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer of the given size, initialized to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a buffer of the given size with every pixel set to `argb`.
    pub fn filled(width: u32, height: u32, argb: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![argb; len],
        })
    }

    /// Wrap existing row-major ARGB data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; zero-sized buffers cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, argb: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::InvalidParameter(format!(
                "pixel ({x}, {y}) outside {}x{}",
                self.width, self.height
            )));
        }
        let idx = self.index(x, y);
        self.data[idx] = argb;
        Ok(())
    }

    /// Set every pixel to `argb`.
    pub fn fill(&mut self, argb: u32) {
        self.data.fill(argb);
    }

    /// Borrow one row of pixels.
    pub fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Borrow one row of pixels mutably.
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// All pixels, row-major
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// All pixels, mutable
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
