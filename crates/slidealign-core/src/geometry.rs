//! Captcha canvas geometry
//!
//! All sizes of one alignment run derive from the foreground layer's
//! intrinsic size plus two constants, the thumbnail height `th` and the
//! padding `pw`:
//!
//! ```text
//! scale        = th / fg_height            (integer division)
//! canvas_width = th
//! canvas_height = fg_width * scale + 2 * pw
//! width_diff   = canvas_height - fg_width
//! half_diff    = width_diff / 2            (may be fractional)
//! ```
//!
//! `canvas_height` is measured along the pre-rotation x axis, which is why
//! it is paired with the foreground *width*.

use crate::error::{Error, Result};

/// Default thumbnail height (`th`)
pub const THUMBNAIL_HEIGHT: u32 = 80;

/// Default padding on each side of the foreground (`pw`)
pub const PADDING: u32 = 16;

/// Derived canvas dimensions for one foreground size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptchaGeometry {
    /// Foreground intrinsic width
    pub fg_width: u32,
    /// Foreground intrinsic height
    pub fg_height: u32,
    /// Integer scale factor `th / fg_height`
    pub scale: u32,
    /// Output canvas width (`th`)
    pub canvas_width: u32,
    /// Output canvas height (`fg_width * scale + 2 * pw`)
    pub canvas_height: u32,
}

impl CaptchaGeometry {
    /// Derive the geometry with the default `th = 80`, `pw = 16`.
    pub fn for_foreground(fg_width: u32, fg_height: u32) -> Result<Self> {
        Self::new(fg_width, fg_height, THUMBNAIL_HEIGHT, PADDING)
    }

    /// Derive the geometry for explicit `thumbnail_height` and `padding`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty foreground and
    /// [`Error::InvalidParameter`] when the foreground is taller than the
    /// thumbnail (the integer scale would be zero) or the canvas height
    /// overflows `u32`.
    pub fn new(fg_width: u32, fg_height: u32, thumbnail_height: u32, padding: u32) -> Result<Self> {
        if fg_width == 0 || fg_height == 0 {
            return Err(Error::InvalidDimension {
                width: fg_width,
                height: fg_height,
            });
        }
        let scale = thumbnail_height / fg_height;
        if scale == 0 {
            return Err(Error::InvalidParameter(format!(
                "foreground height {fg_height} exceeds thumbnail height {thumbnail_height}"
            )));
        }
        let canvas_height = fg_width
            .checked_mul(scale)
            .zip(padding.checked_mul(2))
            .and_then(|(strip, margins)| strip.checked_add(margins))
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "canvas height overflows for width {fg_width}, scale {scale}, padding {padding}"
                ))
            })?;
        Ok(Self {
            fg_width,
            fg_height,
            scale,
            canvas_width: thumbnail_height,
            canvas_height,
        })
    }

    /// `canvas_height - fg_width`
    #[inline]
    pub fn width_diff(&self) -> u32 {
        self.canvas_height - self.fg_width
    }

    /// Half of [`width_diff`](Self::width_diff), kept fractional.
    #[inline]
    pub fn half_diff(&self) -> f32 {
        self.width_diff() as f32 / 2.0
    }

    /// Columns of the background drawn on every trial:
    /// `bg_width - width_diff`, saturating at zero.
    #[inline]
    pub fn background_clip_width(&self, bg_width: u32) -> u32 {
        bg_width.saturating_sub(self.width_diff())
    }

    /// Number of non-zero shifts that keep the background within the
    /// canvas: `bg_width - canvas_height`, saturating at zero.
    #[inline]
    pub fn search_span(&self, bg_width: u32) -> u32 {
        bg_width.saturating_sub(self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let g = CaptchaGeometry::for_foreground(300, 80).unwrap();
        assert_eq!(g.scale, 1);
        assert_eq!(g.canvas_width, 80);
        assert_eq!(g.canvas_height, 332);
        assert_eq!(g.width_diff(), 32);
        assert_eq!(g.half_diff(), 16.0);
    }

    #[test]
    fn test_integer_scale() {
        // 80 / 30 = 2 with integer division
        let g = CaptchaGeometry::for_foreground(100, 30).unwrap();
        assert_eq!(g.scale, 2);
        assert_eq!(g.canvas_height, 232);
        assert_eq!(g.width_diff(), 132);
    }

    #[test]
    fn test_too_tall_foreground() {
        assert!(matches!(
            CaptchaGeometry::for_foreground(100, 81),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_canvas_height_overflow() {
        assert!(matches!(
            CaptchaGeometry::new(300, 80, 80, 3_000_000_000),
            Err(Error::InvalidParameter(_))
        ));
        // 2 * 2^31 wraps only in the strip term
        assert!(matches!(
            CaptchaGeometry::new(1 << 31, 1, 2, 0),
            Err(Error::InvalidParameter(_))
        ));
        let g = CaptchaGeometry::new(1, 1, 1, u32::MAX / 2 - 1).unwrap();
        assert_eq!(g.canvas_height, u32::MAX - 2);
    }

    #[test]
    fn test_search_span_saturates() {
        let g = CaptchaGeometry::for_foreground(300, 80).unwrap();
        assert_eq!(g.search_span(350), 18);
        assert_eq!(g.search_span(332), 0);
        assert_eq!(g.search_span(100), 0);
        assert_eq!(g.background_clip_width(350), 318);
    }
}
