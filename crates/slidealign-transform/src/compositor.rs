//! Captcha layer compositor
//!
//! Produces one fixed-size composite per candidate offset:
//!
//! 1. Fill the canvas with the captcha background color
//! 2. Apply the captcha transform: mirror + integer scale, then a 90 degree
//!    rotation. Local `(x, y)` lands on device `(s*y, s*x)`, so the
//!    horizontal captcha becomes a tall column strip.
//! 3. Draw the background layer, clipped to `bg_width - width_diff`
//!    columns, translated by `half_diff + offset`
//! 4. Draw the foreground layer translated by `half_diff`
//! 5. Refill the `half_diff`-wide margins at both ends of the strip
//! 6. Hand back the canvas pixels
//!
//! The compositor owns its [`Canvas`] and resets it at the start of every
//! call, so trials never observe each other.

use crate::affine::AffineMatrix;
use crate::canvas::{Canvas, RectF};
use crate::error::{TransformError, TransformResult};
use slidealign_core::{CaptchaGeometry, Layer, PixelBuffer, color};

/// Composites a background and foreground layer for one captcha geometry.
#[derive(Debug, Clone)]
pub struct Compositor {
    geometry: CaptchaGeometry,
    fill: u32,
    transform: AffineMatrix,
    canvas: Canvas,
}

impl Compositor {
    /// Compositor for `geometry`, filling with `fill` (normally
    /// [`color::CAPTCHA_BG`]).
    pub fn new(geometry: CaptchaGeometry, fill: u32) -> TransformResult<Self> {
        let canvas = Canvas::new(geometry.canvas_width, geometry.canvas_height)?;
        Ok(Self {
            transform: captcha_transform(&geometry),
            geometry,
            fill,
            canvas,
        })
    }

    /// Compositor with the default geometry and fill for `foreground`.
    pub fn for_foreground(foreground: &Layer) -> TransformResult<Self> {
        let geometry = CaptchaGeometry::for_foreground(foreground.width(), foreground.height())?;
        Self::new(geometry, color::CAPTCHA_BG)
    }

    /// The geometry this compositor was built for
    pub fn geometry(&self) -> &CaptchaGeometry {
        &self.geometry
    }

    /// Fill color used for the canvas and the margins
    pub fn fill(&self) -> u32 {
        self.fill
    }

    /// Composite the layers with the background shifted by `offset`.
    ///
    /// The returned buffer is `canvas_width x canvas_height` and stays valid
    /// until the next call.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::LayerMismatch`] if `foreground` does not
    /// have the size the geometry was derived from.
    pub fn composite(
        &mut self,
        background: Option<&Layer>,
        foreground: &Layer,
        offset: i32,
    ) -> TransformResult<&PixelBuffer> {
        let g = self.geometry;
        if foreground.width() != g.fg_width || foreground.height() != g.fg_height {
            return Err(TransformError::LayerMismatch {
                expected_w: g.fg_width,
                expected_h: g.fg_height,
                actual_w: foreground.width(),
                actual_h: foreground.height(),
            });
        }
        let half = g.half_diff();

        self.canvas.reset(self.fill);
        self.canvas.concat(&self.transform);

        if let Some(bg) = background {
            // rows below the foreground height are never drawn
            let clip = g.background_clip_width(bg.width());
            self.canvas.with_translation(half + offset as f32, 0.0, |c| {
                c.draw_layer(bg, clip, g.fg_height)
            })?;
        }

        self.canvas.with_translation(half, 0.0, |c| {
            c.draw_layer(foreground, g.fg_width, g.fg_height)
        })?;

        // Margins span the full strip length in local x; local y up to the
        // canvas width covers every device column.
        let strip = g.canvas_height as f32;
        let across = g.canvas_width as f32;
        self.canvas
            .fill_rect(RectF::new(0.0, 0.0, half, across), self.fill)?;
        self.canvas
            .fill_rect(RectF::new(strip - half, 0.0, strip, across), self.fill)?;

        Ok(self.canvas.buffer())
    }
}

/// The fixed captcha transform: `scale(-s, s)` followed by `rotate(90)`
/// in drawing-context order (the rotation applies to local points first).
pub fn captcha_transform(geometry: &CaptchaGeometry) -> AffineMatrix {
    let s = geometry.scale as f32;
    AffineMatrix::scale(-s, s).compose(&AffineMatrix::rotation(90.0))
}
