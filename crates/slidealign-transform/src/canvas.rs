//! Canvas - a pixel buffer with an explicit drawing transform
//!
//! Drawing happens in *local* coordinates which the current matrix maps to
//! *device* pixels. Rasterization is nearest-neighbour: every device pixel
//! whose centre, mapped back through the inverse matrix, falls inside the
//! drawn shape is painted. Layers are sampled at the `floor` of the mapped
//! local coordinate and blended with source-over.
//!
//! The matrix is plain state on the value. [`Canvas::reset`] restores the
//! identity and refills every pixel, so nothing carries over between
//! compositing trials.

use crate::affine::AffineMatrix;
use crate::error::TransformResult;
use slidealign_core::{Layer, PixelBuffer, color};

/// Rectangle in local drawing coordinates, right/bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    /// Create a new rectangle
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// True when `(x, y)` lies inside (left/top inclusive, right/bottom exclusive)
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// True when the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}

/// A drawing surface over an owned [`PixelBuffer`].
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: PixelBuffer,
    matrix: AffineMatrix,
}

impl Canvas {
    /// Create a canvas of `width x height` device pixels, transparent black.
    pub fn new(width: u32, height: u32) -> TransformResult<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height)?,
            matrix: AffineMatrix::identity(),
        })
    }

    /// Device width
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    /// Device height
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Fill every device pixel with `argb` and reset the matrix to identity.
    pub fn reset(&mut self, argb: u32) {
        self.buffer.fill(argb);
        self.matrix = AffineMatrix::identity();
    }

    /// Current local-to-device matrix
    pub fn matrix(&self) -> &AffineMatrix {
        &self.matrix
    }

    /// Pre-concatenate `m`: subsequent draws map through `m` first.
    pub fn concat(&mut self, m: &AffineMatrix) {
        self.matrix = self.matrix.compose(m);
    }

    /// Pre-concatenate a scale.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.concat(&AffineMatrix::scale(sx, sy));
    }

    /// Pre-concatenate a rotation by `degrees` about the local origin.
    pub fn rotate(&mut self, degrees: f32) {
        self.concat(&AffineMatrix::rotation(degrees));
    }

    /// Run `f` with an extra local translation, then restore the matrix.
    pub fn with_translation<R>(&mut self, dx: f32, dy: f32, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.matrix.clone();
        self.concat(&AffineMatrix::translation(dx, dy));
        let out = f(self);
        self.matrix = saved;
        out
    }

    /// Fill a local rectangle with `argb`.
    pub fn fill_rect(&mut self, rect: RectF, argb: u32) -> TransformResult<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let inverse = self.matrix.inverse()?;
        let Some((x0, y0, x1, y1)) = self.device_span(&rect) else {
            return Ok(());
        };
        for dy in y0..y1 {
            let row = self.buffer.row_mut(dy);
            for dx in x0..x1 {
                let (lx, ly) = inverse.transform_point_float(dx as f32 + 0.5, dy as f32 + 0.5);
                if rect.contains(lx, ly) {
                    let dst = &mut row[dx as usize];
                    *dst = color::blend_over(argb, *dst);
                }
            }
        }
        Ok(())
    }

    /// Draw the top-left `clip_width x clip_height` corner of `layer` at the
    /// local origin. Columns and rows past the clip do not paint.
    pub fn draw_layer(
        &mut self,
        layer: &Layer,
        clip_width: u32,
        clip_height: u32,
    ) -> TransformResult<()> {
        let clip_width = clip_width.min(layer.width());
        let clip_height = clip_height.min(layer.height());
        let rect = RectF::new(0.0, 0.0, clip_width as f32, clip_height as f32);
        if rect.is_empty() {
            return Ok(());
        }
        let inverse = self.matrix.inverse()?;
        let Some((x0, y0, x1, y1)) = self.device_span(&rect) else {
            return Ok(());
        };
        let src = layer.pixels();
        let stride = layer.width() as usize;
        for dy in y0..y1 {
            let row = self.buffer.row_mut(dy);
            for dx in x0..x1 {
                let (lx, ly) = inverse.transform_point_float(dx as f32 + 0.5, dy as f32 + 0.5);
                if !rect.contains(lx, ly) {
                    continue;
                }
                let sx = lx.floor() as usize;
                let sy = ly.floor() as usize;
                let dst = &mut row[dx as usize];
                *dst = color::blend_over(src[sy * stride + sx], *dst);
            }
        }
        Ok(())
    }

    /// Borrow the device pixels.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Device pixel range `[x0, x1) x [y0, y1)` that can be touched by
    /// `rect`, clamped to the canvas. `None` when nothing is visible.
    fn device_span(&self, rect: &RectF) -> Option<(u32, u32, u32, u32)> {
        let (min_x, min_y, max_x, max_y) =
            self.matrix
                .transform_bounds(rect.left, rect.top, rect.right, rect.bottom);
        let w = self.width() as f32;
        let h = self.height() as f32;
        let x0 = min_x.floor().clamp(0.0, w) as u32;
        let y0 = min_y.floor().clamp(0.0, h) as u32;
        let x1 = max_x.ceil().clamp(0.0, w) as u32;
        let y1 = max_y.ceil().clamp(0.0, h) as u32;
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_identity() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.reset(0xFF000000);
        canvas
            .fill_rect(RectF::new(1.0, 0.0, 3.0, 2.0), 0xFFFFFFFF)
            .unwrap();
        let px = canvas.buffer().pixels();
        assert_eq!(
            px,
            &[
                0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000, //
                0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000, //
                0xFF000000, 0xFF000000, 0xFF000000, 0xFF000000,
            ]
        );
    }

    #[test]
    fn test_draw_layer_clipped_and_translated() {
        let layer = Layer::from_argb(3, 1, vec![0xFF000001, 0xFF000002, 0xFF000003]).unwrap();
        let mut canvas = Canvas::new(5, 1).unwrap();
        canvas.reset(0xFF000000);
        canvas
            .with_translation(1.0, 0.0, |c| c.draw_layer(&layer, 2, 1))
            .unwrap();
        assert_eq!(
            canvas.buffer().pixels(),
            &[0xFF000000, 0xFF000001, 0xFF000002, 0xFF000000, 0xFF000000]
        );
        // translation restored
        assert_eq!(canvas.matrix(), &AffineMatrix::identity());
    }

    #[test]
    fn test_draw_layer_transposed() {
        // 2x1 layer drawn through flip+rotate lands as a 1x2 column
        let layer = Layer::from_argb(2, 1, vec![0xFF0000AA, 0xFF0000BB]).unwrap();
        let mut canvas = Canvas::new(1, 2).unwrap();
        canvas.reset(0xFF000000);
        canvas.scale(-1.0, 1.0);
        canvas.rotate(90.0);
        canvas.draw_layer(&layer, 2, 1).unwrap();
        assert_eq!(canvas.buffer().pixels(), &[0xFF0000AA, 0xFF0000BB]);
    }

    #[test]
    fn test_transparent_pixels_do_not_paint() {
        let layer = Layer::from_argb(2, 1, vec![0x00FFFFFF, 0xFF123456]).unwrap();
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.reset(0xFFEEEEEE);
        canvas.draw_layer(&layer, 2, 1).unwrap();
        assert_eq!(canvas.buffer().pixels(), &[0xFFEEEEEE, 0xFF123456]);
    }

    #[test]
    fn test_draw_layer_row_clip() {
        let layer = Layer::from_argb(1, 3, vec![0xFF000001, 0xFF000002, 0xFF000003]).unwrap();
        let mut canvas = Canvas::new(1, 3).unwrap();
        canvas.reset(0xFF000000);
        canvas.draw_layer(&layer, 1, 2).unwrap();
        assert_eq!(canvas.buffer().pixels(), &[0xFF000001, 0xFF000002, 0xFF000000]);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.rotate(90.0);
        canvas.reset(7);
        assert_eq!(canvas.matrix(), &AffineMatrix::identity());
        assert!(canvas.buffer().pixels().iter().all(|&p| p == 7));
    }

    #[test]
    fn test_offscreen_draw_is_noop() {
        let layer = Layer::from_argb(1, 1, vec![0xFFFFFFFF]).unwrap();
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.reset(0xFF000000);
        canvas
            .with_translation(-5.0, 0.0, |c| c.draw_layer(&layer, 1, 1))
            .unwrap();
        assert!(canvas.buffer().pixels().iter().all(|&p| p == 0xFF000000));
    }
}
