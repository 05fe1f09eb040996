//! Synthetic captcha layers
//!
//! Tests describe layers in the *layer's* own coordinates (x along the
//! captcha, y across it). After compositing, a layer row becomes a device
//! column, so a horizontal run in a layer turns into a vertical stroke on
//! the canvas.

use slidealign_core::{Layer, PixelBuffer};

/// Opaque black, always dark
pub const DARK: u32 = 0xFF000000;
/// Opaque captcha gray, never dark
pub const LIGHT: u32 = 0xFFEEEEEE;
/// Fully transparent, paints nothing
pub const TRANSPARENT: u32 = 0x00000000;

/// Fluent builder for test layers and buffers.
#[derive(Debug, Clone)]
pub struct LayerBuilder {
    buf: PixelBuffer,
}

impl LayerBuilder {
    /// A fully transparent `width x height` layer
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// A `width x height` layer filled with `argb`
    pub fn filled(width: u32, height: u32, argb: u32) -> Self {
        let buf = PixelBuffer::filled(width, height, argb).expect("test layer dimensions");
        Self { buf }
    }

    /// Paint one pixel
    pub fn pixel(mut self, x: u32, y: u32, argb: u32) -> Self {
        self.buf.set(x, y, argb).expect("test pixel in bounds");
        self
    }

    /// Paint the rectangle `[x, x + w) x [y, y + h)`
    pub fn rect(mut self, x: u32, y: u32, w: u32, h: u32, argb: u32) -> Self {
        for yy in y..y + h {
            for xx in x..x + w {
                self.buf.set(xx, yy, argb).expect("test rect in bounds");
            }
        }
        self
    }

    /// Paint columns `[x0, x1)` of row `y`
    pub fn run(self, y: u32, x0: u32, x1: u32, argb: u32) -> Self {
        self.rect(x0, y, x1 - x0, 1, argb)
    }

    /// Sprinkle `argb` over roughly `density` of the pixels, reproducibly.
    pub fn speckle(mut self, seed: u32, density: f64, argb: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        for p in self.buf.pixels_mut() {
            if rng.next_f64() < density {
                *p = argb;
            }
        }
        self
    }

    /// Finish as a mutable buffer
    pub fn build_buffer(self) -> PixelBuffer {
        self.buf
    }

    /// Finish as an immutable layer
    pub fn build(self) -> Layer {
        self.buf.into()
    }
}

/// Simple linear congruential generator for reproducible noise
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_and_run() {
        let buf = LayerBuilder::filled(4, 3, LIGHT)
            .rect(1, 1, 2, 2, DARK)
            .run(0, 0, 2, DARK)
            .build_buffer();
        assert_eq!(buf.row(0), &[DARK, DARK, LIGHT, LIGHT]);
        assert_eq!(buf.row(1), &[LIGHT, DARK, DARK, LIGHT]);
    }

    #[test]
    fn test_speckle_is_reproducible() {
        let a = LayerBuilder::filled(20, 20, LIGHT).speckle(7, 0.2, DARK).build_buffer();
        let b = LayerBuilder::filled(20, 20, LIGHT).speckle(7, 0.2, DARK).build_buffer();
        assert_eq!(a, b);
        let dark = a.pixels().iter().filter(|&&p| p == DARK).count();
        assert!(dark > 0 && dark < 400);
    }
}
