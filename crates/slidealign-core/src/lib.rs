//! slidealign-core - Basic data structures for captcha alignment
//!
//! This crate provides the fundamental data structures shared by the
//! compositing, scoring and search crates:
//!
//! - [`PixelBuffer`] - Mutable flat ARGB pixel buffer
//! - [`Layer`] - Immutable, shareable pixel buffer (background or foreground)
//! - [`CaptchaAssets`] - The decoded layers of one captcha
//! - [`CaptchaGeometry`] - Canvas dimensions derived from the foreground
//! - [`color`] - ARGB channel helpers and source-over blending

pub mod assets;
pub mod buffer;
pub mod error;
pub mod geometry;
pub mod layer;

pub use assets::CaptchaAssets;
pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use geometry::{CaptchaGeometry, PADDING, THUMBNAIL_HEIGHT};
pub use layer::Layer;

/// Color channel helpers for 32-bit ARGB pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB` (alpha in MSB, blue in LSB).
pub mod color {
    /// Opaque light gray used as the captcha background fill
    pub const CAPTCHA_BG: u32 = 0xFFEEEEEE;

    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_argb(255, r, g, b)
    }

    /// Compose a 32-bit ARGB pixel.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Extract (a, r, g, b) from a 32-bit pixel.
    #[inline]
    pub fn extract_argb(pixel: u32) -> (u8, u8, u8, u8) {
        (alpha(pixel), red(pixel), green(pixel), blue(pixel))
    }

    /// Porter-Duff source-over of a non-premultiplied `src` onto `dst`.
    ///
    /// Fully opaque sources replace the destination and fully transparent
    /// sources leave it untouched, so opaque layers composite exactly.
    #[inline]
    pub fn blend_over(src: u32, dst: u32) -> u32 {
        let sa = alpha(src) as u32;
        match sa {
            255 => src,
            0 => dst,
            _ => {
                let da = alpha(dst) as u32;
                // out_a = sa + da * (1 - sa), in 0..=255 * 255
                let out_a = sa * 255 + da * (255 - sa);
                if out_a == 0 {
                    return 0;
                }
                let mix = |s: u8, d: u8| -> u8 {
                    let num = s as u32 * sa * 255 + d as u32 * da * (255 - sa);
                    ((num + out_a / 2) / out_a) as u8
                };
                compose_argb(
                    ((out_a + 127) / 255) as u8,
                    mix(red(src), red(dst)),
                    mix(green(src), green(dst)),
                    mix(blue(src), blue(dst)),
                )
            }
        }
    }

}
