//! Captcha asset descriptor
//!
//! Holds the decoded layers of one captcha. The foreground is required by
//! every operation but stored as an `Option`; the precondition is checked
//! in [`CaptchaAssets::foreground`].

use crate::error::{Error, Result};
use crate::layer::Layer;

/// Decoded background/foreground layers of one captcha.
#[derive(Debug, Clone, Default)]
pub struct CaptchaAssets {
    foreground: Option<Layer>,
    background: Option<Layer>,
}

impl CaptchaAssets {
    /// Assets with a foreground and an optional background.
    pub fn new(foreground: Layer, background: Option<Layer>) -> Self {
        Self {
            foreground: Some(foreground),
            background,
        }
    }

    /// Assets from optional parts, as delivered by a decoder.
    pub fn from_parts(foreground: Option<Layer>, background: Option<Layer>) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// The foreground layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingForeground`] if no foreground was supplied.
    pub fn foreground(&self) -> Result<&Layer> {
        self.foreground.as_ref().ok_or(Error::MissingForeground)
    }

    /// The background layer, if any.
    pub fn background(&self) -> Option<&Layer> {
        self.background.as_ref()
    }

    /// Background width, `0` without a background.
    pub fn background_width(&self) -> u32 {
        self.background.as_ref().map_or(0, Layer::width)
    }
}
