//! Search configuration
//!
//! The defaults reproduce the captcha renderer exactly; the other values
//! exist for experiments with differently sized captchas.

use crate::{AlignError, AlignResult};
use serde::{Deserialize, Serialize};
use slidealign_core::{CaptchaGeometry, Layer, PADDING, THUMBNAIL_HEIGHT, color};
use slidealign_region::{DARK_THRESHOLD, MIN_COMPONENT_SIZE, ScoreParams};

/// Sentinel the first candidate has to beat
pub const INITIAL_BEST: f32 = 999.0;

/// Largest accepted thumbnail height
pub const MAX_THUMBNAIL_HEIGHT: u32 = 4096;

/// Largest accepted padding
pub const MAX_PADDING: u32 = 4096;

/// Tunables of the offset search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Target thumbnail height `th`; also the canvas width
    pub thumbnail_height: u32,
    /// Padding `pw` added at both ends of the strip
    pub padding: u32,
    /// Canvas and margin fill color (ARGB)
    pub fill_color: u32,
    /// Red-channel threshold below which a pixel is dark
    pub dark_threshold: u32,
    /// Smallest dark component kept as signal
    pub min_component_size: u32,
    /// Initial best score
    pub initial_best: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            thumbnail_height: THUMBNAIL_HEIGHT,
            padding: PADDING,
            fill_color: color::CAPTCHA_BG,
            dark_threshold: DARK_THRESHOLD,
            min_component_size: MIN_COMPONENT_SIZE,
            initial_best: INITIAL_BEST,
        }
    }
}

impl SearchConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thumbnail height
    pub fn with_thumbnail_height(mut self, th: u32) -> Self {
        self.thumbnail_height = th;
        self
    }

    /// Set the padding
    pub fn with_padding(mut self, pw: u32) -> Self {
        self.padding = pw;
        self
    }

    /// Set the minimum signal component size
    pub fn with_min_component_size(mut self, size: u32) -> Self {
        self.min_component_size = size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> AlignResult<()> {
        if self.thumbnail_height == 0 || self.thumbnail_height > MAX_THUMBNAIL_HEIGHT {
            return Err(AlignError::InvalidConfig(format!(
                "thumbnail_height must be in 1..={}",
                MAX_THUMBNAIL_HEIGHT
            )));
        }
        if self.padding > MAX_PADDING {
            return Err(AlignError::InvalidConfig(format!(
                "padding must not exceed {}",
                MAX_PADDING
            )));
        }
        if self.min_component_size == 0 {
            return Err(AlignError::InvalidConfig(
                "min_component_size must be positive".to_string(),
            ));
        }
        if self.dark_threshold > 256 {
            return Err(AlignError::InvalidConfig(
                "dark_threshold must not exceed 256".to_string(),
            ));
        }
        // scores are never negative
        if self.initial_best.is_nan() || self.initial_best <= 0.0 {
            return Err(AlignError::InvalidConfig(
                "initial_best must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Canvas geometry for `foreground` under this configuration
    pub fn geometry_for(&self, foreground: &Layer) -> AlignResult<CaptchaGeometry> {
        Ok(CaptchaGeometry::new(
            foreground.width(),
            foreground.height(),
            self.thumbnail_height,
            self.padding,
        )?)
    }

    /// Scorer parameters
    pub fn score_params(&self) -> ScoreParams {
        ScoreParams {
            dark_threshold: self.dark_threshold,
            min_component_size: self.min_component_size,
        }
    }
}
