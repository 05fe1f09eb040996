//! Disorder scoring
//!
//! Measures how fragmented the dark strokes of a composite are:
//!
//! 1. Classify dark pixels (red channel below the threshold)
//! 2. Flood-fill dark components; components of at least
//!    `min_component_size` pixels are *signal*, smaller ones are noise
//! 3. Count vertical transitions: indices `i` in `0..w*h-w` where the
//!    signal bit of `i` differs from that of `i + w`
//! 4. Divide by the number of signal pixels among those same indices
//!    (floored at 1), so signal in the last row is never counted
//!
//! Lower scores mean more coherent vertical strokes.

use crate::conncomp::{DARK_THRESHOLD, FloodScratch};
use crate::error::{RegionError, RegionResult};
use slidealign_core::PixelBuffer;

/// Components smaller than this many pixels are discarded as noise
pub const MIN_COMPONENT_SIZE: u32 = 24;

/// Scoring parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    /// Red-channel threshold for dark pixels (exclusive)
    pub dark_threshold: u32,
    /// Minimum pixel count for a component to survive as signal
    pub min_component_size: u32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            dark_threshold: DARK_THRESHOLD,
            min_component_size: MIN_COMPONENT_SIZE,
        }
    }
}

/// Breakdown of one scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisorderReport {
    /// Vertical signal/non-signal transitions (numerator)
    pub transitions: u32,
    /// Signal pixels above the last row (denominator)
    pub signal_pixels: u32,
    /// Components kept as signal
    pub signal_components: u32,
    /// Components discarded as noise
    pub noise_components: u32,
    /// `transitions / max(signal_pixels, 1)`
    pub score: f32,
}

/// Disorder scorer with reusable working buffers.
///
/// Scoring is deterministic: the same pixels always yield the same score,
/// whatever was scored before.
#[derive(Debug, Default, Clone)]
pub struct DisorderScorer {
    params: ScoreParams,
    flood: FloodScratch,
    signal: Vec<bool>,
}

impl DisorderScorer {
    /// Scorer with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with explicit parameters
    pub fn with_params(params: ScoreParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Current parameters
    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    /// Disorder score of a composite.
    pub fn score(&mut self, buffer: &PixelBuffer) -> f32 {
        self.analyze(buffer).score
    }

    /// Disorder score of a raw row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::BufferSizeMismatch`] when
    /// `pixels.len() != width * height`.
    pub fn score_raw(&mut self, pixels: &[u32], width: u32, height: u32) -> RegionResult<f32> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RegionError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(self.analyze_pixels(pixels, width as usize).score)
    }

    /// Full breakdown of a scoring pass.
    pub fn analyze(&mut self, buffer: &PixelBuffer) -> DisorderReport {
        self.analyze_pixels(buffer.pixels(), buffer.width() as usize)
    }

    fn analyze_pixels(&mut self, pixels: &[u32], width: usize) -> DisorderReport {
        let total = pixels.len();
        let min_size = self.params.min_component_size as usize;
        let mut report = DisorderReport::default();

        self.signal.clear();
        self.signal.resize(total, false);

        let signal = &mut self.signal;
        self.flood
            .for_each_component(pixels, width, self.params.dark_threshold, |members| {
                if members.len() >= min_size {
                    report.signal_components += 1;
                    for &idx in members {
                        signal[idx] = true;
                    }
                } else {
                    report.noise_components += 1;
                }
            });

        let upper = total.saturating_sub(width);
        for i in 0..upper {
            if self.signal[i] {
                report.signal_pixels += 1;
            }
            if self.signal[i] != self.signal[i + width] {
                report.transitions += 1;
            }
        }
        report.score = report.transitions as f32 / report.signal_pixels.max(1) as f32;
        report
    }
}

/// Disorder score of `buffer` with the default parameters.
///
/// # Examples
///
/// ```
/// use slidealign_core::PixelBuffer;
/// use slidealign_region::disorder_score;
///
/// let light = PixelBuffer::filled(10, 10, 0xFFEEEEEE).unwrap();
/// assert_eq!(disorder_score(&light), 0.0);
/// ```
pub fn disorder_score(buffer: &PixelBuffer) -> f32 {
    DisorderScorer::new().score(buffer)
}
