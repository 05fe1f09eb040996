//! Offset search
//!
//! Finds the background shift that best lines the background up with the
//! foreground stencil.
//!
//! # Algorithm Overview
//!
//! 1. **Candidates**: every integer offset from `0` down to
//!    `-(bg_width - canvas_height)`, or the single rounded custom offset.
//!
//! 2. **Trial**: composite the layers at the candidate offset and score
//!    the composite's disorder.
//!
//! 3. **Selection**: a candidate replaces the retained best only when its
//!    score is strictly lower, so ties keep the offset closest to zero.
//!
//! The reported offset is the negated internal offset.

use crate::candidates::Candidates;
use crate::cancel::CancelToken;
use crate::config::SearchConfig;
use crate::{AlignError, AlignResult};
use slidealign_core::{CaptchaAssets, PixelBuffer};
use slidealign_region::DisorderScorer;
use slidealign_transform::Compositor;
use std::time::Instant;
use tracing::{debug, info};

/// Result of an offset search
#[derive(Debug, Clone, PartialEq)]
pub struct ResultImageData {
    /// Reported offset: the negation of the winning internal offset
    pub best_offset: i32,
    /// Disorder score of the retained composite
    pub best_disorder: f32,
    /// Number of candidates composited and scored
    pub candidates_evaluated: usize,
    /// The winning composite
    pub pixels: PixelBuffer,
}

/// One scored candidate, as passed to the trial callback of
/// [`OffsetSearch::find_best_alignment_with`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    /// Internal offset of the candidate
    pub offset: i32,
    /// Disorder score of its composite
    pub score: f32,
    /// Whether it replaced the retained best
    pub improved: bool,
}

impl ResultImageData {
    /// Composite width (the thumbnail height)
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Composite height (the strip length)
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Offset search with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct OffsetSearch {
    config: SearchConfig,
}

impl OffsetSearch {
    /// Search with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Search with a validated configuration
    pub fn with_config(config: SearchConfig) -> AlignResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Current configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the background offset with the lowest disorder.
    ///
    /// With `custom_offset` the search is skipped and only
    /// `round(custom_offset)` is evaluated; the result then reports
    /// `-round(custom_offset)`.
    ///
    /// # Arguments
    ///
    /// * `assets` - Decoded captcha layers; the foreground is required
    /// * `custom_offset` - Previously found internal offset to replay
    /// * `cancel` - Checked before every candidate
    ///
    /// # Errors
    ///
    /// * [`AlignError::Precondition`] when the foreground is missing or its
    ///   size yields no valid canvas
    /// * [`AlignError::InvalidOffset`] for a non-finite custom offset
    /// * [`AlignError::NoCandidate`] when no candidate scores below
    ///   `initial_best`
    /// * [`AlignError::Cancelled`] when `cancel` fires; no partial result is
    ///   returned
    pub fn find_best_alignment(
        &self,
        assets: &CaptchaAssets,
        custom_offset: Option<f32>,
        cancel: &CancelToken,
    ) -> AlignResult<ResultImageData> {
        self.find_best_alignment_with(assets, custom_offset, cancel, |_| {})
    }

    /// [`find_best_alignment`](Self::find_best_alignment), calling
    /// `on_trial` after every scored candidate.
    pub fn find_best_alignment_with<F>(
        &self,
        assets: &CaptchaAssets,
        custom_offset: Option<f32>,
        cancel: &CancelToken,
        mut on_trial: F,
    ) -> AlignResult<ResultImageData>
    where
        F: FnMut(Trial),
    {
        let start = Instant::now();
        let foreground = assets.foreground()?;
        let background = assets.background();

        let geometry = self.config.geometry_for(foreground)?;
        let mut compositor = Compositor::new(geometry, self.config.fill_color)?;
        let mut scorer = DisorderScorer::with_params(self.config.score_params());

        let candidates = match custom_offset {
            Some(offset) => Candidates::replay(offset)?,
            None => Candidates::sweep(geometry.search_span(assets.background_width())),
        };
        let total = candidates.len();

        let mut best_score = self.config.initial_best;
        let mut best: Option<(i32, PixelBuffer)> = None;
        let mut evaluated = 0;

        for offset in candidates {
            if let Err(e) = cancel.check() {
                debug!(
                    offset,
                    evaluated,
                    discarded = best.is_some(),
                    "offset search cancelled"
                );
                return Err(e);
            }

            let composite = compositor.composite(background, foreground, offset)?;
            let score = scorer.score(composite);
            evaluated += 1;

            let improved = score < best_score;
            if improved {
                debug!(offset, score, "new best offset");
                best_score = score;
                best = Some((offset, composite.clone()));
            }
            on_trial(Trial {
                offset,
                score,
                improved,
            });
        }

        let (offset, pixels) = best.ok_or(AlignError::NoCandidate {
            sentinel: self.config.initial_best,
        })?;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            best_offset = -offset,
            best_disorder = best_score,
            candidates = total,
            elapsed_ms,
            "offset search finished"
        );

        Ok(ResultImageData {
            best_offset: -offset,
            best_disorder: best_score,
            candidates_evaluated: evaluated,
            pixels,
        })
    }
}

/// Search with the default configuration and no cancellation.
pub fn find_best_alignment(
    assets: &CaptchaAssets,
    custom_offset: Option<f32>,
) -> AlignResult<ResultImageData> {
    OffsetSearch::new().find_best_alignment(assets, custom_offset, &CancelToken::new())
}
