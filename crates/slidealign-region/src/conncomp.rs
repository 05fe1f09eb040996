//! Dark-pixel connected components
//!
//! A pixel is *dark* when its red channel is below a threshold. Dark
//! pixels are grouped by a 4-way flood fill over the flat buffer using the
//! neighbour offsets `±1` and `±width`.
//!
//! # Row wrap
//!
//! The `±1` neighbours are not checked against row boundaries: the last
//! pixel of a row is adjacent to the first pixel of the next row. Neighbour
//! indices outside the buffer are skipped.

use slidealign_core::color;

/// Red-channel threshold below which a pixel counts as dark
pub const DARK_THRESHOLD: u32 = 64;

/// True if the red channel of `pixel` is below `threshold`.
#[inline]
pub fn is_dark(pixel: u32, threshold: u32) -> bool {
    (color::red(pixel) as u32) < threshold
}

/// A connected group of dark pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// 1-based label in discovery order
    pub label: u32,
    /// Flat indices of the member pixels, in fill order
    pub indices: Vec<usize>,
}

impl ConnectedComponent {
    /// Number of pixels in this component
    pub fn pixel_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Reusable working buffers for flood filling one image at a time.
///
/// Buffers grow to the largest image seen and are cleared, not
/// reallocated, between calls.
#[derive(Debug, Default, Clone)]
pub struct FloodScratch {
    visited: Vec<bool>,
    stack: Vec<usize>,
    members: Vec<usize>,
}

impl FloodScratch {
    /// Create empty scratch space
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit every dark component of `pixels` in scan order of its first
    /// pixel, calling `f` with the member indices.
    pub fn for_each_component(
        &mut self,
        pixels: &[u32],
        width: usize,
        threshold: u32,
        mut f: impl FnMut(&[usize]),
    ) {
        let total = pixels.len();
        self.visited.clear();
        self.visited.resize(total, false);

        for seed in 0..total {
            if self.visited[seed] || !is_dark(pixels[seed], threshold) {
                continue;
            }
            self.fill_from(seed, pixels, width, threshold);
            f(&self.members);
        }
    }

    fn fill_from(&mut self, seed: usize, pixels: &[u32], width: usize, threshold: u32) {
        let total = pixels.len();
        self.members.clear();
        self.stack.clear();
        self.stack.push(seed);

        while let Some(cc) = self.stack.pop() {
            if self.visited[cc] {
                continue;
            }
            self.visited[cc] = true;

            if !is_dark(pixels[cc], threshold) {
                continue;
            }
            self.members.push(cc);

            if cc + 1 < total {
                self.stack.push(cc + 1);
            }
            if let Some(left) = cc.checked_sub(1) {
                self.stack.push(left);
            }
            if cc + width < total {
                self.stack.push(cc + width);
            }
            if let Some(up) = cc.checked_sub(width) {
                self.stack.push(up);
            }
        }
    }
}

/// Find all dark connected components of a `width`-wide flat buffer.
///
/// # Examples
///
/// ```
/// use slidealign_region::{DARK_THRESHOLD, find_dark_components};
///
/// const D: u32 = 0xFF000000;
/// const L: u32 = 0xFFEEEEEE;
/// let pixels = [
///     D, D, L, //
///     L, L, L, //
///     L, D, D,
/// ];
/// let comps = find_dark_components(&pixels, 3, DARK_THRESHOLD);
/// assert_eq!(comps.len(), 2);
/// assert_eq!(comps[0].pixel_count(), 2);
/// ```
pub fn find_dark_components(pixels: &[u32], width: usize, threshold: u32) -> Vec<ConnectedComponent> {
    let mut scratch = FloodScratch::new();
    let mut out = Vec::new();
    scratch.for_each_component(pixels, width, threshold, |members| {
        out.push(ConnectedComponent {
            label: out.len() as u32 + 1,
            indices: members.to_vec(),
        });
    });
    out
}
