//! Affine transformation matrices
//!
//! # Affine Matrix
//!
//! An affine transformation is represented as:
//! ```text
//! | a  b  tx |
//! | c  d  ty |
//! | 0  0  1  |
//! ```
//!
//! The transformation equations are:
//! ```text
//! x' = a*x + b*y + tx
//! y' = c*x + d*y + ty
//! ```
//!
//! Matrices follow drawing-context conventions: [`AffineMatrix::compose`]
//! returns `self * other`, so `other` is applied to a point first. A
//! context that is scaled and then rotated maps local points through the
//! rotation before the scale.

use crate::{TransformError, TransformResult};

/// Determinant magnitude below which a matrix is treated as singular
const SINGULAR_EPS: f32 = 1e-12;

/// 2D affine transformation matrix (6 coefficients)
///
/// Represents the transformation:
/// ```text
/// x' = coeffs[0]*x + coeffs[1]*y + coeffs[2]
/// y' = coeffs[3]*x + coeffs[4]*y + coeffs[5]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AffineMatrix {
    /// Coefficients [a, b, tx, c, d, ty]
    coeffs: [f32; 6],
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    /// Create the identity transformation
    pub fn identity() -> Self {
        Self::from_coeffs([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Create from raw coefficients
    pub fn from_coeffs(coeffs: [f32; 6]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients
    pub fn coeffs(&self) -> &[f32; 6] {
        &self.coeffs
    }

    /// Create a translation matrix
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self::from_coeffs([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    /// Create a scaling matrix. A negative factor mirrors that axis.
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::from_coeffs([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Create a rotation about the origin by `degrees`.
    ///
    /// Positive angles turn clockwise in a y-down coordinate system.
    /// Multiples of 90 degrees produce exact coefficients.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = if degrees % 90.0 == 0.0 {
            match (degrees / 90.0).rem_euclid(4.0) as i32 {
                0 => (0.0, 1.0),
                1 => (1.0, 0.0),
                2 => (0.0, -1.0),
                _ => (-1.0, 0.0),
            }
        } else {
            degrees.to_radians().sin_cos()
        };
        Self::from_coeffs([cos, -sin, 0.0, sin, cos, 0.0])
    }

    /// Compute the inverse transformation
    pub fn inverse(&self) -> TransformResult<Self> {
        let [a, b, tx, c, d, ty] = self.coeffs;
        let det = a * d - b * c;
        if det.abs() < SINGULAR_EPS {
            return Err(TransformError::SingularMatrix);
        }
        let ia = d / det;
        let ib = -b / det;
        let ic = -c / det;
        let id = a / det;
        Ok(Self::from_coeffs([
            ia,
            ib,
            -(ia * tx + ib * ty),
            ic,
            id,
            -(ic * tx + id * ty),
        ]))
    }

    /// Compose two affine transformations (`self * other`).
    ///
    /// The result applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let [a1, b1, tx1, c1, d1, ty1] = self.coeffs;
        let [a2, b2, tx2, c2, d2, ty2] = other.coeffs;
        Self::from_coeffs([
            a1 * a2 + b1 * c2,
            a1 * b2 + b1 * d2,
            a1 * tx2 + b1 * ty2 + tx1,
            c1 * a2 + d1 * c2,
            c1 * b2 + d1 * d2,
            c1 * tx2 + d1 * ty2 + ty1,
        ])
    }

    /// Transform a point returning float coordinates
    #[inline]
    pub fn transform_point_float(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.coeffs;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    /// Axis-aligned bounds `(min_x, min_y, max_x, max_y)` of a transformed rectangle
    pub fn transform_bounds(&self, left: f32, top: f32, right: f32, bottom: f32) -> (f32, f32, f32, f32) {
        let corners = [
            self.transform_point_float(left, top),
            self.transform_point_float(right, top),
            self.transform_point_float(left, bottom),
            self.transform_point_float(right, bottom),
        ];
        corners.iter().fold(
            (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
            |(x0, y0, x1, y1), &(x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        )
    }
}
