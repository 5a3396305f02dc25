//! Canonical shear, rotation, scaling and translation matrices.
//!
//! All builders use the Cartesian convention: origin at the bottom-left, y pointing up and
//! positive angles turning counter-clockwise.

use crate::matrix::{deg_to_rad, Coordinate, Matrix};

/// Scaling factor, either uniform or per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleFactor {
    /// The same factor along both axes.
    Uniform(f64),
    /// Independent factors along the horizontal and vertical axes.
    Anisotropic {
        /// Horizontal factor.
        horizontal: f64,
        /// Vertical factor.
        vertical: f64,
    },
}

impl ScaleFactor {
    /// Returns the `(horizontal, vertical)` factors.
    pub fn components(&self) -> (f64, f64) {
        match *self {
            ScaleFactor::Uniform(factor) => (factor, factor),
            ScaleFactor::Anisotropic {
                horizontal,
                vertical,
            } => (horizontal, vertical),
        }
    }
}

impl From<f64> for ScaleFactor {
    fn from(factor: f64) -> Self {
        ScaleFactor::Uniform(factor)
    }
}

impl From<(f64, f64)> for ScaleFactor {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        ScaleFactor::Anisotropic {
            horizontal,
            vertical,
        }
    }
}

fn signed_radians(angle: f64, clockwise: bool) -> f64 {
    let angle = deg_to_rad(angle);
    if clockwise {
        -angle
    } else {
        angle
    }
}

/// Returns a shearing matrix along the horizontal axis.
///
/// ```text
/// | 1  -sin(angle)  0 |
/// | 0   cos(angle)  0 |
/// ```
///
/// # Arguments
///
/// * `angle` - The shear angle in degrees.
/// * `clockwise` - Shear clockwise instead of counter-clockwise.
pub fn shear(angle: f64, clockwise: bool) -> Matrix {
    let angle = signed_radians(angle, clockwise);
    Matrix::new(1.0, -angle.sin(), 0.0, 0.0, angle.cos(), 0.0)
}

/// Returns a rotation matrix around the origin.
///
/// # Arguments
///
/// * `angle` - The rotation angle in degrees.
/// * `clockwise` - Rotate clockwise instead of counter-clockwise.
///
/// # Example
///
/// ```
/// use raster_affine_algebra::{primitives::rotate, Coordinate};
///
/// let m = rotate(90.0, false);
/// let p = m.apply(Coordinate::new(1.0, 0.0));
/// assert!((p.x - 0.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
/// ```
pub fn rotate(angle: f64, clockwise: bool) -> Matrix {
    let angle = signed_radians(angle, clockwise);
    let (sin, cos) = angle.sin_cos();
    Matrix::new(cos, -sin, 0.0, sin, cos, 0.0)
}

/// Returns a scaling matrix with zero translation.
pub fn scale(factor: impl Into<ScaleFactor>) -> Matrix {
    let (horizontal, vertical) = factor.into().components();
    Matrix::new(horizontal, 0.0, 0.0, 0.0, vertical, 0.0)
}

/// Returns a pure translation matrix.
///
/// # Arguments
///
/// * `translation` - The translation vector.
/// * `inverse` - Translate by the negated vector.
pub fn translate(translation: Coordinate, inverse: bool) -> Matrix {
    let translation = if inverse { -translation } else { translation };
    Matrix::new(1.0, 0.0, translation.x, 0.0, 1.0, translation.y)
}
