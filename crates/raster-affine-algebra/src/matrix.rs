use glam::{DAffine2, DVec2};

use crate::error::AlgebraError;

/// A point in the plane.
pub type Coordinate = DVec2;

/// Relative tolerance of the singularity test.
///
/// A matrix is singular when `|det| <= DETERMINANT_EPS * s * s`, where `s` is the largest
/// magnitude among the linear coefficients `a, b, d, e`. The test is scale invariant, so a
/// uniform scale by `1e-7` stays invertible while a 90 degree shear does not.
pub const DETERMINANT_EPS: f64 = 1e-12;

/// A 2D affine matrix stored as the six coefficients `(a, b, c, d, e, f)`.
///
/// The coefficients encode the map
///
/// ```text
/// x' = a * x + b * y + c
/// y' = d * x + e * y + f
/// ```
///
/// The bottom row of the homogeneous 3x3 form is always `(0, 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(DAffine2);

impl Matrix {
    /// The identity matrix `(1, 0, 0, 0, 1, 0)`.
    pub const IDENTITY: Self = Self(DAffine2::IDENTITY);

    /// Create a matrix from its six coefficients.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_affine_algebra::Matrix;
    ///
    /// let m = Matrix::new(1.0, 0.0, 5.0, 0.0, 1.0, -2.0);
    /// assert_eq!(m.coefficients(), [1.0, 0.0, 5.0, 0.0, 1.0, -2.0]);
    /// ```
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        // glam stores the affine map column-major: x_axis, y_axis, translation
        Self(DAffine2::from_cols_array(&[a, d, b, e, c, f]))
    }

    /// Create a matrix from a `[a, b, c, d, e, f]` array.
    pub fn from_coefficients(coefficients: [f64; 6]) -> Self {
        let [a, b, c, d, e, f] = coefficients;
        Self::new(a, b, c, d, e, f)
    }

    /// Returns the coefficients as `[a, b, c, d, e, f]`.
    pub fn coefficients(&self) -> [f64; 6] {
        let [a, d, b, e, c, f] = self.0.to_cols_array();
        [a, b, c, d, e, f]
    }

    /// Returns the row-major homogeneous 3x3 form of the matrix.
    pub fn to_homogeneous(&self) -> [[f64; 3]; 3] {
        let [a, b, c, d, e, f] = self.coefficients();
        [[a, b, c], [d, e, f], [0.0, 0.0, 1.0]]
    }

    /// Determinant of the linear part, `a * e - b * d`.
    pub fn determinant(&self) -> f64 {
        self.0.matrix2.determinant()
    }

    /// Returns true if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Evaluates the affine map on a single point.
    pub fn apply(&self, point: Coordinate) -> Coordinate {
        self.0.transform_point2(point)
    }

    /// Returns the matrix that applies `self` first and `next` afterwards.
    pub fn then(&self, next: &Matrix) -> Matrix {
        Matrix(next.0 * self.0)
    }

    /// Inverts the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::SingularMatrix`] if the determinant vanishes relative to the
    /// linear coefficients, see [`DETERMINANT_EPS`].
    pub fn inverse(&self) -> Result<Matrix, AlgebraError> {
        let [a, b, c, d, e, f] = self.coefficients();

        let determinant = a * e - b * d;
        let magnitude = a.abs().max(b.abs()).max(d.abs()).max(e.abs());
        if !determinant.is_finite()
            || magnitude == 0.0
            || determinant.abs() <= DETERMINANT_EPS * magnitude * magnitude
        {
            return Err(AlgebraError::SingularMatrix(determinant));
        }
        let inv_determinant = 1.0 / determinant;

        let new_a = e * inv_determinant;
        let new_b = -b * inv_determinant;
        let new_d = -d * inv_determinant;
        let new_e = a * inv_determinant;
        let new_c = -(new_a * c + new_b * f);
        let new_f = -(new_d * c + new_e * f);

        Ok(Matrix::new(new_a, new_b, new_c, new_d, new_e, new_f))
    }

    /// Compares two matrices coefficient-wise with an absolute tolerance.
    pub fn abs_diff_eq(&self, other: &Matrix, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for Matrix {
    fn from(coefficients: [f64; 6]) -> Self {
        Self::from_coefficients(coefficients)
    }
}

impl From<Matrix> for [f64; 6] {
    fn from(matrix: Matrix) -> Self {
        matrix.coefficients()
    }
}

/// Composes matrices in application order.
///
/// The first matrix is applied to a point first, the last one last:
/// `apply(compose([m1, m2, m3]), p) == apply(m3, apply(m2, apply(m1, p)))`.
/// An empty sequence yields the identity.
///
/// # Example
///
/// ```
/// use raster_affine_algebra::{compose, Coordinate, Matrix};
///
/// let scale = Matrix::new(2.0, 0.0, 0.0, 0.0, 2.0, 0.0);
/// let shift = Matrix::new(1.0, 0.0, 1.0, 0.0, 1.0, 0.0);
///
/// let m = compose([scale, shift]);
/// assert_eq!(m.apply(Coordinate::new(1.0, 1.0)), Coordinate::new(3.0, 2.0));
/// ```
pub fn compose<I>(matrices: I) -> Matrix
where
    I: IntoIterator<Item = Matrix>,
{
    matrices
        .into_iter()
        .fold(Matrix::IDENTITY, |acc, m| acc.then(&m))
}

/// Inverts a matrix, see [`Matrix::inverse`].
pub fn invert(matrix: &Matrix) -> Result<Matrix, AlgebraError> {
    matrix.inverse()
}

/// Evaluates a matrix on a single point, see [`Matrix::apply`].
pub fn apply(matrix: &Matrix, point: Coordinate) -> Coordinate {
    matrix.apply(point)
}

/// Normalises an angle in degrees into `[0, 360)`.
///
/// ```
/// use raster_affine_algebra::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(-1e-15), 0.0);
/// ```
pub fn normalize_degrees(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360 and keeps the sign of -0
    if angle >= 360.0 || angle == 0.0 {
        0.0
    } else {
        angle
    }
}

/// Converts an angle in degrees to radians after normalising it into `[0, 360)`.
pub fn deg_to_rad(angle: f64) -> f64 {
    normalize_degrees(angle).to_radians()
}
