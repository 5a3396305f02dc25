/// An error type for the affine matrix algebra.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AlgebraError {
    /// The matrix violates the shape, element type or homogeneous bottom row contract.
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// The matrix cannot be inverted because its determinant is (numerically) zero.
    #[error("Matrix is singular (determinant = {0:e})")]
    SingularMatrix(f64),
}
