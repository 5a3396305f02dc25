//! Conversion between the Cartesian frame the transforms are expressed in (origin bottom-left,
//! y up) and the pixel frame of a raster (origin top-left, y down).

use raster_affine_algebra::{compose, Matrix};

use crate::size::CanvasSize;

/// Reflection of the y axis about the horizontal midline of the canvas.
///
/// The matrix is `(1, 0, 0, 0, -1, height)` and is its own inverse.
pub fn flip_matrix(size: CanvasSize) -> Matrix {
    Matrix::new(1.0, 0.0, 0.0, 0.0, -1.0, size.height() as f64)
}

/// Re-expresses a Cartesian matrix so that it acts directly on pixel coordinates.
///
/// A pixel is flipped into the Cartesian frame, transformed, and flipped back.
///
/// # Example
///
/// ```
/// use raster_affine::{coordinate::to_pixel_space, CanvasSize, Coordinate, Matrix};
///
/// // moving up in Cartesian terms moves towards the top row in pixel terms
/// let up = Matrix::new(1.0, 0.0, 0.0, 0.0, 1.0, 10.0);
/// let m = to_pixel_space(CanvasSize::new(100, 100).unwrap(), &up);
///
/// assert_eq!(m.apply(Coordinate::new(5.0, 50.0)), Coordinate::new(5.0, 40.0));
/// ```
pub fn to_pixel_space(size: CanvasSize, matrix: &Matrix) -> Matrix {
    let flip = flip_matrix(size);
    compose([flip, *matrix, flip])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AffineError;
    use approx::assert_relative_eq;
    use raster_affine_algebra::{primitives, Coordinate};

    #[test]
    fn test_flip_is_involutory() -> Result<(), AffineError> {
        let flip = flip_matrix(CanvasSize::new(280, 187)?);
        assert!(flip.inverse()?.abs_diff_eq(&flip, 1e-12));
        assert!(compose([flip, flip]).abs_diff_eq(&Matrix::IDENTITY, 1e-12));
        Ok(())
    }

    #[test]
    fn test_counter_clockwise_in_pixel_space() -> Result<(), AffineError> {
        let size = CanvasSize::new(200, 100)?;
        let center = size.center();
        let rotate = compose([
            primitives::translate(center, true),
            primitives::rotate(90.0, false),
            primitives::translate(center, false),
        ]);

        // a pixel right of the center ends up above it, i.e. on a smaller row
        let m = to_pixel_space(size, &rotate);
        let p = m.apply(center + Coordinate::new(1.0, 0.0));
        assert_relative_eq!(p.x, center.x, epsilon = 1e-9);
        assert_relative_eq!(p.y, center.y - 1.0, epsilon = 1e-9);
        Ok(())
    }
}
