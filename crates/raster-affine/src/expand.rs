use raster_affine_algebra::{compose, primitives, Matrix};

use crate::{coordinate::to_pixel_space, error::AffineError, size::CanvasSize};

/// Enlarges the canvas so that the transformed motif is not clipped.
///
/// The four canvas corners are mapped through `matrix` and the enclosing box is rounded outwards
/// (floor of the minimum, ceil of the maximum). The returned matrix additionally moves the
/// original canvas center onto the center of the expanded canvas.
///
/// # Arguments
///
/// * `size` - The original canvas size.
/// * `matrix` - The forward matrix in Cartesian coordinates.
///
/// # Returns
///
/// The expanded canvas size and the re-centered forward matrix.
///
/// # Errors
///
/// Returns [`AffineError::CanvasOverflow`] if an extent is not finite or exceeds `u32::MAX`.
pub fn expand_canvas(
    size: CanvasSize,
    matrix: &Matrix,
) -> Result<(CanvasSize, Matrix), AffineError> {
    let motif = size.corners().map(|corner| matrix.apply(corner));

    let (min_x, max_x) = motif
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
    let (min_y, max_y) = motif
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });

    let width = pixel_extent(max_x.ceil() - min_x.floor())?;
    let height = pixel_extent(max_y.ceil() - min_y.floor())?;
    let expanded = CanvasSize::new(width, height)?;

    // the shift is flipped against the original canvas like the final matrix will be
    let shift = compose([
        primitives::translate(size.center(), true),
        primitives::translate(expanded.center(), false),
    ]);
    let shift = to_pixel_space(size, &shift);

    log::debug!("expanded canvas from {size} to {expanded}");

    Ok((expanded, compose([*matrix, shift])))
}

fn pixel_extent(extent: f64) -> Result<u32, AffineError> {
    if !extent.is_finite() || extent > u32::MAX as f64 {
        return Err(AffineError::CanvasOverflow(extent));
    }
    Ok((extent as u32).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{AffineTransform, Rotate, Scale, Shear, Translate};

    #[test]
    fn test_identity_keeps_size() -> Result<(), AffineError> {
        let size = CanvasSize::new(280, 187)?;
        let (expanded, matrix) = expand_canvas(size, &Matrix::IDENTITY)?;
        assert_eq!(expanded, size);
        assert!(matrix.abs_diff_eq(&Matrix::IDENTITY, 1e-12));
        Ok(())
    }

    #[test]
    fn test_rotate_90_swaps_dimensions() -> Result<(), AffineError> {
        let size = CanvasSize::new(280, 200)?;
        let (expanded, _) = expand_canvas(size, &Rotate::new(90.0).matrix(size))?;
        // cos(90°) is not exactly zero, outward rounding may add a pixel per axis
        assert!((200..=201).contains(&expanded.width()), "{expanded}");
        assert!((280..=281).contains(&expanded.height()), "{expanded}");
        Ok(())
    }

    #[test]
    fn test_rotate_30_bounding_box() -> Result<(), AffineError> {
        let size = CanvasSize::new(280, 200)?;
        let (expanded, _) = expand_canvas(size, &Rotate::new(30.0).matrix(size))?;

        let (sin, cos) = 30f64.to_radians().sin_cos();
        let exact_width = 280.0 * cos + 200.0 * sin;
        let exact_height = 280.0 * sin + 200.0 * cos;

        // rounding outwards adds at most one pixel on each side
        let extents = [
            (expanded.width(), exact_width),
            (expanded.height(), exact_height),
        ];
        for (actual, exact) in extents {
            let actual = actual as f64;
            assert!(actual >= exact && actual <= exact + 2.0);
        }
        Ok(())
    }

    #[test]
    fn test_shear_expands_width_only() -> Result<(), AffineError> {
        let size = CanvasSize::new(280, 187)?;
        let (expanded, _) = expand_canvas(size, &Shear::new(30.0).matrix(size))?;
        assert!(expanded.width() > size.width());
        assert!(expanded.height() <= size.height());
        Ok(())
    }

    #[test]
    fn test_collapsed_extent_is_at_least_one_pixel() -> Result<(), AffineError> {
        let size = CanvasSize::new(10, 10)?;
        let (expanded, _) = expand_canvas(size, &Scale::new((0.0, 1.0)).matrix(size))?;
        assert_eq!((expanded.width(), expanded.height()), (1, 10));
        Ok(())
    }

    #[test]
    fn test_translation_does_not_grow_canvas() -> Result<(), AffineError> {
        let size = CanvasSize::new(100, 50)?;
        let (expanded, _) = expand_canvas(size, &Translate::new((10.5, -3.0)).matrix(size))?;
        assert_eq!((expanded.width(), expanded.height()), (101, 50));
        Ok(())
    }

    #[test]
    fn test_overflow() -> Result<(), AffineError> {
        let size = CanvasSize::new(100, 100)?;
        let huge = Scale::new(1e12).matrix(size);
        assert!(matches!(
            expand_canvas(size, &huge),
            Err(AffineError::CanvasOverflow(_))
        ));
        Ok(())
    }
}
