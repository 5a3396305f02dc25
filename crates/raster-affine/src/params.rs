use raster_affine_algebra::{validation, Coordinate, Matrix};

use crate::{
    coordinate::to_pixel_space, error::AffineError, expand::expand_canvas, size::CanvasSize,
    transform::AffineTransform,
};

/// The kind of resampling the coefficients are meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResampleKind {
    /// Six coefficient affine resampling.
    Affine,
}

impl ResampleKind {
    /// The conventional name of the resampling kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResampleKind::Affine => "AFFINE",
        }
    }
}

impl std::fmt::Display for ResampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters handed to a pull-based affine resampler.
///
/// For each destination pixel `(x, y)` the resampler reads the source at
/// `(a * x + b * y + c, d * x + e * y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleParams {
    /// Size of the output canvas.
    pub size: CanvasSize,
    /// Resampling kind, always [`ResampleKind::Affine`].
    pub kind: ResampleKind,
    /// Inverse coefficients `[a, b, c, d, e, f]` in pixel coordinates.
    pub coefficients: [f64; 6],
}

impl ResampleParams {
    /// The source location sampled for a destination pixel.
    pub fn sample_location(&self, dst: Coordinate) -> Coordinate {
        Matrix::from(self.coefficients).apply(dst)
    }

    /// The forward map from source pixels to destination pixels.
    pub fn forward_matrix(&self) -> Result<Matrix, AffineError> {
        Ok(Matrix::from(self.coefficients).inverse()?)
    }
}

/// Computes the resampling parameters of a transform.
///
/// The forward matrix is validated, optionally expanded, converted to pixel coordinates of the
/// source canvas and finally inverted.
///
/// # Arguments
///
/// * `transform` - The transform to apply.
/// * `size` - The size of the source canvas.
/// * `expand` - Enlarge the output canvas so that the transformed motif is not clipped.
///
/// # Errors
///
/// Returns [`AffineError::Algebra`] if the matrix is invalid or singular, or
/// [`AffineError::CanvasOverflow`] if the expanded canvas is too large.
///
/// # Example
///
/// ```
/// use raster_affine::{extract_resample_params, CanvasSize, ResampleKind, Rotate};
///
/// let size = CanvasSize::new(280, 187).unwrap();
/// let params = extract_resample_params(&Rotate::new(30.0), size, true).unwrap();
///
/// assert_eq!(params.kind, ResampleKind::Affine);
/// assert!(params.size.width() > size.width());
/// ```
pub fn extract_resample_params<T>(
    transform: &T,
    size: CanvasSize,
    expand: bool,
) -> Result<ResampleParams, AffineError>
where
    T: AffineTransform + ?Sized,
{
    let matrix = transform.matrix(size);
    validation::verify_matrix(&matrix, validation::DEFAULT_EPS)?;

    let (output_size, matrix) = if expand {
        expand_canvas(size, &matrix)?
    } else {
        (size, matrix)
    };

    // the output canvas only changes the raster bounds, the flip uses the source height
    let inverse = invert_pixel_matrix(size, &matrix).inspect_err(|err| {
        log::warn!("cannot resample {}: {err}", transform.describe());
    })?;

    let params = ResampleParams {
        size: output_size,
        kind: ResampleKind::Affine,
        coefficients: inverse.coefficients(),
    };

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "{} on {size} -> {} {} {:?}",
            transform.describe(),
            params.size,
            params.kind,
            params.coefficients
        );
    }

    Ok(params)
}

/// Converts a Cartesian matrix into pixel space and inverts it once it is verified again.
fn invert_pixel_matrix(size: CanvasSize, matrix: &Matrix) -> Result<Matrix, AffineError> {
    let pixel_matrix = to_pixel_space(size, matrix);
    validation::verify_matrix(&pixel_matrix, validation::DEFAULT_EPS)?;
    Ok(pixel_matrix.inverse()?)
}
