use raster_affine_algebra::AlgebraError;

/// An error type for transform evaluation and parameter extraction.
#[derive(Debug, thiserror::Error)]
pub enum AffineError {
    /// Error raised by the matrix algebra: an invalid or a singular matrix.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    /// A composed transform was created without any sub-transforms.
    #[error("A composed transform must comprise at least one other transform")]
    EmptyComposition,

    /// The abstract transform type was requested instead of a concrete variant.
    #[error("Cannot instantiate the abstract transform type `{0}`")]
    AbstractInstantiation(String),

    /// A canvas dimension is zero.
    #[error("Invalid canvas size {width}x{height}: both dimensions must be at least 1")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// An expanded canvas extent cannot be represented as a pixel dimension.
    #[error("Expanded canvas extent ({0}) does not fit in a pixel dimension")]
    CanvasOverflow(f64),

    /// A declarative transform description could not be parsed.
    #[error("Failed to parse the transform description")]
    Config(#[from] serde_json::Error),
}
