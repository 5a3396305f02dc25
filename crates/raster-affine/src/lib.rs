#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Raster Affine
//!
//! Computes the coefficients a pull-based affine resampler needs to shear, rotate, scale or
//! translate a raster image. Transforms are expressed in Cartesian terms (origin bottom-left,
//! y up, positive angles counter-clockwise) and converted to pixel coordinates internally.
//!
//! ## Example
//!
//! ```rust
//! use raster_affine::{AffineTransform, CanvasSize, Composed, Rotate, Translate};
//!
//! let size = CanvasSize::new(280, 187)?;
//! let transform = Composed::new(vec![
//!     Rotate::new(30.0).into(),
//!     Translate::new((100.0, 50.0)).into(),
//! ])?;
//!
//! let params = transform.resample_params(size, false)?;
//! assert_eq!(params.size, size);
//! assert_eq!(params.kind.as_str(), "AFFINE");
//! # Ok::<(), raster_affine::AffineError>(())
//! ```

pub use raster_affine_algebra as algebra;

/// Declarative JSON descriptions of transforms.
pub mod config;

/// Conversion between Cartesian and pixel coordinates.
pub mod coordinate;

/// Structured transform descriptions and their printer.
pub mod describe;

/// Error types for the transforms.
pub mod error;

/// Canvas expansion to avoid clipping.
pub mod expand;

/// Extraction of the resampling parameters.
pub mod params;

/// Canvas size type.
pub mod size;

/// Shear, rotate, scale, translate and composed transforms.
pub mod transform;

pub use config::{transform_from_json, TransformConfig};
pub use error::AffineError;
pub use params::{extract_resample_params, ResampleKind, ResampleParams};
pub use raster_affine_algebra::{Coordinate, Matrix, ScaleFactor};
pub use size::CanvasSize;
pub use transform::{AffineTransform, Composed, Rotate, Scale, Shear, Transform, Translate};
