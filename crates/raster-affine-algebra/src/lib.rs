#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Raster Affine Algebra
//!
//! Compact 2D affine matrices `(a, b, c, d, e, f)` with an implicit `(0, 0, 1)` bottom row.
//!
//! ## Example
//!
//! ```rust
//! use raster_affine_algebra::{compose, primitives, Coordinate};
//!
//! // rotate by 90 degrees, then move 10 pixels to the right
//! let m = compose([
//!     primitives::rotate(90.0, false),
//!     primitives::translate(Coordinate::new(10.0, 0.0), false),
//! ]);
//!
//! let p = m.apply(Coordinate::new(1.0, 0.0));
//! assert!((p.x - 10.0).abs() < 1e-9 && (p.y - 1.0).abs() < 1e-9);
//! ```

/// Error types for the matrix algebra.
pub mod error;

/// Compact affine matrix type and its composition, inversion and evaluation.
pub mod matrix;

/// Builders for the canonical shear, rotation, scaling and translation matrices.
pub mod primitives;

/// Matrix validation.
pub mod validation;

pub use error::AlgebraError;
pub use matrix::{
    apply, compose, deg_to_rad, invert, normalize_degrees, Coordinate, Matrix, DETERMINANT_EPS,
};
pub use primitives::ScaleFactor;
pub use validation::{verify_matrix, verify_matrix_value};
