//! Declarative transform descriptions.
//!
//! Transforms can be described in JSON, tagged by their `type`:
//!
//! ```json
//! {
//!   "type": "Composed",
//!   "transforms": [
//!     { "type": "Scale", "factor": [0.3, 0.7] },
//!     { "type": "Rotate", "angle": 70.0, "clockwise": true },
//!     { "type": "Translate", "translation": [50.0, 20.0] }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::{
    error::AffineError,
    transform::{Composed, Rotate, Scale, Shear, Transform, Translate},
};

/// A scaling factor as written in a description: a number or a `[horizontal, vertical]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScaleFactorConfig {
    /// Uniform factor.
    Uniform(f64),
    /// Per axis factors.
    Anisotropic([f64; 2]),
}

/// Serialisable description of a transform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum TransformConfig {
    /// See [`Shear`].
    Shear {
        /// Angle in degrees.
        angle: f64,
        /// Turn clockwise.
        #[serde(default)]
        clockwise: bool,
        /// Fixed point, defaults to the canvas center.
        #[serde(default)]
        center: Option<[f64; 2]>,
    },
    /// See [`Rotate`].
    Rotate {
        /// Angle in degrees.
        angle: f64,
        /// Turn clockwise.
        #[serde(default)]
        clockwise: bool,
        /// Fixed point, defaults to the canvas center.
        #[serde(default)]
        center: Option<[f64; 2]>,
    },
    /// See [`Scale`].
    Scale {
        /// Scaling factor.
        factor: ScaleFactorConfig,
        /// Fixed point, defaults to the canvas center.
        #[serde(default)]
        center: Option<[f64; 2]>,
    },
    /// See [`Translate`].
    Translate {
        /// Translation vector.
        translation: [f64; 2],
        /// Negate the vector.
        #[serde(default)]
        inverse: bool,
    },
    /// See [`Composed`].
    Composed {
        /// Sub-transforms in application order.
        transforms: Vec<TransformConfig>,
    },
    /// The abstract base of all transforms. Cannot be instantiated.
    AffineTransform,
    /// The abstract base of the elementary transforms. Cannot be instantiated.
    ElementaryTransform,
}

impl TryFrom<TransformConfig> for Transform {
    type Error = AffineError;

    fn try_from(config: TransformConfig) -> Result<Self, Self::Error> {
        let transform = match config {
            TransformConfig::Shear {
                angle,
                clockwise,
                center,
            } => {
                let shear = Shear::new(angle).with_clockwise(clockwise);
                let shear = match center {
                    Some(center) => shear.with_center(center),
                    None => shear,
                };
                shear.into()
            }
            TransformConfig::Rotate {
                angle,
                clockwise,
                center,
            } => {
                let rotate = Rotate::new(angle).with_clockwise(clockwise);
                let rotate = match center {
                    Some(center) => rotate.with_center(center),
                    None => rotate,
                };
                rotate.into()
            }
            TransformConfig::Scale { factor, center } => {
                let scale = match factor {
                    ScaleFactorConfig::Uniform(factor) => Scale::new(factor),
                    ScaleFactorConfig::Anisotropic([horizontal, vertical]) => {
                        Scale::new((horizontal, vertical))
                    }
                };
                let scale = match center {
                    Some(center) => scale.with_center(center),
                    None => scale,
                };
                scale.into()
            }
            TransformConfig::Translate {
                translation,
                inverse,
            } => Translate::new(translation).with_inverse(inverse).into(),
            TransformConfig::Composed { transforms } => {
                let transforms = transforms
                    .into_iter()
                    .map(Transform::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Composed::new(transforms)?.into()
            }
            TransformConfig::AffineTransform => {
                return Err(AffineError::AbstractInstantiation(
                    "AffineTransform".to_string(),
                ))
            }
            TransformConfig::ElementaryTransform => {
                return Err(AffineError::AbstractInstantiation(
                    "ElementaryTransform".to_string(),
                ))
            }
        };
        Ok(transform)
    }
}

/// Parses a JSON transform description.
///
/// # Errors
///
/// Returns [`AffineError::Config`] on malformed JSON, [`AffineError::AbstractInstantiation`]
/// for the abstract transform types and [`AffineError::EmptyComposition`] for a composition
/// without sub-transforms.
///
/// # Example
///
/// ```
/// use raster_affine::transform_from_json;
///
/// let transform = transform_from_json(r#"{"type": "Rotate", "angle": 30.0}"#).unwrap();
/// assert_eq!(transform.to_string(), "Rotate(30.0°)");
/// ```
pub fn transform_from_json(json: &str) -> Result<Transform, AffineError> {
    let config: TransformConfig = serde_json::from_str(json)?;
    Transform::try_from(config)
}
