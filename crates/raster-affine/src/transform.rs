use raster_affine_algebra::{
    compose, normalize_degrees, primitives, Coordinate, Matrix, ScaleFactor,
};

use crate::{
    describe::{self, Description},
    error::AffineError,
    params::{extract_resample_params, ResampleParams},
    size::CanvasSize,
};

mod private {
    pub trait Sealed {}
}

/// Capability shared by every transform: derive a matrix for a canvas and describe itself.
///
/// The trait is sealed; the concrete transforms are [`Shear`], [`Rotate`], [`Scale`],
/// [`Translate`], [`Composed`] and the [`Transform`] sum type over all of them.
pub trait AffineTransform: private::Sealed {
    /// Returns the forward matrix in Cartesian coordinates for a canvas of the given size.
    fn matrix(&self, size: CanvasSize) -> Matrix;

    /// Returns a structured description of the transform.
    fn describe(&self) -> Description;

    /// Computes the parameters for a pull-based affine resampler.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the source canvas.
    /// * `expand` - Enlarge the output canvas so that the transformed motif is not clipped.
    fn resample_params(
        &self,
        size: CanvasSize,
        expand: bool,
    ) -> Result<ResampleParams, AffineError> {
        extract_resample_params(self, size, expand)
    }
}

/// Conjugates `base` so that `center` becomes its fixed point.
fn about_center(center: Coordinate, base: Matrix) -> Matrix {
    compose([
        primitives::translate(center, true),
        base,
        primitives::translate(center, false),
    ])
}

macro_rules! angular_transform {
    ($(#[$meta:meta])* $name:ident, $builder:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            angle: f64,
            clockwise: bool,
            center: Option<Coordinate>,
        }

        impl $name {
            /// Creates the transform. The angle in degrees is normalised into `[0, 360)`.
            pub fn new(angle: f64) -> Self {
                Self {
                    angle: normalize_degrees(angle),
                    clockwise: false,
                    center: None,
                }
            }

            /// Sets whether the angle turns clockwise.
            pub fn with_clockwise(mut self, clockwise: bool) -> Self {
                self.clockwise = clockwise;
                self
            }

            /// Sets the fixed point in Cartesian coordinates (origin bottom-left, y up).
            ///
            /// Without an explicit center the canvas center is used.
            pub fn with_center(mut self, center: impl Into<Coordinate>) -> Self {
                self.center = Some(center.into());
                self
            }

            /// The normalised angle in degrees.
            pub fn angle(&self) -> f64 {
                self.angle
            }

            /// Whether the angle turns clockwise.
            pub fn clockwise(&self) -> bool {
                self.clockwise
            }

            /// The explicit center, if any.
            pub fn center(&self) -> Option<Coordinate> {
                self.center
            }
        }

        impl private::Sealed for $name {}

        impl AffineTransform for $name {
            fn matrix(&self, size: CanvasSize) -> Matrix {
                let center = self.center.unwrap_or_else(|| size.center());
                about_center(center, $builder(self.angle, self.clockwise))
            }

            fn describe(&self) -> Description {
                let mut description =
                    Description::new(stringify!($name)).arg(describe::angle(self.angle));
                if self.clockwise {
                    description = description.kwarg("clockwise", "true");
                }
                if let Some(center) = self.center {
                    description = description.kwarg("center", describe::coordinate(center));
                }
                description
            }
        }
    };
}

angular_transform!(
    /// Horizontal shear around a center point.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_affine::{AffineTransform, Shear};
    ///
    /// let shear = Shear::new(390.0).with_clockwise(true);
    /// assert_eq!(shear.angle(), 30.0);
    /// assert_eq!(shear.describe().to_string(), "Shear(30.0°, clockwise=true)");
    /// ```
    Shear,
    primitives::shear
);

angular_transform!(
    /// Rotation around a center point.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_affine::{AffineTransform, CanvasSize, Coordinate, Rotate};
    ///
    /// let rotate = Rotate::new(45.0).with_center((10.0, 20.0));
    /// let m = rotate.matrix(CanvasSize::new(280, 187).unwrap());
    ///
    /// let p = m.apply(Coordinate::new(10.0, 20.0));
    /// assert!((p.x - 10.0).abs() < 1e-9 && (p.y - 20.0).abs() < 1e-9);
    /// ```
    Rotate,
    primitives::rotate
);

/// Scaling around a center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    factor: ScaleFactor,
    center: Option<Coordinate>,
}

impl Scale {
    /// Creates a scaling from a uniform factor or a `(horizontal, vertical)` pair.
    pub fn new(factor: impl Into<ScaleFactor>) -> Self {
        Self {
            factor: factor.into(),
            center: None,
        }
    }

    /// Sets the fixed point in Cartesian coordinates (origin bottom-left, y up).
    pub fn with_center(mut self, center: impl Into<Coordinate>) -> Self {
        self.center = Some(center.into());
        self
    }

    /// The scaling factor.
    pub fn factor(&self) -> ScaleFactor {
        self.factor
    }

    /// The explicit center, if any.
    pub fn center(&self) -> Option<Coordinate> {
        self.center
    }
}

impl private::Sealed for Scale {}

impl AffineTransform for Scale {
    fn matrix(&self, size: CanvasSize) -> Matrix {
        let center = self.center.unwrap_or_else(|| size.center());
        about_center(center, primitives::scale(self.factor))
    }

    fn describe(&self) -> Description {
        let factor = match self.factor {
            ScaleFactor::Uniform(factor) => format!("{factor:.2}"),
            ScaleFactor::Anisotropic {
                horizontal,
                vertical,
            } => format!("({horizontal:.2}, {vertical:.2})"),
        };
        let description = Description::new("Scale").arg(factor);
        match self.center {
            Some(center) => description.kwarg("center", describe::coordinate(center)),
            None => description,
        }
    }
}

/// Translation by a fixed vector. Translations have no center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    translation: Coordinate,
    inverse: bool,
}

impl Translate {
    /// Creates a translation by `translation`, in Cartesian coordinates (y up).
    pub fn new(translation: impl Into<Coordinate>) -> Self {
        Self {
            translation: translation.into(),
            inverse: false,
        }
    }

    /// Sets whether to translate by the negated vector.
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// The translation vector.
    pub fn translation(&self) -> Coordinate {
        self.translation
    }

    /// Whether the vector is negated.
    pub fn inverse(&self) -> bool {
        self.inverse
    }
}

impl private::Sealed for Translate {}

impl AffineTransform for Translate {
    fn matrix(&self, _size: CanvasSize) -> Matrix {
        primitives::translate(self.translation, self.inverse)
    }

    fn describe(&self) -> Description {
        let description = Description::new("Translate").arg(format!(
            "({:.1}, {:.1})",
            self.translation.x, self.translation.y
        ));
        if self.inverse {
            description.kwarg("inverse", "true")
        } else {
            description
        }
    }
}

/// An ordered, non-empty composition of transforms.
///
/// The first transform is applied to a point first.
#[derive(Debug, Clone, PartialEq)]
pub struct Composed {
    transforms: Vec<Transform>,
}

impl Composed {
    /// Creates a composition.
    ///
    /// # Errors
    ///
    /// Returns [`AffineError::EmptyComposition`] if `transforms` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_affine::{Composed, Rotate, Translate};
    ///
    /// let composed = Composed::new(vec![
    ///     Rotate::new(30.0).into(),
    ///     Translate::new((100.0, 50.0)).into(),
    /// ]);
    /// assert!(composed.is_ok());
    /// assert!(Composed::new(vec![]).is_err());
    /// ```
    pub fn new(transforms: Vec<Transform>) -> Result<Self, AffineError> {
        if transforms.is_empty() {
            return Err(AffineError::EmptyComposition);
        }
        Ok(Self { transforms })
    }

    /// The sub-transforms in application order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }
}

impl private::Sealed for Composed {}

impl AffineTransform for Composed {
    fn matrix(&self, size: CanvasSize) -> Matrix {
        compose(self.transforms.iter().map(|t| t.matrix(size)))
    }

    fn describe(&self) -> Description {
        self.transforms
            .iter()
            .fold(Description::new("Composed"), |description, t| {
                description.child(t.describe())
            })
    }
}

/// Any of the concrete transforms.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Horizontal shear.
    Shear(Shear),
    /// Rotation.
    Rotate(Rotate),
    /// Scaling.
    Scale(Scale),
    /// Translation.
    Translate(Translate),
    /// Ordered composition.
    Composed(Composed),
}

impl private::Sealed for Transform {}

impl AffineTransform for Transform {
    fn matrix(&self, size: CanvasSize) -> Matrix {
        match self {
            Transform::Shear(t) => t.matrix(size),
            Transform::Rotate(t) => t.matrix(size),
            Transform::Scale(t) => t.matrix(size),
            Transform::Translate(t) => t.matrix(size),
            Transform::Composed(t) => t.matrix(size),
        }
    }

    fn describe(&self) -> Description {
        match self {
            Transform::Shear(t) => t.describe(),
            Transform::Rotate(t) => t.describe(),
            Transform::Scale(t) => t.describe(),
            Transform::Translate(t) => t.describe(),
            Transform::Composed(t) => t.describe(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Transform {
                fn from(t: $variant) -> Self {
                    Transform::$variant(t)
                }
            }
        )*
    };
}

impl_from_variant!(Shear, Rotate, Scale, Translate, Composed);

macro_rules! impl_display {
    ($($ty:ident),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    std::fmt::Display::fmt(&self.describe(), f)
                }
            }
        )*
    };
}

impl_display!(Shear, Rotate, Scale, Translate, Composed, Transform);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn size() -> CanvasSize {
        CanvasSize::new(280, 187).expect("valid size")
    }

    #[test]
    fn test_translate_zero_is_identity() -> Result<(), AffineError> {
        for size in [size(), CanvasSize::new(1, 1)?, CanvasSize::new(640, 480)?] {
            let m = Translate::new((0.0, 0.0)).matrix(size);
            assert!(m.abs_diff_eq(&Matrix::IDENTITY, 1e-6));
        }
        Ok(())
    }

    #[test]
    fn test_rotate_fixed_point() {
        let m = Rotate::new(45.0).with_center((10.0, 20.0)).matrix(size());
        let p = m.apply(Coordinate::new(10.0, 20.0));
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_default_center_depends_on_size() -> Result<(), AffineError> {
        let rotate = Rotate::new(30.0);
        let small = CanvasSize::new(100, 100)?;
        let large = CanvasSize::new(300, 200)?;

        for size in [small, large] {
            let p = rotate.matrix(size).apply(size.center());
            assert_relative_eq!(p.x, size.center().x, epsilon = 1e-6);
            assert_relative_eq!(p.y, size.center().y, epsilon = 1e-6);
        }
        assert!(!rotate.matrix(small).abs_diff_eq(&rotate.matrix(large), 1e-6));
        Ok(())
    }

    #[test]
    fn test_angle_normalization() {
        assert_eq!(Shear::new(390.0).matrix(size()), Shear::new(30.0).matrix(size()));
        assert_relative_eq!(Rotate::new(-90.0).angle(), 270.0);
        assert!(Rotate::new(-90.0)
            .matrix(size())
            .abs_diff_eq(&Rotate::new(270.0).matrix(size()), 1e-9));

        let tiny = Rotate::new(-1e-15);
        assert_eq!(tiny.angle(), 0.0);
        assert_eq!(tiny.to_string(), Rotate::new(0.0).to_string());
        assert_eq!(Shear::new(-0.0).to_string(), "Shear( 0.0°)");
    }

    #[test]
    fn test_scale_off_center() {
        let m = Scale::new(0.5).with_center((0.0, 0.0)).matrix(size());
        assert!(m.abs_diff_eq(&Matrix::new(0.5, 0.0, 0.0, 0.0, 0.5, 0.0), 1e-12));

        let m = Scale::new((0.3, 1.0)).matrix(size());
        let p = m.apply(Coordinate::new(0.0, 0.0));
        assert_relative_eq!(p.x, 140.0 * 0.7, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_translate_inverse() {
        let m = Translate::new((50.0, 20.0)).with_inverse(true).matrix(size());
        assert_eq!(m.coefficients(), [1.0, 0.0, -50.0, 0.0, 1.0, -20.0]);
    }

    #[test]
    fn test_empty_composition() {
        assert!(matches!(
            Composed::new(Vec::new()),
            Err(AffineError::EmptyComposition)
        ));
    }

    #[test]
    fn test_composed_order() -> Result<(), AffineError> {
        let rotate = Rotate::new(30.0);
        let translate = Translate::new((100.0, 50.0));

        let rotate_first = Composed::new(vec![rotate.into(), translate.into()])?;
        let translate_first = Composed::new(vec![translate.into(), rotate.into()])?;

        let expected = compose([rotate.matrix(size()), translate.matrix(size())]);
        assert!(rotate_first.matrix(size()).abs_diff_eq(&expected, 1e-9));

        // rotating first keeps the canvas center fixed before it is moved
        let p = rotate_first.matrix(size()).apply(size().center());
        assert_relative_eq!(p.x, 240.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 143.5, epsilon = 1e-9);

        assert!(!rotate_first
            .matrix(size())
            .abs_diff_eq(&translate_first.matrix(size()), 1e-6));
        Ok(())
    }

    #[test]
    fn test_descriptions() -> Result<(), AffineError> {
        assert_eq!(Shear::new(30.0).to_string(), "Shear(30.0°)");
        assert_eq!(
            Rotate::new(30.0)
                .with_clockwise(true)
                .with_center((0.0, 0.0))
                .to_string(),
            "Rotate(30.0°, clockwise=true, center=(0.0, 0.0))"
        );
        assert_eq!(Scale::new(2.0).to_string(), "Scale(2.00)");
        assert_eq!(Scale::new((0.3, 0.7)).to_string(), "Scale((0.30, 0.70))");
        assert_eq!(
            Translate::new((50.0, 20.04)).with_inverse(true).to_string(),
            "Translate((50.0, 20.0), inverse=true)"
        );

        let single = Composed::new(vec![Scale::new(0.7).into()])?;
        assert_eq!(single.to_string(), "Composed(Scale(0.70))");

        let composed = Composed::new(vec![
            Shear::new(45.0).into(),
            Rotate::new(30.0).into(),
            Scale::new(0.7).into(),
        ])?;
        assert_eq!(
            Transform::from(composed).to_string(),
            "Composed(\n  Shear(45.0°)\n  Rotate(30.0°)\n  Scale(0.70)\n)"
        );
        Ok(())
    }
}
