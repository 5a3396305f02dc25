use raster_affine_algebra::Coordinate;

use crate::error::AffineError;

/// The size of a raster canvas in pixels.
///
/// Both dimensions are at least 1.
///
/// # Example
///
/// ```
/// use raster_affine::CanvasSize;
///
/// let size = CanvasSize::new(280, 187).unwrap();
///
/// assert_eq!(size.width(), 280);
/// assert_eq!(size.height(), 187);
/// assert!(CanvasSize::new(0, 187).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    /// Creates a canvas size.
    ///
    /// # Errors
    ///
    /// Returns [`AffineError::InvalidSize`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, AffineError> {
        if width == 0 || height == 0 {
            return Err(AffineError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width of the canvas in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the canvas in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The geometric center `(width / 2, height / 2)`.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// The four canvas corners `(0, 0)`, `(w, 0)`, `(0, h)` and `(w, h)`.
    pub fn corners(&self) -> [Coordinate; 4] {
        let (w, h) = (self.width as f64, self.height as f64);
        [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(w, 0.0),
            Coordinate::new(0.0, h),
            Coordinate::new(w, h),
        ]
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<(u32, u32)> for CanvasSize {
    type Error = AffineError;

    fn try_from((width, height): (u32, u32)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl TryFrom<[u32; 2]> for CanvasSize {
    type Error = AffineError;

    fn try_from([width, height]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

impl From<CanvasSize> for [u32; 2] {
    fn from(size: CanvasSize) -> Self {
        [size.width, size.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert!(matches!(
            CanvasSize::new(0, 10),
            Err(AffineError::InvalidSize {
                width: 0,
                height: 10
            })
        ));
        assert!(CanvasSize::try_from((10, 0)).is_err());
    }

    #[test]
    fn test_center_and_corners() -> Result<(), AffineError> {
        let size = CanvasSize::try_from([280, 187])?;
        assert_eq!(size.center(), Coordinate::new(140.0, 93.5));
        assert_eq!(size.corners()[3], Coordinate::new(280.0, 187.0));
        assert_eq!(size.to_string(), "280x187");
        assert_eq!(<[u32; 2]>::from(size), [280, 187]);
        Ok(())
    }
}
