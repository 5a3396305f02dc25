//! Human readable descriptions of transforms.
//!
//! Every transform produces a [`Description`] record: a name, an ordered list of parameters
//! and, for compositions, the descriptions of its children. A single printer renders them:
//!
//! ```text
//! Rotate(30.0°, clockwise=true)
//! Composed(
//!   Shear(45.0°)
//!   Scale(0.70)
//! )
//! ```

use raster_affine_algebra::Coordinate;

/// A single positional or keyword parameter of a [`Description`].
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Keyword, `None` for positional parameters.
    pub key: Option<&'static str>,
    /// Rendered value.
    pub value: String,
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.key {
            Some(key) => write!(f, "{key}={}", self.value),
            None => f.write_str(&self.value),
        }
    }
}

/// Structured description of a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    /// Name of the transform type.
    pub name: &'static str,
    /// Ordered parameters.
    pub params: Vec<Param>,
    /// Descriptions of nested transforms.
    pub children: Vec<Description>,
}

impl Description {
    /// Creates a description without parameters.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends a positional parameter.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.params.push(Param {
            key: None,
            value: value.into(),
        });
        self
    }

    /// Appends a keyword parameter.
    pub fn kwarg(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push(Param {
            key: Some(key),
            value: value.into(),
        });
        self
    }

    /// Appends a nested description.
    pub fn child(mut self, child: Description) -> Self {
        self.children.push(child);
        self
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.children.is_empty() {
            let params = self
                .params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            return write!(f, "{}({})", self.name, params.join(", "));
        }

        let items = self
            .params
            .iter()
            .map(ToString::to_string)
            .chain(self.children.iter().map(ToString::to_string))
            .collect::<Vec<_>>();

        if let [item] = items.as_slice() {
            return write!(f, "{}({item})", self.name);
        }

        writeln!(f, "{}(", self.name)?;
        for item in items {
            for line in item.lines() {
                writeln!(f, "  {line}")?;
            }
        }
        f.write_str(")")
    }
}

/// Renders an angle in degrees.
pub(crate) fn angle(angle: f64) -> String {
    format!("{angle:4.1}°")
}

/// Renders a coordinate keeping the full precision of its components.
pub(crate) fn coordinate(point: Coordinate) -> String {
    format!("({:?}, {:?})", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_description() {
        let description = Description::new("Rotate")
            .arg(angle(30.0))
            .kwarg("clockwise", "true")
            .kwarg("center", coordinate(Coordinate::new(10.0, 20.5)));
        assert_eq!(
            description.to_string(),
            "Rotate(30.0°, clockwise=true, center=(10.0, 20.5))"
        );
    }

    #[test]
    fn test_angle_padding() {
        assert_eq!(angle(5.0), " 5.0°");
        assert_eq!(angle(359.94), "359.9°");
    }

    #[test]
    fn test_single_child_inline() {
        let description = Description::new("Composed").child(Description::new("Scale").arg("2.00"));
        assert_eq!(description.to_string(), "Composed(Scale(2.00))");
    }

    #[test]
    fn test_nested_children_indented() {
        let inner = Description::new("Composed")
            .child(Description::new("Scale").arg("2.00"))
            .child(Description::new("Translate").arg("(1.0, 2.0)"));
        let outer = Description::new("Composed")
            .child(Description::new("Shear").arg(angle(45.0)))
            .child(inner);

        let expected = "Composed(\n  Shear(45.0°)\n  Composed(\n    Scale(2.00)\n    Translate((1.0, 2.0))\n  )\n)";
        assert_eq!(outer.to_string(), expected);
    }
}
