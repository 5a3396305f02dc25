//! Validation of matrices before they are trusted for inversion.

use serde_json::Value;

use crate::{error::AlgebraError, matrix::Matrix};

/// Default tolerance on the deviation of the homogeneous bottom row from `(0, 0, 1)`.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Verifies a homogeneous 3x3 matrix and converts it to its compact form.
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidMatrix`] if an element is not finite or if the bottom row
/// deviates from `(0, 0, 1)` by more than `eps` in Euclidean norm.
pub fn matrix_from_homogeneous(rows: [[f64; 3]; 3], eps: f64) -> Result<Matrix, AlgebraError> {
    if rows.iter().flatten().any(|x| !x.is_finite()) {
        return Err(AlgebraError::InvalidMatrix(
            "matrix contains non-finite elements".to_string(),
        ));
    }

    let [x, y, w] = rows[2];
    let deviation = (x * x + y * y + (w - 1.0) * (w - 1.0)).sqrt();
    if deviation > eps {
        return Err(AlgebraError::InvalidMatrix(format!(
            "bottom row ({x}, {y}, {w}) deviates from (0, 0, 1) by {deviation:e}"
        )));
    }

    let [[a, b, c], [d, e, f], _] = rows;
    Ok(Matrix::new(a, b, c, d, e, f))
}

/// Verifies a typed matrix.
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidMatrix`] if the matrix has non-finite coefficients.
pub fn verify_matrix(matrix: &Matrix, eps: f64) -> Result<(), AlgebraError> {
    matrix_from_homogeneous(matrix.to_homogeneous(), eps).map(|_| ())
}

/// Verifies a loosely typed matrix and converts it to its compact form.
///
/// Accepted layouts are a flat list of 6 coefficients `[a, b, c, d, e, f]`, a flat row-major
/// list of 9 elements, or a nested 3x3 list. Every element must be a floating point number;
/// integer-typed elements are rejected.
///
/// # Errors
///
/// Returns [`AlgebraError::InvalidMatrix`] on a wrong layout, non-numeric or integer elements,
/// or a bottom row farther than `eps` from `(0, 0, 1)`.
///
/// # Example
///
/// ```
/// use raster_affine_algebra::{validation::verify_matrix_value, Matrix};
///
/// let value = serde_json::json!([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// assert_eq!(verify_matrix_value(&value, 1e-6).unwrap(), Matrix::IDENTITY);
///
/// let value = serde_json::json!([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
/// assert!(verify_matrix_value(&value, 1e-6).is_err());
/// ```
pub fn verify_matrix_value(value: &Value, eps: f64) -> Result<Matrix, AlgebraError> {
    let Value::Array(items) = value else {
        return Err(AlgebraError::InvalidMatrix(format!(
            "expected an array, got {}",
            kind_of(value)
        )));
    };

    if !items.is_empty() && items.iter().all(Value::is_array) {
        let rows = items
            .iter()
            .filter_map(Value::as_array)
            .map(|row| -> Result<[f64; 3], AlgebraError> {
                let row: &[Value; 3] = row.as_slice().try_into().map_err(|_| {
                    AlgebraError::InvalidMatrix(format!(
                        "expected rows of 3 elements, got a row of {}",
                        row.len()
                    ))
                })?;
                Ok([
                    float_element(&row[0])?,
                    float_element(&row[1])?,
                    float_element(&row[2])?,
                ])
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows: [[f64; 3]; 3] = rows.try_into().map_err(|rows: Vec<[f64; 3]>| {
            AlgebraError::InvalidMatrix(format!("expected 3 rows, got {}", rows.len()))
        })?;
        return matrix_from_homogeneous(rows, eps);
    }

    let elements = items
        .iter()
        .map(float_element)
        .collect::<Result<Vec<_>, _>>()?;

    match elements.as_slice() {
        &[a, b, c, d, e, f] => {
            matrix_from_homogeneous([[a, b, c], [d, e, f], [0.0, 0.0, 1.0]], eps)
        }
        &[a, b, c, d, e, f, g, h, i] => {
            matrix_from_homogeneous([[a, b, c], [d, e, f], [g, h, i]], eps)
        }
        other => Err(AlgebraError::InvalidMatrix(format!(
            "expected 6 or 9 elements, got {}",
            other.len()
        ))),
    }
}

fn float_element(value: &Value) -> Result<f64, AlgebraError> {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .ok_or_else(|| AlgebraError::InvalidMatrix(format!("element {n} is not a float"))),
        Value::Number(n) => Err(AlgebraError::InvalidMatrix(format!(
            "element {n} is integer-typed"
        ))),
        other => Err(AlgebraError::InvalidMatrix(format!(
            "element is {}, expected a floating point number",
            kind_of(other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_identity() -> Result<(), AlgebraError> {
        let nested = json!([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(verify_matrix_value(&nested, DEFAULT_EPS)?, Matrix::IDENTITY);

        let flat9 = json!([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(verify_matrix_value(&flat9, DEFAULT_EPS)?, Matrix::IDENTITY);

        let flat6 = json!([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(verify_matrix_value(&flat6, DEFAULT_EPS)?, Matrix::IDENTITY);
        Ok(())
    }

    #[test]
    fn test_rejects_non_numeric() {
        let values = [
            json!(null),
            json!("eye"),
            json!(1.0),
            json!([1.0, "x", 0.0, 0.0, 1.0, 0.0]),
        ];
        for value in values {
            assert!(matches!(
                verify_matrix_value(&value, DEFAULT_EPS),
                Err(AlgebraError::InvalidMatrix(_))
            ));
        }
    }

    #[test]
    fn test_rejects_integer_matrix() {
        let value = json!([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        assert!(matches!(
            verify_matrix_value(&value, DEFAULT_EPS),
            Err(AlgebraError::InvalidMatrix(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_shape() {
        let eye4 = json!([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0]
        ]);
        let ones3 = json!([1.0, 1.0, 1.0]);
        let two_rows = json!([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        for value in [eye4, ones3, two_rows, json!([])] {
            assert!(matches!(
                verify_matrix_value(&value, DEFAULT_EPS),
                Err(AlgebraError::InvalidMatrix(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bottom_row() {
        let value = json!([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1e-3, 1.0]]);
        assert!(matches!(
            verify_matrix_value(&value, DEFAULT_EPS),
            Err(AlgebraError::InvalidMatrix(_))
        ));

        // within tolerance
        let value = json!([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1e-8, 1.0]]);
        assert!(verify_matrix_value(&value, DEFAULT_EPS).is_ok());
    }

    #[test]
    fn test_verify_typed_matrix() {
        assert!(verify_matrix(&Matrix::IDENTITY, DEFAULT_EPS).is_ok());

        let m = Matrix::new(f64::NAN, 0.0, 0.0, 0.0, 1.0, 0.0);
        assert!(matches!(
            verify_matrix(&m, DEFAULT_EPS),
            Err(AlgebraError::InvalidMatrix(_))
        ));
    }
}
