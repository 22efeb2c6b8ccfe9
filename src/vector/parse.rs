//! Text form of [`Vector3D`]: `x,y,z`, optionally wrapped in parentheses.

use super::Vector3D;
use crate::VectorError;
use std::fmt;
use std::str::FromStr;

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3D {
    type Err = VectorError;

    /// Parses `x,y,z` or `(x, y, z)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3d::Vector3D;
    ///
    /// let v: Vector3D = "(1, -2.5, 3e2)".parse().unwrap();
    /// assert_eq!(v, Vector3D::new(1.0, -2.5, 300.0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => {
                return Err(VectorError::Parse(format!(
                    "unbalanced parentheses in '{}'",
                    s
                )))
            }
        };

        let components = inner
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|e| {
                    VectorError::Parse(format!("invalid component '{}': {}", part.trim(), e))
                })
            })
            .collect::<Result<Vec<f64>, VectorError>>()?;

        match components.as_slice() {
            [x, y, z] => Ok(Vector3D::new(*x, *y, *z)),
            other => Err(VectorError::Parse(format!(
                "expected 3 components, found {}",
                other.len()
            ))),
        }
    }
}
