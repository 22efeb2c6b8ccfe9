//! # Vector Module
//!
//! The [`Vector3D`] value type and its arithmetic.
//!
//! All operations take `self` by value and return new values; nothing here
//! mutates a vector in place except the compound assignment operators in
//! [`ops`].

pub mod ops;
pub mod parse;

use crate::{VectorError, VectorResult};
use serde::{Deserialize, Serialize};

/// A point or displacement in 3-dimensional real space.
///
/// Components are not validated: NaN and infinities are stored as given and
/// flow through later computations with ordinary IEEE 754 semantics.
///
/// # Examples
///
/// ```
/// use vector3d::Vector3D;
///
/// let a = Vector3D::new(3.0, 4.0, 5.0);
/// let b = Vector3D::new(1.0, 2.0, 3.0);
/// assert_eq!(a.add(b), Vector3D::new(4.0, 6.0, 8.0));
/// assert_eq!(a.dot_product(b), 26.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a new vector from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns true if all three components are zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Sum of the squared components.
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length of the vector. Exactly `0.0` for the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3d::Vector3D;
    ///
    /// assert_eq!(Vector3D::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Rescales the vector to unit length, keeping its direction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroVector`] when the magnitude is exactly zero.
    /// Vectors whose magnitude overflows to infinity are not rejected; their
    /// components come back as zero or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector3d::Vector3D;
    ///
    /// let unit = Vector3D::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!(unit.approx_eq(Vector3D::new(0.6, 0.8, 0.0), 1e-10));
    /// ```
    pub fn normalize(self) -> VectorResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(VectorError::ZeroVector);
        }
        Ok(Self::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Componentwise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector3D) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference `self - other`.
    pub fn subtract(self, other: Vector3D) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales every component by `scalar`.
    pub fn multiply(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product. Zero for orthogonal vectors.
    pub fn dot_product(self, other: Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    ///
    /// The result is the zero vector when the inputs are parallel, which
    /// includes either of them being zero.
    pub fn cross_product(self, other: Vector3D) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vector3D) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Returns true if every component of `self` is within `epsilon` of the
    /// matching component of `other`.
    pub fn approx_eq(self, other: Vector3D, epsilon: f64) -> bool {
        crate::almost_equal(self.x, other.x, epsilon)
            && crate::almost_equal(self.y, other.y, epsilon)
            && crate::almost_equal(self.z, other.z, epsilon)
    }
}
