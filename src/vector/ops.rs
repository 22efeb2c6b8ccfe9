//! Operator overloads for [`Vector3D`].
//!
//! Each operator forwards to the named method so both spellings produce
//! identical results.

use super::Vector3D;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl Add for Vector3D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector3D::add(self, other)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.multiply(scalar)
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vector: Vector3D) -> Vector3D {
        vector.multiply(self)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        self.multiply(-1.0)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, other: Self) {
        *self = Vector3D::add(*self, other);
    }
}

impl SubAssign for Vector3D {
    fn sub_assign(&mut self, other: Self) {
        *self = self.subtract(other);
    }
}

impl MulAssign<f64> for Vector3D {
    fn mul_assign(&mut self, scalar: f64) {
        *self = self.multiply(scalar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_match_named_methods() {
        let a = Vector3D::new(3.0, -3.0, 1.0);
        let b = Vector3D::new(4.0, 9.0, 2.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * 2.5, a.multiply(2.5));
        assert_eq!(2.5 * a, a.multiply(2.5));
        assert_eq!(-a, Vector3D::new(-3.0, 3.0, -1.0));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vector3D::new(1.0, 2.0, 3.0);
        v += Vector3D::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3D::new(2.0, 3.0, 4.0));
        v -= Vector3D::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vector3D::new(0.0, 1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vector3D::new(0.0, 3.0, 6.0));
    }

    #[test]
    fn test_cross_product_anticommutes_through_neg() {
        let a = Vector3D::new(3.0, -3.0, 1.0);
        let b = Vector3D::new(4.0, 9.0, 2.0);
        assert_eq!(a.cross_product(b), -b.cross_product(a));
    }
}
