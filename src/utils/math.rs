//! # Float Mathematics
//!
//! Scalar helpers for `f64` comparison and approximation.

use crate::config::INV_SQRT_MAGIC;

/// Returns true if `a` and `b` differ by at most `epsilon`.
///
/// NaN never compares equal to anything, including itself.
pub fn almost_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Fast approximation of `1 / sqrt(x)` for `f64`.
///
/// Uses the bit-level initial guess followed by a single Newton-Raphson
/// step. Relative error stays below 0.2% for positive normal inputs; the
/// result is meaningless for zero, negative or non-finite `x`.
///
/// # Examples
///
/// ```
/// use vector3d::inv_sqrt;
///
/// assert!((inv_sqrt(4.0) - 0.5).abs() < 1e-3);
/// ```
pub fn inv_sqrt(x: f64) -> f64 {
    let half = 0.5 * x;
    let guess = f64::from_bits(INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    guess * (1.5 - half * guess * guess)
}
