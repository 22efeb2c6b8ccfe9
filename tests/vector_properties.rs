//! Property tests for the algebraic laws of vector arithmetic.

use proptest::prelude::*;
use vector3d::{config::DEFAULT_EPSILON, Vector3D, VectorError};

fn finite_vector() -> impl Strategy<Value = Vector3D> {
    (-1e6f64..1e6, -1e6f64..1e6, -1e6f64..1e6).prop_map(|(x, y, z)| Vector3D::new(x, y, z))
}

fn non_zero_vector() -> impl Strategy<Value = Vector3D> {
    finite_vector().prop_filter("vector must have a non-zero magnitude", |v| {
        v.magnitude() > 1e-3
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn add_is_commutative(a in finite_vector(), b in finite_vector()) {
        prop_assert_eq!(a.add(b), b.add(a));
    }

    #[test]
    fn subtracting_self_gives_exact_zero(v in finite_vector()) {
        prop_assert_eq!(v.subtract(v), Vector3D::ZERO);
    }

    #[test]
    fn dot_product_is_symmetric(a in finite_vector(), b in finite_vector()) {
        prop_assert_eq!(a.dot_product(b), b.dot_product(a));
    }

    #[test]
    fn cross_product_is_anticommutative(a in finite_vector(), b in finite_vector()) {
        let ab = a.cross_product(b);
        let ba = b.cross_product(a);
        // Products reach ~1e12, so compare relative to the operand scale.
        let tolerance = DEFAULT_EPSILON * (1.0 + a.magnitude() * b.magnitude());
        prop_assert!(ab.approx_eq(-ba, tolerance), "{} vs {}", ab, -ba);
    }

    #[test]
    fn cross_product_is_orthogonal_to_inputs(a in finite_vector(), b in finite_vector()) {
        let c = a.cross_product(b);
        let scale = 1.0 + a.magnitude() * b.magnitude() * a.magnitude().max(b.magnitude());
        prop_assert!(c.dot_product(a).abs() <= 1e-9 * scale);
        prop_assert!(c.dot_product(b).abs() <= 1e-9 * scale);
    }

    #[test]
    fn distance_is_symmetric(a in finite_vector(), b in finite_vector()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn normalized_vector_has_unit_magnitude(v in non_zero_vector()) {
        let unit = v.normalize().unwrap();
        prop_assert!((unit.magnitude() - 1.0).abs() <= DEFAULT_EPSILON);
        // Same direction: positive alignment with the input.
        prop_assert!(unit.dot_product(v) > 0.0);
    }

    #[test]
    fn multiply_by_one_is_identity(v in finite_vector()) {
        prop_assert_eq!(v.multiply(1.0), v);
        prop_assert!(v.multiply(0.0).is_zero());
    }

    #[test]
    fn operators_agree_with_named_methods(a in finite_vector(), b in finite_vector(), s in -1e3f64..1e3) {
        prop_assert_eq!(a + b, a.add(b));
        prop_assert_eq!(a - b, a.subtract(b));
        prop_assert_eq!(a * s, a.multiply(s));
    }
}

#[test]
fn normalize_zero_vector_is_an_error() {
    assert!(matches!(
        Vector3D::new(0.0, 0.0, 0.0).normalize(),
        Err(VectorError::ZeroVector)
    ));
}
