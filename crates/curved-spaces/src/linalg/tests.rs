use proptest::prelude::*;

use super::matrix::{fast_gram_schmidt, Matrix};
use super::vector::origin;
use super::Curvature;

const CURVATURES: [Curvature; 3] = [Curvature::Spherical, Curvature::Flat, Curvature::Hyperbolic];

#[test]
fn identity_is_identity() {
    assert!(Matrix::identity().is_identity(1e-12));
}

#[test]
fn geometric_inverse_round_trip_all_curvatures() {
    for &c in &CURVATURES {
        let m = Matrix::translation(c, 0.2, -0.1, 0.05);
        let inv = m.geometric_inverse(c);
        let round = m.product(&inv);
        assert!(
            round.is_identity(1e-8),
            "curvature {:?} round-trip failed: {:?}",
            c,
            round.entries
        );
    }
}

#[test]
fn translation_round_trip_negation() {
    for &c in &CURVATURES {
        let fwd = Matrix::translation(c, 0.1, 0.2, -0.15);
        let bwd = Matrix::translation(c, -0.1, -0.2, 0.15);
        let round = bwd.product(&fwd);
        assert!(round.is_identity(1e-10));
    }
}

#[test]
fn curvature_classify_matches_m33() {
    assert_eq!(Curvature::classify(0.5, 1e-6), Curvature::Spherical);
    assert_eq!(Curvature::classify(1.0, 1e-6), Curvature::Flat);
    assert_eq!(Curvature::classify(0.9, 1e-6), Curvature::Spherical);
    assert_eq!(Curvature::classify(1.1, 1e-6), Curvature::Hyperbolic);
}

#[test]
fn antipodal_map_is_involution_and_reflects_origin() {
    let a = Matrix::antipodal_map();
    let round = a.product(&a);
    assert!(round.is_identity(1e-12));
    let p = a.apply(origin());
    assert!((p - origin()).norm() > 1.0);
}

proptest! {
    #[test]
    fn gram_schmidt_restores_group_membership(
        dx in -0.3f64..0.3, dy in -0.3f64..0.3, dz in -0.3f64..0.3,
        jitter in -1e-3f64..1e-3,
    ) {
        for &c in &CURVATURES {
            let mut m = Matrix::translation(c, dx, dy, dz);
            // Simulate accumulated drift.
            m.entries[(0, 0)] += jitter;
            m.entries[(2, 3)] += jitter;
            let fixed = fast_gram_schmidt(&m, c);
            let inv = fixed.geometric_inverse(c);
            let round = fixed.product(&inv);
            prop_assert!(round.is_identity(1e-6));
        }
    }
}
