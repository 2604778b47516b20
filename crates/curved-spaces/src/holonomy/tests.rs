use proptest::prelude::*;

use super::{build_group, detect_curvature};
use crate::linalg::{Curvature, Matrix, Tolerances};

fn three_torus_generators() -> Vec<Matrix> {
    vec![
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 1.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 0.0, 1.0),
    ]
}

#[test]
fn identity_appears_exactly_once_at_position_zero() {
    let tol = Tolerances::default();
    let group = build_group(&three_torus_generators(), Curvature::Flat, 1.5, &tol).unwrap();
    assert!(group[0].is_identity(tol.matrix_eps));
    let identity_count = group.iter().filter(|m| m.is_identity(tol.matrix_eps)).count();
    assert_eq!(identity_count, 1);
}

#[test]
fn detect_curvature_flat_for_three_torus() {
    let tol = Tolerances::default();
    let c = detect_curvature(&three_torus_generators(), &tol).unwrap();
    assert_eq!(c, Curvature::Flat);
}

#[test]
fn detect_curvature_rejects_mixed_signs() {
    let tol = Tolerances::default();
    let mixed = vec![
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Hyperbolic, 1.0, 0.0, 0.0),
    ];
    assert_eq!(
        detect_curvature(&mixed, &tol),
        Err(super::GroupError::InconsistentCurvature)
    );
}

#[test]
fn three_torus_group_size_grows_with_radius() {
    let tol = Tolerances::default();
    let small = build_group(&three_torus_generators(), Curvature::Flat, 1.01, &tol).unwrap();
    let large = build_group(&three_torus_generators(), Curvature::Flat, 2.01, &tol).unwrap();
    // radius 1.01 reaches the 6 unit translates plus identity = 7
    assert_eq!(small.len(), 7);
    assert!(large.len() > small.len());
}

#[test]
fn every_element_has_an_inverse_in_the_group() {
    let tol = Tolerances::default();
    let group = build_group(&three_torus_generators(), Curvature::Flat, 2.0, &tol).unwrap();
    for g in &group {
        let inv = g.geometric_inverse(Curvature::Flat);
        assert!(
            group.iter().any(|e| e.equality_within(&inv, 1e-5)),
            "no inverse found for an element of the group"
        );
    }
}

#[test]
fn runaway_generator_is_rejected_as_not_discrete() {
    let tol = Tolerances {
        matrix_eps: 1e-9,
        ..Tolerances::default()
    };
    // An irrational-angle rotation-like hyperbolic boost composed densely
    // will keep discovering new elements well past any reasonable radius.
    let gens = vec![
        Matrix::translation(Curvature::Hyperbolic, 0.0173, 0.0, 0.0),
        Matrix::translation(Curvature::Hyperbolic, 0.0, 0.0211, 0.0),
        Matrix::translation(Curvature::Hyperbolic, 0.0, 0.0, 0.0197),
    ];
    let result = build_group(&gens, Curvature::Hyperbolic, 1.0e6, &tol);
    assert_eq!(result, Err(super::GroupError::NotDiscrete));
}

proptest! {
    #[test]
    fn dedup_never_produces_duplicate_elements(radius in 1.01f64..3.0) {
        let tol = Tolerances::default();
        let group = build_group(&three_torus_generators(), Curvature::Flat, radius, &tol).unwrap();
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                prop_assert!(!group[i].equality_within(&group[j], tol.matrix_eps));
            }
        }
    }
}
