use super::*;
use crate::dirichlet::Polyhedron;
use crate::holonomy::build_group;
use crate::linalg::{Curvature, Matrix, Tolerances};

fn three_torus_domain() -> (Vec<Matrix>, Polyhedron) {
    let tol = Tolerances::default();
    let generators = vec![
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 1.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 0.0, 1.0),
    ];
    let group = build_group(&generators, Curvature::Flat, 2.0, &tol).unwrap();
    let domain = Polyhedron::from_group(&group, Curvature::Flat, tol).unwrap();
    (group, domain)
}

#[test]
fn accelerate_and_decelerate_clamp_to_the_speed_range() {
    let mut observer = Observer::at_origin();
    for _ in 0..100 {
        observer.accelerate();
    }
    assert!((observer.speed - MAX_SPEED).abs() < 1e-12);
    for _ in 0..100 {
        observer.decelerate();
    }
    assert_eq!(observer.speed, 0.0);
}

#[test]
fn tap_stops_and_resumes_motion() {
    let mut observer = Observer::at_origin();
    observer.speed = 0.12;
    observer.tap();
    assert_eq!(observer.speed, 0.0);
    assert_eq!(observer.paused_speed, 0.12);
    observer.tap();
    assert_eq!(observer.speed, 0.12);
}

#[test]
fn advance_clamps_dt_before_computing_the_step() {
    let mut a = Observer::at_origin();
    let mut b = Observer::at_origin();
    a.speed = 0.2;
    b.speed = 0.2;
    a.advance(0.1, None, Curvature::Flat, &Tolerances::default());
    b.advance(5.0, None, Curvature::Flat, &Tolerances::default());
    assert_eq!(a.placement.entries, b.placement.entries);
}

#[test]
fn rotate_by_full_turn_returns_to_the_starting_placement() {
    let mut observer = Observer::at_origin();
    let steps = 360;
    for _ in 0..steps {
        observer.rotate(std::f64::consts::TAU / steps as f64);
    }
    assert!(observer.placement.is_identity(1e-9));
}

#[test]
fn sustained_forward_motion_stays_inside_the_dirichlet_domain_and_in_the_group() {
    let (_, domain) = three_torus_domain();
    let tol = Tolerances::default();
    let mut observer = Observer::at_origin();
    observer.speed = 0.1;

    for _ in 0..1000 {
        observer.advance(0.02, Some(&domain), Curvature::Flat, &tol);
    }

    let origin_image = observer.placement.apply(crate::linalg::origin());
    for face in &domain.faces {
        let value = face.plane.dot(&origin_image);
        assert!(value <= tol.restoring_eps + 1e-9, "face value {} should satisfy the return-to-cell bound", value);
    }

    let inverse = observer.placement.geometric_inverse(Curvature::Flat);
    let roundtrip = observer.placement.product(&inverse);
    assert!(roundtrip.is_identity(1e-8));
}
