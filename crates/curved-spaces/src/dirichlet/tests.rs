use super::builder::*;
use super::Polyhedron;
use crate::holonomy::build_group;
use crate::linalg::{Curvature, Matrix, Tolerances};

fn three_torus_generators() -> Vec<Matrix> {
    vec![
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 1.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 0.0, 1.0),
    ]
}

fn build_three_torus_domain() -> Polyhedron {
    let tol = Tolerances::default();
    let provisional = build_group(&three_torus_generators(), Curvature::Flat, 2.0, &tol).unwrap();
    Polyhedron::from_group(&provisional, Curvature::Flat, tol).expect("3-torus domain should seed and close")
}

#[test]
fn three_torus_domain_has_euler_characteristic_two() {
    let domain = build_three_torus_domain();
    assert_eq!(domain.euler_characteristic(), 2);
}

#[test]
fn three_torus_domain_is_flat_with_plausible_outradius() {
    let domain = build_three_torus_domain();
    assert_eq!(domain.curvature, Curvature::Flat);
    // A unit cube's circumradius is sqrt(3)/2 ~= 0.866; allow slack for the
    // iterative-intersection construction rather than pin an exact digit.
    assert!(domain.outradius > 0.5 && domain.outradius < 1.2, "outradius = {}", domain.outradius);
}

#[test]
fn every_half_edge_mate_is_involutive() {
    let domain = build_three_torus_domain();
    for (i, he) in domain.half_edges.iter().enumerate() {
        let mate = domain.half_edges[he.mate.0 as usize].mate;
        assert_eq!(mate.0 as usize, i, "mate(mate(h)) != h at half-edge {}", i);
    }
}

#[test]
fn every_face_cycle_closes() {
    let domain = build_three_torus_domain();
    for (f, face) in domain.faces.iter().enumerate() {
        let start = face.half_edge;
        let mut cur = start;
        let mut steps = 0;
        loop {
            cur = domain.half_edges[cur.0 as usize].cycle;
            steps += 1;
            if cur == start || steps > domain.half_edges.len() {
                break;
            }
        }
        assert_eq!(cur, start, "face {} cycle never returned to its start", f);
    }
}

#[test]
fn face_colors_agree_between_partners() {
    let domain = build_three_torus_domain();
    let eps = Tolerances::default().matrix_eps;
    for face in &domain.faces {
        let inverse = face.matrix.geometric_inverse(domain.curvature);
        if let Some(partner) = domain.faces.iter().find(|f| f.matrix.equality_within(&inverse, eps)) {
            assert_eq!(face.color_index, partner.color_index);
        }
    }
}

#[test]
fn wall_longest_base_is_normalized_to_one() {
    let domain = build_three_torus_domain();
    let longest = domain.half_edges.iter().map(|h| h.base).fold(0.0_f64, f64::max);
    assert!((longest - 1.0).abs() < 1e-6, "longest base = {}", longest);
}

#[test]
fn stay_in_dirichlet_domain_fixes_a_displaced_placement() {
    let domain = build_three_torus_domain();
    let tol = Tolerances::default();
    let mut placement = Matrix::translation(Curvature::Flat, 5.0, 0.0, 0.0);
    super::stay_in_dirichlet_domain(&domain, &mut placement, Curvature::Flat, &tol);
    let origin_image = placement.apply(crate::linalg::origin());
    for face in &domain.faces {
        let value = super::halfspace::halfspace_value(&face.plane, &origin_image);
        assert!(value <= tol.restoring_eps + 1e-6, "face value {} exceeds restoring eps after correction", value);
    }
}
