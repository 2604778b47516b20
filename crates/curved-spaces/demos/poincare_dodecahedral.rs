//! Generator list → group → domain → honeycomb, end to end, for the
//! Poincaré dodecahedral space.
//!
//! The twelve generators are left-multiplications by unit quaternions
//! representing a 72° rotation about each of the twelve icosahedron-vertex
//! axes. Left multiplication by a unit quaternion g acts freely on the unit
//! quaternions (g*v = v implies g = 1 by cancellation), so each generator
//! is a fixed-point-free isometry of S^3 and the group they generate is the
//! binary icosahedral group, order 120. Expected: curvature `Spherical`, 12
//! pentagonal faces in 6 color classes, outradius < pi/2.

use std::time::Instant;

use curved_spaces::dirichlet::Polyhedron;
use curved_spaces::holonomy::build_group;
use curved_spaces::honeycomb::Honeycomb;
use curved_spaces::linalg::{Curvature, Matrix, Tolerances};

const PHI: f64 = 1.618_033_988_749_895;

/// The twelve icosahedron vertex directions, as unit vectors: every even
/// permutation of (0, ±1, ±phi) scaled to unit length.
fn icosahedron_axes() -> Vec<(f64, f64, f64)> {
    let norm = (1.0 + PHI * PHI).sqrt();
    let mut axes = Vec::with_capacity(12);
    for &s1 in &[1.0_f64, -1.0] {
        for &s2 in &[1.0_f64, -1.0] {
            axes.push((0.0, s1 / norm, s2 * PHI / norm));
            axes.push((s1 / norm, s2 * PHI / norm, 0.0));
            axes.push((s2 * PHI / norm, 0.0, s1 / norm));
        }
    }
    axes
}

/// Left-multiplication-by-g matrix for the unit quaternion g = gx i + gy j +
/// gz k + gw, acting on v = (x, y, z, w) as the quaternion product g*v.
fn quaternion_left_multiplication(gx: f64, gy: f64, gz: f64, gw: f64) -> Matrix {
    Matrix::new(nalgebra::Matrix4::new(
        gw, gz, -gy, -gx, //
        -gz, gw, gx, -gy, //
        gy, -gx, gw, -gz, //
        gx, gy, gz, gw,
    ))
}

fn binary_icosahedral_generators() -> Vec<Matrix> {
    let half_angle = std::f64::consts::PI / 5.0;
    let (sin, cos) = half_angle.sin_cos();
    icosahedron_axes()
        .into_iter()
        .map(|(ax, ay, az)| quaternion_left_multiplication(sin * ax, sin * ay, sin * az, cos))
        .collect()
}

fn main() {
    let tol = Tolerances::default();
    let generators = binary_icosahedral_generators();

    let group_start = Instant::now();
    let group = build_group(&generators, Curvature::Spherical, 3.15, &tol)
        .expect("binary icosahedral group should build");
    let group_elapsed = group_start.elapsed().as_secs_f64() * 1e3;

    let domain_start = Instant::now();
    let domain =
        Polyhedron::from_group(&group, Curvature::Spherical, tol).expect("Poincaré dodecahedral domain should close");
    let domain_elapsed = domain_start.elapsed().as_secs_f64() * 1e3;

    let honeycomb = Honeycomb::build(&group, Curvature::Spherical);

    println!("space=poincare_dodecahedral curvature=Spherical");
    println!("group_size={} group_time_ms={:.3}", group.len(), group_elapsed);
    println!(
        "domain_faces={} domain_vertices={} outradius={:.7} domain_time_ms={:.3}",
        domain.live_face_count(),
        domain.live_vertex_count(),
        domain.outradius,
        domain_elapsed
    );
    println!("honeycomb_cells={}", honeycomb.cells.len());
}
