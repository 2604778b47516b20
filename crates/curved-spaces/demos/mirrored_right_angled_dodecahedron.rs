//! Generator list → group → domain → honeycomb, end to end, for a mirrored
//! right-angled dodecahedron in hyperbolic space.
//!
//! The twelve generators are Minkowski-form reflections in the twelve
//! hyperplanes whose spacelike unit normals sit along the icosahedron
//! vertex axes, offset from the origin by a fixed hyperbolic depth. Each
//! reflection is its own inverse, so the resulting Dirichlet domain has 12
//! faces, each its own color class. `rho` below is chosen to produce a
//! plausible closed 12-mirror polyhedron; it does not reproduce the exact
//! dihedral angles of the named reference polytope.
use std::time::Instant;

use curved_spaces::dirichlet::Polyhedron;
use curved_spaces::holonomy::build_group;
use curved_spaces::honeycomb::Honeycomb;
use curved_spaces::linalg::{Curvature, Matrix, Tolerances};

const PHI: f64 = 1.618_033_988_749_895;

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

/// Reflection in the hyperplane with Minkowski-unit spacelike normal
/// n = (cosh(rho) * axis, sinh(rho)), via the general bilinear-form
/// reflection formula R(v) = v + 2<v, n> n (here <., .> the hyperbolic
/// inner product, with <n, n> = -1).
fn hyperbolic_reflection(axis: (f64, f64, f64), rho: f64) -> Matrix {
    let (cosh, sinh) = (rho.cosh(), rho.sinh());
    let (nx, ny, nz, nw) = (axis.0 * cosh, axis.1 * cosh, axis.2 * cosh, sinh);

    Matrix::new(nalgebra::Matrix4::new(
        1.0 - 2.0 * nx * nx,
        -2.0 * nx * ny,
        -2.0 * nx * nz,
        -2.0 * nx * nw,
        -2.0 * ny * nx,
        1.0 - 2.0 * ny * ny,
        -2.0 * ny * nz,
        -2.0 * ny * nw,
        -2.0 * nz * nx,
        -2.0 * nz * ny,
        1.0 - 2.0 * nz * nz,
        -2.0 * nz * nw,
        2.0 * nw * nx,
        2.0 * nw * ny,
        2.0 * nw * nz,
        1.0 + 2.0 * nw * nw,
    ))
}

fn mirror_generators() -> Vec<Matrix> {
    let rho = 0.9;
    icosahedron_axes()
        .into_iter()
        .map(|axis| hyperbolic_reflection(axis, rho))
        .collect()
}

fn main() {
    let tol = Tolerances::default();
    let generators = mirror_generators();

    let group_start = Instant::now();
    let group = build_group(&generators, Curvature::Hyperbolic, 7.0, &tol)
        .expect("mirrored dodecahedron group should build");
    let group_elapsed = group_start.elapsed().as_secs_f64() * 1e3;

    let domain_start = Instant::now();
    let domain = Polyhedron::from_group(&group, Curvature::Hyperbolic, tol)
        .expect("mirrored dodecahedron domain should close");
    let domain_elapsed = domain_start.elapsed().as_secs_f64() * 1e3;

    let honeycomb = Honeycomb::build(&group, Curvature::Hyperbolic);

    println!("space=mirrored_right_angled_dodecahedron curvature=Hyperbolic");
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
