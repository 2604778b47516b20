//! Generator list → group → domain → honeycomb, end to end, for the flat
//! 3-torus.
//!
//! Three unit translations along x, y, z. Expected: curvature `Flat`, a
//! cubical Dirichlet domain with 6 faces in 3 color classes, outradius
//! √3 / 2 ≈ 0.8660254.

use std::time::Instant;

use curved_spaces::dirichlet::Polyhedron;
use curved_spaces::holonomy::build_group;
use curved_spaces::honeycomb::Honeycomb;
use curved_spaces::linalg::{Curvature, Matrix, Tolerances};

fn main() {
    let tol = Tolerances::default();
    let generators = vec![
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 1.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 0.0, 1.0),
    ];

    let group_start = Instant::now();
    let group = build_group(&generators, Curvature::Flat, 11.0, &tol).expect("3-torus group should build");
    let group_elapsed = group_start.elapsed().as_secs_f64() * 1e3;

    let domain_start = Instant::now();
    let domain = Polyhedron::from_group(&group, Curvature::Flat, tol).expect("3-torus domain should close");
    let domain_elapsed = domain_start.elapsed().as_secs_f64() * 1e3;

    let honeycomb = Honeycomb::build(&group, Curvature::Flat);

    println!("space=three_torus curvature=Flat");
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
