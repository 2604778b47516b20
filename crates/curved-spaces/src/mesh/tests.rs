use super::*;
use crate::dirichlet::Polyhedron;
use crate::holonomy::build_group;
use crate::linalg::{Curvature, Matrix, Tolerances};

fn three_torus_domain() -> Polyhedron {
    let tol = Tolerances::default();
    let generators = vec![
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 1.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 0.0, 1.0),
    ];
    let group = build_group(&generators, Curvature::Flat, 2.0, &tol).unwrap();
    Polyhedron::from_group(&group, Curvature::Flat, tol).unwrap()
}

#[test]
fn wall_mesh_is_empty_at_full_aperture() {
    let domain = three_torus_domain();
    let mesh = wall_mesh(&domain, 1.0);
    assert!(mesh.vertices.is_empty());
    assert!(mesh.indices.is_empty());
}

#[test]
fn wall_mesh_has_two_triangles_per_boundary_half_edge() {
    let domain = three_torus_domain();
    let mesh = wall_mesh(&domain, 0.5);
    assert_eq!(mesh.indices.len() % 3, 0);
    assert_eq!(mesh.indices.len() / 3, 2 * domain.live_half_edge_count());
}

#[test]
fn vertex_figure_mesh_has_four_triangles_per_incident_half_edge() {
    let domain = three_torus_domain();
    let mesh = vertex_figure_mesh(&domain);
    assert_eq!(mesh.indices.len() / 3, 4 * domain.live_half_edge_count());
}

#[test]
fn sphere_mesh_at_level_zero_is_an_icosahedron() {
    let mesh = sphere_mesh(0, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(mesh.indices.len() / 3, 20);
}

#[test]
fn sphere_mesh_vertices_lie_on_the_unit_sphere() {
    let mesh = sphere_mesh(2, [1.0, 1.0, 1.0, 1.0]);
    for v in &mesh.vertices {
        let norm = (v.position.x * v.position.x + v.position.y * v.position.y + v.position.z * v.position.z).sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "sphere vertex should have unit radius, got {}", norm);
    }
}

#[test]
fn sphere_subdivision_quadruples_the_triangle_count_each_level() {
    let level0 = sphere_mesh(0, [1.0, 1.0, 1.0, 1.0]);
    let level1 = sphere_mesh(1, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(level1.indices.len(), level0.indices.len() * 4);
}

#[test]
fn cube_mesh_has_six_faces_of_two_triangles() {
    let mesh = cube_mesh([1.0, 1.0, 1.0, 1.0]);
    assert_eq!(mesh.indices.len() / 3, 12);
}

#[test]
fn gyroscope_mesh_is_three_rings_worth_of_quads() {
    let mesh = gyroscope_mesh(16, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(mesh.indices.len() / 3, 3 * 16 * 2);
}

#[test]
fn observer_mesh_has_two_triangles_per_rim_segment() {
    let mesh = observer_mesh(12, [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(mesh.indices.len() / 3, 12 * 2);
}
