//! Dirichlet-wall mesh: one annular trapezoid per boundary half-edge,
//! interpolated from the face center out to the edge by the aperture α.

use super::{Mesh, MeshVertex};
use crate::dirichlet::{HalfEdgeId, Polyhedron};
use crate::linalg::{vector_normalize, Vector};

/// Builds the wall mesh for the current aperture. Returns an empty mesh at
/// `aperture >= 1.0` (walls are fully open, so nothing is drawn).
pub fn wall_mesh(domain: &Polyhedron, aperture: f64) -> Mesh {
    let mut mesh = Mesh::new();
    if aperture >= 1.0 {
        return mesh;
    }

    for face in domain.faces.iter() {
        if face.deleted {
            continue;
        }
        let cycle = face_half_edges(domain, face.half_edge);
        let edge_count = cycle.len();

        for (i, &he_id) in cycle.iter().enumerate() {
            let he = domain.half_edge(he_id);
            let tail = domain.vertex(domain.tail(he_id)).normalized;
            let tip = domain.vertex(he.tip).normalized;

            let near_outer = tail;
            let far_outer = tip;
            let near_inner = inward(face.center, near_outer, aperture, domain.curvature);
            let far_inner = inward(face.center, far_outer, aperture, domain.curvature);

            let u0 = (i % 2) as f32;
            let u1 = ((i + 1) % 2) as f32;

            let color = face.color;
            let v_near_outer = MeshVertex {
                position: near_outer,
                texcoord: [u0, 1.0, 0.0],
                color,
            };
            let v_far_outer = MeshVertex {
                position: far_outer,
                texcoord: [u1, 1.0, 0.0],
                color,
            };
            let v_near_inner = MeshVertex {
                position: near_inner,
                texcoord: [u0, 0.0, 0.0],
                color,
            };
            let v_far_inner = MeshVertex {
                position: far_inner,
                texcoord: [u1, 0.0, 0.0],
                color,
            };

            mesh.push_triangle(v_near_outer, v_far_outer, v_far_inner);
            mesh.push_triangle(v_near_outer, v_far_inner, v_near_inner);
        }
        debug_assert!(edge_count > 0, "a live face must have at least one boundary half-edge");
    }

    mesh
}

/// Walks a face's boundary cycle starting from `start`.
fn face_half_edges(domain: &Polyhedron, start: HalfEdgeId) -> Vec<HalfEdgeId> {
    let mut result = vec![start];
    let mut cur = domain.half_edge(start).cycle;
    let mut guard = 0;
    while cur != start {
        result.push(cur);
        cur = domain.half_edge(cur).cycle;
        guard += 1;
        if guard > domain.half_edges.len() {
            break;
        }
    }
    result
}

/// Interpolates from `center` toward `outer` by `alpha`, renormalized.
fn inward(center: Vector, outer: Vector, alpha: f64, curvature: crate::linalg::Curvature) -> Vector {
    let combo = center * (1.0 - alpha) + outer * alpha;
    vector_normalize(combo, curvature).unwrap_or(combo)
}
