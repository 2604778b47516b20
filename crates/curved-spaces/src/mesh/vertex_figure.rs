//! Vertex-figure mesh: a thin two-sided annulus at each polyhedron vertex,
//! one trapezoid pair per incident half-edge.

use super::{Mesh, MeshVertex};
use crate::dirichlet::{HalfEdgeId, Polyhedron, VertexId};

pub fn vertex_figure_mesh(domain: &Polyhedron) -> Mesh {
    let mut mesh = Mesh::new();
    for v in 0..domain.vertices.len() {
        let star = vertex_star(domain, VertexId(v as u32));
        if star.len() < 2 {
            continue;
        }
        let n = star.len();
        for i in 0..n {
            let he_a = star[i];
            let he_b = star[(i + 1) % n];
            let face_color = domain.face(domain.half_edge(he_a).face).color;

            let outer_a = domain.half_edge(he_a).outer_point;
            let inner_a = domain.half_edge(he_a).inner_point;
            let outer_b = domain.half_edge(he_b).outer_point;
            let inner_b = domain.half_edge(he_b).inner_point;

            let light = |pos, texcoord| MeshVertex {
                position: pos,
                texcoord,
                color: face_color,
            };
            let dark = |pos, texcoord| MeshVertex {
                position: pos,
                texcoord,
                color: [face_color[0] * 0.5, face_color[1] * 0.5, face_color[2] * 0.5, face_color[3]],
            };

            // Outward-facing light side: forward winding.
            mesh.push_triangle(
                light(outer_a, [0.0, 1.0, 0.0]),
                light(outer_b, [1.0, 1.0, 0.0]),
                light(inner_b, [1.0, 0.0, 0.0]),
            );
            mesh.push_triangle(
                light(outer_a, [0.0, 1.0, 0.0]),
                light(inner_b, [1.0, 0.0, 0.0]),
                light(inner_a, [0.0, 0.0, 0.0]),
            );

            // Inward-facing dark side: same quad, reversed winding.
            mesh.push_triangle(
                dark(outer_a, [0.0, 1.0, 0.0]),
                dark(inner_b, [1.0, 0.0, 0.0]),
                dark(outer_b, [1.0, 1.0, 0.0]),
            );
            mesh.push_triangle(
                dark(outer_a, [0.0, 1.0, 0.0]),
                dark(inner_a, [0.0, 0.0, 0.0]),
                dark(inner_b, [1.0, 0.0, 0.0]),
            );
        }
    }
    mesh
}

/// Outbound half-edges around a vertex, via the `mate . cycle` star walk.
fn vertex_star(domain: &Polyhedron, v: VertexId) -> Vec<HalfEdgeId> {
    let start = domain.vertex(v).outbound;
    let mut result = vec![start];
    let mut cur = domain.half_edge(domain.half_edge(start).mate).cycle;
    let mut guard = 0;
    while cur != start {
        result.push(cur);
        cur = domain.half_edge(domain.half_edge(cur).mate).cycle;
        guard += 1;
        if guard > domain.half_edges.len() {
            break;
        }
    }
    result
}
