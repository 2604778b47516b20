//! Unit sphere by icosahedral geodesic subdivision.
//!
//! Grounded on the shared-midpoint-table idiom for geodesic subdivision
//! (edge `(v0, v1)` keys a lookup so each inserted midpoint is created once).

use std::collections::HashMap;

use super::{Mesh, MeshVertex};
use crate::linalg::Vector;

/// Maximum subdivision level.
pub const MAX_LEVEL: u32 = 3;

/// Builds a unit sphere mesh at subdivision level `level`, clamped to
/// `0..=MAX_LEVEL`. `color` is applied uniformly to every vertex.
pub fn sphere_mesh(level: u32, color: [f32; 4]) -> Mesh {
    let level = level.min(MAX_LEVEL);
    let (mut positions, mut triangles) = icosahedron();

    for _ in 0..level {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next_triangles = Vec::with_capacity(triangles.len() * 4);

        for [a, b, c] in triangles {
            let ab = midpoint(&mut positions, &mut midpoints, a, b);
            let bc = midpoint(&mut positions, &mut midpoints, b, c);
            let ca = midpoint(&mut positions, &mut midpoints, c, a);
            next_triangles.push([a, ab, ca]);
            next_triangles.push([b, bc, ab]);
            next_triangles.push([c, ca, bc]);
            next_triangles.push([ab, bc, ca]);
        }

        triangles = next_triangles;
    }

    let mut mesh = Mesh::new();
    for [a, b, c] in triangles {
        let vertex = |i: u32| {
            let p = positions[i as usize];
            MeshVertex {
                position: p,
                texcoord: sphere_texcoord(p),
                color,
            }
        };
        mesh.push_triangle(vertex(a), vertex(b), vertex(c));
    }
    mesh
}

fn sphere_texcoord(p: Vector) -> [f32; 3] {
    let u = 0.5 + p.x.atan2(p.z) / std::f64::consts::TAU;
    let v = 0.5 - p.y.asin() / std::f64::consts::PI;
    [u as f32, v as f32, 0.0]
}

/// Looks up (or creates, normalizing to the unit sphere) the midpoint vertex
/// for edge `(a, b)`, keyed independent of direction.
fn midpoint(positions: &mut Vec<Vector>, table: &mut HashMap<(u32, u32), u32>, a: u32, b: u32) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&existing) = table.get(&key) {
        return existing;
    }
    let pa = positions[a as usize];
    let pb = positions[b as usize];
    let mid = (pa + pb) * 0.5;
    let normalized = unit_sphere(mid);
    let index = positions.len() as u32;
    positions.push(normalized);
    table.insert(key, index);
    index
}

fn unit_sphere(v: Vector) -> Vector {
    let norm = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    Vector::new(v.x / norm, v.y / norm, v.z / norm, 1.0)
}

/// The 12 vertices and 20 facets of a unit icosahedron, vertices at
/// permutations of `(0, ±1, ±φ) / sqrt(φ² + 1)`.
fn icosahedron() -> (Vec<Vector>, Vec<[u32; 3]>) {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = 1.0 / (phi * phi + 1.0).sqrt();

    let raw: [(f64, f64, f64); 12] = [
        (0.0, 1.0, phi),
        (0.0, -1.0, phi),
        (0.0, 1.0, -phi),
        (0.0, -1.0, -phi),
        (1.0, phi, 0.0),
        (-1.0, phi, 0.0),
        (1.0, -phi, 0.0),
        (-1.0, -phi, 0.0),
        (phi, 0.0, 1.0),
        (-phi, 0.0, 1.0),
        (phi, 0.0, -1.0),
        (-phi, 0.0, -1.0),
    ];
    let positions: Vec<Vector> = raw
        .iter()
        .map(|&(x, y, z)| Vector::new(x * scale, y * scale, z * scale, 1.0))
        .collect();

    let triangles: Vec<[u32; 3]> = vec![
        [0, 1, 8],
        [0, 8, 4],
        [0, 4, 5],
        [0, 5, 9],
        [0, 9, 1],
        [1, 6, 8],
        [8, 6, 10],
        [8, 10, 4],
        [4, 10, 2],
        [4, 2, 5],
        [5, 2, 11],
        [5, 11, 9],
        [9, 11, 7],
        [9, 7, 1],
        [1, 7, 6],
        [3, 2, 10],
        [3, 10, 6],
        [3, 6, 7],
        [3, 7, 11],
        [3, 11, 2],
    ];

    (positions, triangles)
}
