//! Small fixed-topology decorative meshes: gyroscope, cube, observer marker.

use super::{Mesh, MeshVertex};
use crate::linalg::Vector;

const CUBE_CORNERS: [(f64, f64, f64); 8] = [
    (-0.5, -0.5, -0.5),
    (0.5, -0.5, -0.5),
    (0.5, 0.5, -0.5),
    (-0.5, 0.5, -0.5),
    (-0.5, -0.5, 0.5),
    (0.5, -0.5, 0.5),
    (0.5, 0.5, 0.5),
    (-0.5, 0.5, 0.5),
];

const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // back
    [5, 4, 7, 6], // front
    [4, 0, 3, 7], // left
    [1, 5, 6, 2], // right
    [3, 2, 6, 7], // top
    [4, 5, 1, 0], // bottom
];

/// A unit cube centered at the origin, used both standalone and as the
/// gyroscope's inner solid.
pub fn cube_mesh(color: [f32; 4]) -> Mesh {
    let positions: Vec<Vector> = CUBE_CORNERS.iter().map(|&(x, y, z)| Vector::new(x, y, z, 1.0)).collect();
    let mut mesh = Mesh::new();
    for face in CUBE_FACES {
        let v = |i: usize, uv: [f32; 2]| MeshVertex {
            position: positions[face[i]],
            texcoord: [uv[0], uv[1], 0.0],
            color,
        };
        mesh.push_triangle(
            v(0, [0.0, 0.0]),
            v(1, [1.0, 0.0]),
            v(2, [1.0, 1.0]),
        );
        mesh.push_triangle(
            v(0, [0.0, 0.0]),
            v(2, [1.0, 1.0]),
            v(3, [0.0, 1.0]),
        );
    }
    mesh
}

/// Three orthogonal rings (thin N-gon bands) around the unit sphere, the
/// shape of a navigational gyroscope.
pub fn gyroscope_mesh(segments: usize, color: [f32; 4]) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.extend(ring(Axis::Z, segments, color));
    mesh.extend(ring(Axis::X, segments, color));
    mesh.extend(ring(Axis::Y, segments, color));
    mesh
}

/// A small forward-facing cone, marking where the user is looking.
pub fn observer_mesh(segments: usize, color: [f32; 4]) -> Mesh {
    let apex = Vector::new(0.0, 0.0, 1.0, 1.0);
    let base_center = Vector::new(0.0, 0.0, 0.0, 1.0);
    let radius = 0.3;

    let mut mesh = Mesh::new();
    let mut rim = Vec::with_capacity(segments);
    for i in 0..segments {
        let theta = std::f64::consts::TAU * i as f64 / segments as f64;
        rim.push(Vector::new(radius * theta.cos(), radius * theta.sin(), 0.0, 1.0));
    }

    let mv = |p: Vector| MeshVertex {
        position: p,
        texcoord: [0.5, 0.5, 0.0],
        color,
    };

    for i in 0..segments {
        let a = rim[i];
        let b = rim[(i + 1) % segments];
        mesh.push_triangle(mv(apex), mv(a), mv(b));
        mesh.push_triangle(mv(base_center), mv(b), mv(a));
    }
    mesh
}

enum Axis {
    X,
    Y,
    Z,
}

/// A thin rectangular band of `segments` quads, lying in the plane
/// perpendicular to `axis`, at unit radius.
fn ring(axis: Axis, segments: usize, color: [f32; 4]) -> Mesh {
    let half_width = 0.03;
    let radius = 0.9;
    let mut mesh = Mesh::new();

    let place = |theta: f64, offset: f64| -> Vector {
        let (c, s) = (theta.cos(), theta.sin());
        match axis {
            Axis::Z => Vector::new(radius * c, radius * s, offset, 1.0),
            Axis::X => Vector::new(offset, radius * c, radius * s, 1.0),
            Axis::Y => Vector::new(radius * s, offset, radius * c, 1.0),
        }
    };

    for i in 0..segments {
        let t0 = std::f64::consts::TAU * i as f64 / segments as f64;
        let t1 = std::f64::consts::TAU * (i + 1) as f64 / segments as f64;

        let a0 = place(t0, -half_width);
        let a1 = place(t0, half_width);
        let b0 = place(t1, -half_width);
        let b1 = place(t1, half_width);

        let mv = |p: Vector, uv: [f32; 2]| MeshVertex {
            position: p,
            texcoord: [uv[0], uv[1], 0.0],
            color,
        };

        mesh.push_triangle(mv(a0, [0.0, 0.0]), mv(b0, [1.0, 0.0]), mv(b1, [1.0, 1.0]));
        mesh.push_triangle(mv(a0, [0.0, 0.0]), mv(b1, [1.0, 1.0]), mv(a1, [0.0, 1.0]));
    }

    mesh
}
