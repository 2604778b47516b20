//! Initial "banana" or "lens" seed for the Dirichlet engine.

use std::collections::HashSet;
use std::f64::consts::PI;

use super::halfspace::face_normal;
use super::types::{Face, FaceId, HalfEdge, HalfEdgeId, Polyhedron, Vertex, VertexClass, VertexId};
use super::DirichletError;
use crate::linalg::{ternary_cross, Curvature, Matrix, Tolerances, Vector};

/// Owns the in-progress polyhedron across `seed` / `intersect` / `finalize`
/// so tests can inspect intermediate invariants.
pub struct DirichletBuilder {
    pub(crate) polyhedron: Polyhedron,
    pub(crate) tol: Tolerances,
    /// Indices into the originating group slice already folded into the seed;
    /// `Polyhedron::from_group` skips these in its main intersection loop.
    pub(crate) consumed: HashSet<usize>,
}

impl DirichletBuilder {
    /// Seed from a holonomy group whose element 0 is the identity.
    pub fn seed(group: &[Matrix], curvature: Curvature, tol: Tolerances) -> Result<Self, DirichletError> {
        if group.len() < 3 {
            return Err(DirichletError::ChimneyUnsupported);
        }
        let n1 = face_normal(&group[1], curvature);
        let n2 = face_normal(&group[2], curvature);

        let mut banana_index = None;
        for (j, g) in group.iter().enumerate().skip(3) {
            let nj = face_normal(g, curvature);
            let axis = ternary_cross(n1, n2, nj);
            if axis.norm_squared() >= tol.plane_eps {
                banana_index = Some(j);
                break;
            }
        }

        let mut consumed = HashSet::new();
        consumed.insert(0);
        consumed.insert(1);
        consumed.insert(2);

        let mut builder = if let Some(idx) = banana_index {
            consumed.insert(idx);
            let nj = face_normal(&group[idx], curvature);
            let axis = ternary_cross(n1, n2, nj);
            let polyhedron = build_banana(
                &axis,
                [n1, n2, nj],
                [group[1], group[2], group[idx]],
                curvature,
            );
            let mut builder = DirichletBuilder { polyhedron, tol, consumed };

            // Intersect forward until a fourth hyperplane-independent element
            // bounds the axis, or the group is exhausted (`ChimneyUnsupported`).
            let mut bounded = false;
            for (i, g) in group.iter().enumerate().skip(idx + 1) {
                builder.intersect(g)?;
                builder.consumed.insert(i);
                if builder.polyhedron.vertices.len() > 2 {
                    bounded = true;
                    break;
                }
            }
            if !bounded {
                return Err(DirichletError::ChimneyUnsupported);
            }
            builder
        } else {
            let order = lens_order(&group[1], curvature, &tol)?;
            let polyhedron = build_lens(order, [n1, n2], [group[1], group[2]], curvature);
            DirichletBuilder { polyhedron, tol, consumed }
        };

        builder.polyhedron.curvature = curvature;
        Ok(builder)
    }
}

/// Deduce the lens face count from `g1`'s rotation.
fn lens_order(g1: &Matrix, curvature: Curvature, tol: &Tolerances) -> Result<usize, DirichletError> {
    match curvature {
        Curvature::Hyperbolic => Err(DirichletError::HyperbolicSlabUnsupported),
        Curvature::Flat | Curvature::None => Ok(4),
        Curvature::Spherical => {
            let czz = g1.entry(2, 2);
            let czw = g1.entry(2, 3);
            let angle = czw.atan2(czz);
            if angle.abs() < tol.file_format_eps {
                return Err(DirichletError::LensOrderIndeterminate);
            }
            let n = 2.0 * PI / angle.abs();
            let rounded = n.round();
            if (n - rounded).abs() > tol.file_format_eps * n.max(1.0) {
                return Err(DirichletError::LensOrderIndeterminate);
            }
            if rounded < 3.0 {
                return Err(DirichletError::LensOrderTooSmall);
            }
            Ok(rounded as usize)
        }
    }
}

/// Bigonal "lune" seed: two antipodal vertices on the axis `N`, three faces
/// meeting along it. Vertex 0 sits near `-N` so every face cycle runs
/// clockwise as seen from outside, per the chosen sign convention.
fn build_banana(
    axis: &Vector,
    planes: [Vector; 3],
    matrices: [Matrix; 3],
    curvature: Curvature,
) -> Polyhedron {
    let v0_raw = -*axis;
    let v1_raw = *axis;

    let mut vertices = vec![
        Vertex {
            raw: v0_raw,
            normalized: v0_raw,
            sphere: v0_raw,
            outbound: HalfEdgeId(0),
            class: VertexClass::Inside,
        },
        Vertex {
            raw: v1_raw,
            normalized: v1_raw,
            sphere: v1_raw,
            outbound: HalfEdgeId(1),
            class: VertexClass::Inside,
        },
    ];

    let mut half_edges = Vec::with_capacity(6);
    let mut faces = Vec::with_capacity(3);
    for k in 0..3 {
        let up_id = HalfEdgeId((2 * k) as u32);
        let down_id = HalfEdgeId((2 * k + 1) as u32);
        half_edges.push(HalfEdge {
            tip: VertexId(1),
            mate: HalfEdgeId(0), // patched below
            cycle: down_id,
            face: FaceId(k as u32),
            ..HalfEdge::default()
        });
        half_edges.push(HalfEdge {
            tip: VertexId(0),
            mate: HalfEdgeId(0), // patched below
            cycle: up_id,
            face: FaceId(k as u32),
            ..HalfEdge::default()
        });
        faces.push(Face {
            half_edge: up_id,
            plane: planes[k],
            matrix: matrices[k],
            color_index: 0,
            color: [0.0; 4],
            grey: 0.0,
            center_raw: Vector::zeros(),
            center: Vector::zeros(),
            deleted: false,
        });
    }
    for k in 0..3 {
        let up_k = 2 * k;
        let down_next = 2 * ((k + 1) % 3) + 1;
        half_edges[up_k].mate = HalfEdgeId(down_next as u32);
        half_edges[down_next].mate = HalfEdgeId(up_k as u32);
    }

    vertices[0].outbound = HalfEdgeId(0);
    vertices[1].outbound = HalfEdgeId(1);

    Polyhedron {
        vertices,
        half_edges,
        faces,
        curvature,
        outradius: 0.0,
    }
}

/// `n`-gon "lens": two faces (front/back) each cycling through `n` equatorial
/// vertices in opposite directions, meeting along the equator.
fn build_lens(n: usize, planes: [Vector; 2], matrices: [Matrix; 2], curvature: Curvature) -> Polyhedron {
    let mut vertices = Vec::with_capacity(n);
    for k in 0..n {
        let theta = 2.0 * PI * (k as f64) / (n as f64);
        let raw = Vector::new(theta.cos(), theta.sin(), 0.0, 1.0);
        vertices.push(Vertex {
            raw,
            normalized: raw,
            sphere: raw,
            outbound: HalfEdgeId(k as u32),
            class: VertexClass::Inside,
        });
    }

    let mut half_edges = Vec::with_capacity(2 * n);
    for k in 0..n {
        half_edges.push(HalfEdge {
            tip: VertexId(((k + 1) % n) as u32),
            mate: HalfEdgeId(0), // patched below
            cycle: HalfEdgeId(((k + 1) % n) as u32),
            face: FaceId(0),
            ..HalfEdge::default()
        });
    }
    for k in 0..n {
        half_edges.push(HalfEdge {
            tip: VertexId(k as u32),
            mate: HalfEdgeId(0), // patched below
            cycle: HalfEdgeId((n + (k + n - 1) % n) as u32),
            face: FaceId(1),
            ..HalfEdge::default()
        });
    }
    for k in 0..n {
        let front = k;
        let back = n + (k + 1) % n;
        half_edges[front].mate = HalfEdgeId(back as u32);
        half_edges[back].mate = HalfEdgeId(front as u32);
    }

    let faces = vec![
        Face {
            half_edge: HalfEdgeId(0),
            plane: planes[0],
            matrix: matrices[0],
            color_index: 0,
            color: [0.0; 4],
            grey: 0.0,
            center_raw: Vector::zeros(),
            center: Vector::zeros(),
            deleted: false,
        },
        Face {
            half_edge: HalfEdgeId(n as u32),
            plane: planes[1],
            matrix: matrices[1],
            color_index: 1,
            color: [0.0; 4],
            grey: 0.0,
            center_raw: Vector::zeros(),
            center: Vector::zeros(),
            deleted: false,
        },
    ];

    Polyhedron {
        vertices,
        half_edges,
        faces,
        curvature,
        outradius: 0.0,
    }
}
