//! Finalization: curvature recording, vertex/face-center normalization, wall
//! metrics, vertex figures, face coloring, and outradius.

use super::seed::DirichletBuilder;
use super::types::{HalfEdgeId, Polyhedron, VertexId};
use super::DirichletError;
use crate::linalg::{intrinsic_distance, origin, vector_normalize, Curvature, Vector};

/// Geodesic step used to place each vertex-figure's "outer point", in radians
/// for the spherical model (reused as-is for flat/hyperbolic).
const VERTEX_FIGURE_STEP: f64 = 0.1;
/// Convex-combination weight of the vertex-figure face center in the "inner
/// point" (`0.7` toward the center, `0.3` toward the outer point).
const INNER_POINT_WEIGHT: f64 = 0.7;

impl DirichletBuilder {
    /// Consume the builder, computing every derived quantity that only makes
    /// sense once all half-space intersections are done.
    pub fn finalize(mut self) -> Result<Polyhedron, DirichletError> {
        let curvature = self.polyhedron.curvature;

        for v in &mut self.polyhedron.vertices {
            v.sphere = v.raw.normalize();
            v.normalized = vector_normalize(v.raw, curvature)?;
        }

        for face in &mut self.polyhedron.faces {
            let image = face.matrix.apply(origin());
            let mid = (origin() + image) * 0.5;
            face.center_raw = mid.normalize();
            face.center = vector_normalize(mid, curvature).unwrap_or(mid);
        }

        self.compute_wall_metrics();
        self.compute_vertex_figures();
        self.assign_face_colors();

        let outradius = self
            .polyhedron
            .vertices
            .iter()
            .map(|v| intrinsic_distance(v.normalized, curvature))
            .fold(0.0_f64, f64::max);
        self.polyhedron.outradius = outradius;

        Ok(self.polyhedron)
    }

    /// Per-wall base/altitude of the face-center-to-edge triangle, via
    /// Heron's formula, globally rescaled so the longest base equals 1.
    fn compute_wall_metrics(&mut self) {
        let half_edge_count = self.polyhedron.half_edges.len();
        let mut longest_base = 0.0_f64;
        for i in 0..half_edge_count {
            if self.polyhedron.half_edges[i].deleted {
                continue;
            }
            let he_id = HalfEdgeId(i as u32);
            let face_id = self.polyhedron.half_edge(he_id).face;
            let tail_id = self.polyhedron.tail(he_id);
            let tip_id = self.polyhedron.half_edge(he_id).tip;

            let center = self.polyhedron.face(face_id).center_raw;
            let a = self.polyhedron.vertex(tail_id).sphere;
            let b = self.polyhedron.vertex(tip_id).sphere;

            let base = (b - a).norm();
            let side1 = (center - a).norm();
            let side2 = (center - b).norm();
            let s = 0.5 * (base + side1 + side2);
            let area_sq = (s * (s - base) * (s - side1) * (s - side2)).max(0.0);
            let area = area_sq.sqrt();
            let altitude = if base > 1e-12 { 2.0 * area / base } else { 0.0 };

            self.polyhedron.half_edges[i].base = base;
            self.polyhedron.half_edges[i].altitude = altitude;
            longest_base = longest_base.max(base);
        }
        if longest_base > 1e-12 {
            for he in &mut self.polyhedron.half_edges {
                he.base /= longest_base;
                he.altitude /= longest_base;
            }
        }
    }

    /// Vertex-figure outer/inner points along every live outbound half-edge.
    fn compute_vertex_figures(&mut self) {
        let curvature = self.polyhedron.curvature;
        let half_edge_count = self.polyhedron.half_edges.len();
        for i in 0..half_edge_count {
            if self.polyhedron.half_edges[i].deleted {
                continue;
            }
            let he_id = HalfEdgeId(i as u32);
            let tail_id = self.polyhedron.tail(he_id);
            let tip_id = self.polyhedron.half_edge(he_id).tip;
            let from = self.polyhedron.vertex(tail_id).normalized;
            let to = self.polyhedron.vertex(tip_id).normalized;
            let outer = step_towards(from, to, VERTEX_FIGURE_STEP, curvature);
            self.polyhedron.half_edges[i].outer_point = outer;
        }

        let vertex_count = self.polyhedron.vertices.len();
        for v in 0..vertex_count {
            let star = self.vertex_star(VertexId(v as u32));
            if star.is_empty() {
                continue;
            }
            let mut sum = Vector::zeros();
            for &he in &star {
                sum += self.polyhedron.half_edge(he).outer_point;
            }
            let center = vector_normalize(sum, curvature).unwrap_or_else(|_| sum.normalize());
            for &he in &star {
                let outer = self.polyhedron.half_edge(he).outer_point;
                let combo = outer * (1.0 - INNER_POINT_WEIGHT) + center * INNER_POINT_WEIGHT;
                let inner = vector_normalize(combo, curvature).unwrap_or(combo);
                self.polyhedron.half_edge_mut(he).inner_point = inner;
            }
        }
    }

    /// Outbound half-edges around a vertex, via the standard `mate . cycle`
    /// vertex-star walk.
    fn vertex_star(&self, v: VertexId) -> Vec<HalfEdgeId> {
        let start = self.polyhedron.vertex(v).outbound;
        let mut result = vec![start];
        let mut cur = self.polyhedron.half_edge(self.polyhedron.half_edge(start).mate).cycle;
        let mut guard = 0;
        while cur != start {
            result.push(cur);
            cur = self.polyhedron.half_edge(self.polyhedron.half_edge(cur).mate).cycle;
            guard += 1;
            if guard > self.polyhedron.half_edges.len() {
                break; // malformed star; avoid an infinite loop rather than panic
            }
        }
        result
    }

    /// Partner-aware face coloring: partners (geometric-inverse matrix pairs)
    /// share a color index; hue is uniform on `[0, 1)`, fixed saturation/lightness.
    fn assign_face_colors(&mut self) {
        let curvature = self.polyhedron.curvature;
        let eps = self.tol.matrix_eps;
        let face_count = self.polyhedron.faces.len();
        let mut color_index = vec![usize::MAX; face_count];
        let mut next_index = 0usize;

        for i in 0..face_count {
            if self.polyhedron.faces[i].deleted || color_index[i] != usize::MAX {
                continue;
            }
            let inverse = self.polyhedron.faces[i].matrix.geometric_inverse(curvature);
            let mut partner = None;
            for j in 0..face_count {
                if j == i || self.polyhedron.faces[j].deleted {
                    continue;
                }
                if self.polyhedron.faces[j].matrix.equality_within(&inverse, eps) {
                    partner = Some(j);
                    break;
                }
            }
            color_index[i] = next_index;
            if let Some(j) = partner {
                color_index[j] = next_index;
            }
            next_index += 1;
        }

        let count = next_index.max(1);
        for i in 0..face_count {
            if self.polyhedron.faces[i].deleted {
                continue;
            }
            let idx = if color_index[i] == usize::MAX { 0 } else { color_index[i] };
            let hue = (idx as f64 / count as f64).fract();
            self.polyhedron.faces[i].color_index = idx;
            self.polyhedron.faces[i].color = hsl_to_rgba(hue, 0.3, 0.5);
            self.polyhedron.faces[i].grey = ((idx as f64 / count as f64) + 4.0) as f32 / 5.0;
        }
    }
}

/// One geodesic-ish step from `from` toward `to`, renormalized to the
/// curvature. A small-angle approximation: good enough for the short hop
/// used to place vertex-figure points.
fn step_towards(from: Vector, to: Vector, t: f64, curvature: Curvature) -> Vector {
    let dot = from.dot(&to);
    let tangent = to - from * dot;
    let tangent = vector_normalize(tangent, Curvature::Spherical).unwrap_or(tangent);
    let stepped = from * t.cos() + tangent * t.sin();
    vector_normalize(stepped, curvature).unwrap_or(stepped)
}

/// HSL to RGBA at full alpha, h/s/l all in `[0, 1]`.
fn hsl_to_rgba(h: f64, s: f64, l: f64) -> [f32; 4] {
    if s <= 0.0 {
        return [l as f32, l as f32, l as f32, 1.0];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);
    [r as f32, g as f32, b as f32, 1.0]
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
