//! Iterative half-space intersection.
//!
//! Classify / split-edges / split-faces / install-face / mark-and-sweep, run
//! once per non-identity group element. Every step keeps the half-edge
//! invariants intact: closed face cycles, `mate . mate = id`, one live
//! outbound half-edge per vertex.

use std::collections::HashMap;

use super::halfspace::{face_normal, halfspace_value};
use super::seed::DirichletBuilder;
use super::types::{FaceId, HalfEdge, HalfEdgeId, VertexClass, VertexId};
use super::DirichletError;
use crate::linalg::ternary_cross;

impl DirichletBuilder {
    /// Intersect the in-progress polyhedron with `H(g)`, the bisector
    /// half-space of group element `g`.
    pub fn intersect(&mut self, g: &crate::linalg::Matrix) -> Result<(), DirichletError> {
        let curvature = self.polyhedron.curvature;
        let plane = face_normal(g, curvature);
        let eps = self.tol.vertex_eps;

        let mut any_outside = false;
        let vertex_count = self.polyhedron.vertices.len();
        for i in 0..vertex_count {
            let raw = self.polyhedron.vertices[i].raw;
            let val = halfspace_value(&plane, &raw);
            self.polyhedron.vertices[i].class = if val > eps {
                any_outside = true;
                VertexClass::Outside
            } else if val < -eps {
                VertexClass::Inside
            } else {
                VertexClass::OnBoundary
            };
        }
        if !any_outside {
            return Ok(());
        }

        // Phase 2: split every Inside -> Outside edge, creating a boundary
        // vertex and fixing up both incident faces' cycles.
        let original_he_count = self.polyhedron.half_edges.len();
        for idx in 0..original_he_count {
            let he_id = HalfEdgeId(idx as u32);
            if self.polyhedron.half_edges[idx].deleted {
                continue;
            }
            let tail_id = self.polyhedron.tail(he_id);
            let tip_id = self.polyhedron.half_edges[idx].tip;
            let tail_class = self.polyhedron.vertices[tail_id.0 as usize].class;
            let tip_class = self.polyhedron.vertices[tip_id.0 as usize].class;
            if tail_class == VertexClass::Inside && tip_class == VertexClass::Outside {
                self.split_edge_at(he_id, &plane)?;
            }
        }

        // Phase 3/4: split crossed faces, collecting one "outer" cut segment
        // per affected face so the new face's cycle can be stitched together.
        let new_face_id = self.polyhedron.faces.len();
        self.polyhedron.faces.push(super::types::Face {
            half_edge: HalfEdgeId(0), // patched once the cycle is known
            plane,
            matrix: *g,
            color_index: 0,
            color: [0.0; 4],
            grey: 0.0,
            center_raw: crate::linalg::origin(),
            center: crate::linalg::origin(),
            deleted: false,
        });
        let new_face_id = FaceId(new_face_id as u32);

        let original_face_count = (new_face_id.0 as usize).min(self.polyhedron.faces.len());
        let mut cut_outs: Vec<HalfEdgeId> = Vec::new();
        for f in 0..original_face_count {
            if self.polyhedron.faces[f].deleted {
                continue;
            }
            if let Some(cut_out) = self.split_face_if_crossed(FaceId(f as u32), new_face_id)? {
                cut_outs.push(cut_out);
            }
        }

        if !cut_outs.is_empty() {
            self.stitch_new_face_cycle(&cut_outs, new_face_id);
        } else {
            // Nothing actually crossed this face's plane in a way that produced a
            // cut (can happen for the first couple of seed intersections); drop
            // the unused face slot rather than leave it half-built.
            self.polyhedron.faces[new_face_id.0 as usize].deleted = true;
        }

        self.mark_outside_for_deletion();
        self.sweep();

        #[cfg(debug_assertions)]
        if std::env::var_os("CURVED_SPACES_DEBUG_DIRICHLET").is_some() {
            eprintln!(
                "dirichlet: after intersect, V={} F={} chi={}",
                self.polyhedron.live_vertex_count(),
                self.polyhedron.live_face_count(),
                self.polyhedron.euler_characteristic(),
            );
        }

        if self.polyhedron.vertices.len() > 100_000 {
            return Err(DirichletError::OutOfMemory);
        }
        Ok(())
    }

    /// Split the edge `he` (tail Inside, tip Outside) at the new boundary
    /// vertex, fixing up both `he`'s face and `he`'s mate's face.
    fn split_edge_at(&mut self, he: HalfEdgeId, new_plane: &crate::linalg::Vector) -> Result<VertexId, DirichletError> {
        let mate = self.polyhedron.half_edge(he).mate;
        let old_tip = self.polyhedron.half_edge(he).tip;
        let he_face = self.polyhedron.half_edge(he).face;
        let mate_face = self.polyhedron.half_edge(mate).face;

        let n_he_face = self.polyhedron.face(he_face).plane;
        let n_mate_face = self.polyhedron.face(mate_face).plane;
        let mut new_raw = ternary_cross(n_he_face, n_mate_face, *new_plane);

        // Resolve the projective sign ambiguity: the new vertex should lie
        // roughly between the edge's two endpoints, not at their antipode.
        let tail = self.polyhedron.tail(he);
        let reference = self.polyhedron.vertex(tail).raw + self.polyhedron.vertex(old_tip).raw;
        if new_raw.dot(&reference) < 0.0 {
            new_raw = -new_raw;
        }
        let new_raw = crate::linalg::vector_normalize(new_raw, self.polyhedron.curvature)
            .unwrap_or(new_raw);

        let new_v_id = VertexId(self.polyhedron.vertices.len() as u32);
        self.polyhedron.vertices.push(super::types::Vertex {
            raw: new_raw,
            normalized: new_raw,
            sphere: new_raw,
            outbound: he,
            class: VertexClass::OnBoundary,
        });

        // Inner segment: `he` now runs tail -> new vertex.
        self.polyhedron.half_edge_mut(he).tip = new_v_id;

        // Outer segment continuing `he`'s face past the new vertex.
        let he_old_cycle = self.polyhedron.half_edge(he).cycle;
        let he_new = HalfEdgeId(self.polyhedron.half_edges.len() as u32);
        self.polyhedron.half_edges.push(HalfEdge {
            tip: old_tip,
            mate: HalfEdgeId(0), // patched below
            cycle: he_old_cycle,
            face: he_face,
            ..HalfEdge::default()
        });
        self.polyhedron.half_edge_mut(he).cycle = he_new;

        // Outer segment continuing the mate's face, inserted before `mate`.
        let prev_of_mate = self.predecessor_in_cycle(mate);
        let he_mate_new = HalfEdgeId(self.polyhedron.half_edges.len() as u32);
        self.polyhedron.half_edges.push(HalfEdge {
            tip: new_v_id,
            mate: he_new,
            cycle: mate,
            face: mate_face,
            ..HalfEdge::default()
        });
        self.polyhedron.half_edge_mut(he_new).mate = he_mate_new;
        self.polyhedron.half_edge_mut(prev_of_mate).cycle = he_mate_new;

        Ok(new_v_id)
    }

    /// Walk forward from `he` via `.cycle` until finding the half-edge whose
    /// successor is `he` (faces are small polygons; a linear scan is cheap).
    fn predecessor_in_cycle(&self, he: HalfEdgeId) -> HalfEdgeId {
        let mut cur = self.polyhedron.half_edge(he).cycle;
        loop {
            if self.polyhedron.half_edge(cur).cycle == he {
                return cur;
            }
            cur = self.polyhedron.half_edge(cur).cycle;
        }
    }

    /// If face `f`'s cycle has both a "going in" (about to cross outside) and
    /// a "going out" (returning from outside) boundary half-edge, cut it into
    /// a (kept) inner face and a contribution to the new face's boundary.
    ///
    /// Returns the half-edge that will become part of the new face's cycle.
    fn split_face_if_crossed(
        &mut self,
        f: FaceId,
        new_face: FaceId,
    ) -> Result<Option<HalfEdgeId>, DirichletError> {
        let start = self.polyhedron.face(f).half_edge;
        let mut going_in = None; // tip boundary, successor tip outside
        let mut going_out = None; // tip boundary, successor tip inside
        let mut cur = start;
        loop {
            let tip = self.polyhedron.half_edge(cur).tip;
            let next = self.polyhedron.half_edge(cur).cycle;
            let next_tip = self.polyhedron.half_edge(next).tip;
            if self.polyhedron.vertex(tip).class == VertexClass::OnBoundary {
                match self.polyhedron.vertex(next_tip).class {
                    VertexClass::Outside => going_in = Some(cur),
                    VertexClass::Inside => going_out = Some(cur),
                    VertexClass::OnBoundary => {}
                }
            }
            cur = next;
            if cur == start {
                break;
            }
        }

        let (going_in, going_out) = match (going_in, going_out) {
            (Some(a), Some(b)) => (a, b),
            _ => return Ok(None),
        };

        let v1 = self.polyhedron.half_edge(going_in).tip;
        let v2 = self.polyhedron.half_edge(going_out).tip;

        let old_in_cycle = self.polyhedron.half_edge(going_in).cycle;
        let old_out_cycle = self.polyhedron.half_edge(going_out).cycle;

        let cut_in = HalfEdgeId(self.polyhedron.half_edges.len() as u32);
        self.polyhedron.half_edges.push(HalfEdge {
            tip: v2,
            mate: HalfEdgeId(0), // patched below
            cycle: old_out_cycle,
            face: f,
            ..HalfEdge::default()
        });
        self.polyhedron.half_edge_mut(going_in).cycle = cut_in;

        let cut_out = HalfEdgeId(self.polyhedron.half_edges.len() as u32);
        self.polyhedron.half_edges.push(HalfEdge {
            tip: v1,
            mate: cut_in,
            cycle: old_in_cycle,
            face: new_face,
            ..HalfEdge::default()
        });
        self.polyhedron.half_edge_mut(cut_in).mate = cut_out;
        self.polyhedron.half_edge_mut(going_out).cycle = cut_out;

        self.polyhedron.face_mut(f).half_edge = going_in;

        Ok(Some(cut_out))
    }

    /// Chain the per-face "outer" cut half-edges into the new face's single
    /// closed cycle, matching consecutive segments by shared vertex.
    fn stitch_new_face_cycle(&mut self, cut_outs: &[HalfEdgeId], new_face: FaceId) {
        let mut by_tail: HashMap<VertexId, HalfEdgeId> = HashMap::with_capacity(cut_outs.len());
        for &id in cut_outs {
            let tail = self.polyhedron.tail(id);
            by_tail.insert(tail, id);
        }
        for &id in cut_outs {
            let tip = self.polyhedron.half_edge(id).tip;
            if let Some(&next) = by_tail.get(&tip) {
                self.polyhedron.half_edge_mut(id).cycle = next;
            }
        }
        self.polyhedron.face_mut(new_face).half_edge = cut_outs[0];
        for &id in cut_outs {
            self.polyhedron.vertex_mut(self.polyhedron.tail(id)).outbound = id;
        }
    }

    fn mark_outside_for_deletion(&mut self) {
        let he_count = self.polyhedron.half_edges.len();
        for i in 0..he_count {
            if self.polyhedron.half_edges[i].deleted {
                continue;
            }
            let tip = self.polyhedron.half_edges[i].tip;
            let tail = self.polyhedron.tail(HalfEdgeId(i as u32));
            if self.polyhedron.vertex(tip).class == VertexClass::Outside
                || self.polyhedron.vertex(tail).class == VertexClass::Outside
            {
                self.polyhedron.half_edges[i].deleted = true;
            }
        }
        for face in &mut self.polyhedron.faces {
            if face.deleted {
                continue;
            }
            let he = face.half_edge;
            if self.polyhedron.half_edges[he.0 as usize].deleted {
                face.deleted = true;
            }
        }
    }

    fn sweep(&mut self) {
        // Mates of deleted half-edges are unreachable (every remaining face's
        // cycle only ever points at live half-edges by construction above),
        // but an outbound pointer can still reference a deleted half-edge; walk
        // past it via `mate . cycle`.
        let vertex_count = self.polyhedron.vertices.len();
        for i in 0..vertex_count {
            let mut he = self.polyhedron.vertices[i].outbound;
            if !self.polyhedron.half_edges[he.0 as usize].deleted {
                continue;
            }
            let mut guard = 0;
            loop {
                let mate = self.polyhedron.half_edge(he).mate;
                he = self.polyhedron.half_edge(mate).cycle;
                guard += 1;
                if !self.polyhedron.half_edges[he.0 as usize].deleted || guard > self.polyhedron.half_edges.len() {
                    break;
                }
            }
            self.polyhedron.vertices[i].outbound = he;
        }

        // Compact: drop deleted half-edges/faces/vertices, remapping ids.
        let mut he_remap = vec![HalfEdgeId(0); self.polyhedron.half_edges.len()];
        let mut kept_half_edges = Vec::new();
        for (old, he) in self.polyhedron.half_edges.iter().enumerate() {
            if !he.deleted {
                he_remap[old] = HalfEdgeId(kept_half_edges.len() as u32);
                kept_half_edges.push(he.clone());
            }
        }

        let mut face_remap = vec![FaceId(0); self.polyhedron.faces.len()];
        let mut kept_faces = Vec::new();
        for (old, face) in self.polyhedron.faces.iter().enumerate() {
            if !face.deleted {
                face_remap[old] = FaceId(kept_faces.len() as u32);
                kept_faces.push(face.clone());
            }
        }

        let mut vertex_remap = vec![VertexId(0); self.polyhedron.vertices.len()];
        let mut kept_vertices = Vec::new();
        for (old, vertex) in self.polyhedron.vertices.iter().enumerate() {
            let outbound_live = !self.polyhedron.half_edges[vertex.outbound.0 as usize].deleted;
            if outbound_live {
                vertex_remap[old] = VertexId(kept_vertices.len() as u32);
                kept_vertices.push(vertex.clone());
            }
        }

        for he in &mut kept_half_edges {
            he.tip = vertex_remap[he.tip.0 as usize];
            he.mate = he_remap[he.mate.0 as usize];
            he.cycle = he_remap[he.cycle.0 as usize];
            he.face = face_remap[he.face.0 as usize];
        }
        for face in &mut kept_faces {
            face.half_edge = he_remap[face.half_edge.0 as usize];
        }
        for vertex in &mut kept_vertices {
            vertex.outbound = he_remap[vertex.outbound.0 as usize];
        }

        self.polyhedron.half_edges = kept_half_edges;
        self.polyhedron.faces = kept_faces;
        self.polyhedron.vertices = kept_vertices;
    }
}
