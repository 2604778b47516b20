//! `ModelData`: process-wide state for one window.

use super::CoreError;
use crate::dirichlet::Polyhedron;
use crate::holonomy::{build_group, distance_from_origin};
use crate::honeycomb::Honeycomb;
use crate::linalg::{Curvature, Matrix, Tolerances};
use crate::mesh::{self, Mesh};
use crate::observer::Observer;
use crate::parser::parse_generator_file;

/// Which small fixed-topology decoration is drawn at the scene's center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Centerpiece {
    None,
    Gyroscope,
    Cube,
    ObserverMarker,
}

/// Boolean display toggles a host can set.
#[derive(Clone, Copy, Debug)]
pub struct Flags {
    pub fog: bool,
    pub color_coding: bool,
    pub show_observer: bool,
    pub show_vertex_figures: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            fog: true,
            color_coding: true,
            show_observer: false,
            show_vertex_figures: false,
        }
    }
}

/// `(generation, aperture-bits)` a cached mesh was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
struct MeshCacheKey {
    generation: u64,
    aperture_bits: u64,
}

/// Process-wide state for one window: the active space, the observer, and
/// display configuration. Lifetime is the window's.
pub struct ModelData {
    pub curvature: Curvature,
    pub domain: Option<Polyhedron>,
    pub honeycomb: Option<Honeycomb>,
    pub observer: Observer,
    pub aperture: f64,
    pub centerpiece: Centerpiece,
    pub show_clifford_parallels: bool,
    pub centerpiece_rotation: f64,
    pub horizon_radius: f64,
    pub flags: Flags,
    /// Monotonic counter bumped on any state change the renderer should notice.
    pub change_counter: u64,
    /// Bumped only when the Dirichlet domain is replaced; keys the mesh cache.
    generation: u64,
    wall_cache: Option<(MeshCacheKey, Mesh)>,
    vertex_figure_cache: Option<(u64, Mesh)>,
}

impl Default for ModelData {
    fn default() -> Self {
        ModelData {
            curvature: Curvature::None,
            domain: None,
            honeycomb: None,
            observer: Observer::at_origin(),
            aperture: 1.0,
            centerpiece: Centerpiece::None,
            show_clifford_parallels: false,
            centerpiece_rotation: 0.0,
            horizon_radius: 0.0,
            flags: Flags::default(),
            change_counter: 0,
            generation: 0,
            wall_cache: None,
            vertex_figure_cache: None,
        }
    }
}

impl ModelData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to the clean "no space" state: curvature `None`, null
    /// domain/honeycomb, identity placement, zero speed.
    fn clear_space(&mut self) {
        self.curvature = Curvature::None;
        self.domain = None;
        self.honeycomb = None;
        self.observer = Observer::at_origin();
        self.wall_cache = None;
        self.vertex_figure_cache = None;
        self.generation = self.generation.wrapping_add(1);
        self.change_counter = self.change_counter.wrapping_add(1);
    }

    /// Parses and loads a generator file, replacing the current space.
    ///
    /// This is the one place that catches every `CoreError` variant and
    /// performs the "clean no-space state" reset; every lower-level
    /// constructor below simply propagates with `?`.
    pub fn load_generators(&mut self, raw: &[u8]) -> Result<(), CoreError> {
        let tol = Tolerances::default();
        match self.try_load_generators(raw, &tol) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.clear_space();
                Err(e)
            }
        }
    }

    fn try_load_generators(&mut self, raw: &[u8], tol: &Tolerances) -> Result<(), CoreError> {
        let list = parse_generator_file(raw, tol)?;

        let has_free_generator = list
            .matrices
            .iter()
            .any(|g| !g.is_identity(tol.matrix_eps) && !fixes_origin(g, list.curvature, tol));

        if !has_free_generator {
            // Only the identity (or only +-I): the 3-sphere / projective
            // 3-space special case (no domain, no error).
            self.clear_space();
            self.curvature = list.curvature;
            return Ok(());
        }

        let horizon_radius = default_horizon_radius(list.curvature, list.large_volume_hint);
        let provisional = build_group(&list.matrices, list.curvature, horizon_radius, tol)?;
        let provisional_domain = Polyhedron::from_group(&provisional, list.curvature, *tol)?;

        // Two-pass protocol: regrow to cover the horizon plus padding of
        // 2 * outradius, now that the domain's true size is known.
        let radius = horizon_radius + 2.0 * provisional_domain.outradius;
        let group = build_group(&list.matrices, list.curvature, radius, tol)?;
        let domain = Polyhedron::from_group(&group, list.curvature, *tol)?;
        let honeycomb = Honeycomb::build(&group, list.curvature);

        self.curvature = list.curvature;
        self.horizon_radius = horizon_radius;
        self.domain = Some(domain);
        self.honeycomb = Some(honeycomb);
        self.observer = Observer::at_origin();
        self.wall_cache = None;
        self.vertex_figure_cache = None;
        self.generation = self.generation.wrapping_add(1);
        self.change_counter = self.change_counter.wrapping_add(1);
        Ok(())
    }

    /// Pinch gesture: widens or narrows the wall
    /// window. Aperture lives on `ModelData`, not `Observer`, since it is a
    /// display setting rather than a kinematic quantity.
    pub fn pinch(&mut self, scale: f64) {
        self.aperture = (self.aperture + 0.5 * (scale - 1.0)).clamp(0.0, 1.0);
        self.change_counter = self.change_counter.wrapping_add(1);
    }

    /// Lazily rebuilds the wall mesh when `(generation, aperture)` changes
    /// from what the cached mesh was built from.
    pub fn wall_mesh(&mut self) -> Option<&Mesh> {
        let domain = self.domain.as_ref()?;
        let key = MeshCacheKey {
            generation: self.generation,
            aperture_bits: self.aperture.to_bits(),
        };
        let needs_rebuild = match &self.wall_cache {
            Some((cached_key, _)) => *cached_key != key,
            None => true,
        };
        if needs_rebuild {
            self.wall_cache = Some((key, mesh::wall_mesh(domain, self.aperture)));
        }
        self.wall_cache.as_ref().map(|(_, mesh)| mesh)
    }

    /// Lazily rebuilds the vertex-figure mesh when `generation` changes.
    pub fn vertex_figure_mesh(&mut self) -> Option<&Mesh> {
        let domain = self.domain.as_ref()?;
        let needs_rebuild = match &self.vertex_figure_cache {
            Some((cached_generation, _)) => *cached_generation != self.generation,
            None => true,
        };
        if needs_rebuild {
            self.vertex_figure_cache = Some((self.generation, mesh::vertex_figure_mesh(domain)));
        }
        self.vertex_figure_cache.as_ref().map(|(_, mesh)| mesh)
    }
}

/// Whether `g` fixes the origin (distance ~0 but not the identity), violating
/// the holonomy builder's free-action assumption.
fn fixes_origin(g: &Matrix, curvature: Curvature, tol: &Tolerances) -> bool {
    if g.is_identity(tol.matrix_eps) {
        return false;
    }
    matches!(distance_from_origin(g, curvature), Ok(d) if d <= tol.matrix_eps)
}

/// Horizon radius by curvature and space family:
/// 3.15 spherical, 11 flat, 3.0-7.0 hyperbolic depending on volume.
fn default_horizon_radius(curvature: Curvature, large_volume_hint: bool) -> f64 {
    match curvature {
        Curvature::Spherical => 3.15,
        Curvature::Flat | Curvature::None => 11.0,
        Curvature::Hyperbolic => {
            if large_volume_hint {
                7.0
            } else {
                3.0
            }
        }
    }
}
