//! Centralized numeric tolerances.
//!
//! One `Copy` config struct gathers every epsilon so call sites never
//! hard-code a tolerance literal inline; tests that need to probe a boundary
//! construct a custom `Tolerances` instead.

/// Numeric tolerances used throughout the crate.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    /// Matrix-equality epsilon (per-entry max-abs), used by group dedup and
    /// `Matrix::equality_within`.
    pub matrix_eps: f64,
    /// Vertex half-space classification epsilon.
    pub vertex_eps: f64,
    /// Minimum squared ternary cross product for "independent" hyperplane normals
    /// in the banana seed (ε_plane).
    pub plane_eps: f64,
    /// Return-to-cell restoring threshold. Strictly greater than `vertex_eps` so a
    /// flight path tangent to a face does not oscillate.
    pub restoring_eps: f64,
    /// Tolerance used by curvature/lens-order detection when parsing generator files.
    pub file_format_eps: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            matrix_eps: 1e-6,
            vertex_eps: 1e-6,
            plane_eps: 1e-4,
            restoring_eps: 1e-5,
            file_format_eps: 1e-6,
        }
    }
}
