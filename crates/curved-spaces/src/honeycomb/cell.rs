//! One honeycomb tile.

use crate::linalg::{Matrix, Parity, Vector};

#[derive(Clone, Copy, Debug)]
pub struct Cell {
    /// Isometry taking the home tile to this one.
    pub matrix: Matrix,
    /// `matrix . origin`, cached at build time.
    pub position: Vector,
    pub parity: Parity,
    /// Intrinsic distance from the viewer to `position`; a placeholder at
    /// build time (0), recomputed every `cull_and_sort` call.
    pub distance: f64,
}
