//! Inverted-tile buffer for odd-order spherical manifolds.

use super::Honeycomb;
use crate::linalg::{Matrix, Parity};

#[derive(Clone, Copy, Debug)]
pub struct InvertedTile {
    pub matrix: Matrix,
    pub parity: Parity,
}

impl Honeycomb {
    /// Pair every cell's matrix with `antipodal`, producing exactly
    /// `|G|` entries. Meaningful only for odd-order spherical groups; building
    /// it unconditionally keeps `Honeycomb` free of manifold-specific branches.
    pub fn build_inverted_tiles(&self, antipodal: Matrix) -> Vec<InvertedTile> {
        self.cells
            .iter()
            .map(|cell| InvertedTile {
                matrix: cell.matrix.product(&antipodal),
                parity: cell.parity.compose(antipodal.parity()),
            })
            .collect()
    }
}
