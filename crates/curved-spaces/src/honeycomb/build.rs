//! `Honeycomb::build`.

use super::cell::Cell;
use super::Honeycomb;
use crate::linalg::{origin, Curvature, Matrix};

impl Honeycomb {
    /// Build one cell per group element. `group` is expected sorted by
    /// distance from the origin (as `holonomy::build_group` returns it), so
    /// the resulting cells already come out in radial order.
    pub fn build(group: &[Matrix], curvature: Curvature) -> Honeycomb {
        let cells = group
            .iter()
            .map(|g| Cell {
                matrix: *g,
                position: g.apply(origin()),
                parity: g.parity(),
                distance: 0.0,
            })
            .collect();
        Honeycomb {
            cells,
            curvature,
            visible: Vec::new(),
            plain_count: 0,
            reflected_count: 0,
        }
    }
}
