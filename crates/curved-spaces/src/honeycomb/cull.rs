//! Per-frame cull and sort.

use super::Honeycomb;
use crate::linalg::{intrinsic_distance, Curvature, Matrix, Parity};
use crate::projection::frustum_side_normals;

/// `r_D` scaled into the same units as the curvature's native radial measure
/// (`sinh` hyperbolic, identity flat, `sin` spherical), used for the cheap
/// sign test and the bounding-sphere check.
fn curvature_weighted_radius(r: f64, curvature: Curvature) -> f64 {
    match curvature {
        Curvature::Hyperbolic => r.sinh(),
        Curvature::Flat | Curvature::None => r,
        Curvature::Spherical => r.sin(),
    }
}

impl Honeycomb {
    /// Recompute distances, cull to the view frustum (spherical manifolds
    /// accept every cell unconditionally), sort the survivors by ascending
    /// distance, and tally plain-vs-reflected parity against `view_parity`.
    pub fn cull_and_sort(
        &mut self,
        view: &Matrix,
        image_width: f64,
        image_height: f64,
        horizon_radius: f64,
        dirichlet_outradius: f64,
        view_parity: Parity,
    ) {
        let curvature = self.curvature;
        let normals = frustum_side_normals(image_width, image_height);
        let r_tilde = curvature_weighted_radius(dirichlet_outradius, curvature);
        let horizon_plus_domain = horizon_radius + dirichlet_outradius;

        self.visible.clear();
        self.plain_count = 0;
        self.reflected_count = 0;

        for (idx, cell) in self.cells.iter_mut().enumerate() {
            let p = view.apply(cell.position);
            cell.distance = intrinsic_distance(p, curvature);

            let accepted = if curvature == Curvature::Spherical {
                true
            } else {
                p.z > -r_tilde
                    && cell.distance < horizon_plus_domain
                    && normals.iter().all(|n| n.dot(&p) >= -r_tilde)
            };

            if !accepted {
                continue;
            }
            self.visible.push(idx);
            if cell.parity == view_parity {
                self.plain_count += 1;
            } else {
                self.reflected_count += 1;
            }
        }

        let cells = &self.cells;
        self.visible.sort_by(|&a, &b| {
            cells[a]
                .distance
                .partial_cmp(&cells[b].distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}
