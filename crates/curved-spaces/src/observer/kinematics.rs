//! Per-frame forward motion.

use super::{Observer, MAX_DT};
use crate::dirichlet::{stay_in_dirichlet_domain, Polyhedron};
use crate::linalg::{fast_gram_schmidt, Curvature, Matrix, Tolerances};

impl Observer {
    /// Advance by `dt` seconds (clamped to `MAX_DT`): build the incremental
    /// forward-motion matrix, post-multiply it onto the placement on the
    /// left (the scenery lags behind the observer), pull back into the
    /// Dirichlet domain if one is loaded, and re-orthogonalize.
    pub fn advance(&mut self, dt: f64, domain: Option<&Polyhedron>, curvature: Curvature, tol: &Tolerances) {
        let dt = dt.min(MAX_DT);
        let d = self.speed * dt;
        // A pure single-axis translation reduces to exactly the z-w-plane
        // boost/rotation needed in every curvature (the x/y boosts in
        // `Matrix::translation` collapse to the identity when dx = dy = 0).
        let increment = Matrix::translation(curvature, 0.0, 0.0, d);
        self.placement = increment.product(&self.placement);

        if let Some(domain) = domain {
            stay_in_dirichlet_domain(domain, &mut self.placement, curvature, tol);
        }
        self.placement = fast_gram_schmidt(&self.placement, curvature);
    }
}
