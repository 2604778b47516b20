//! Return-to-cell correction.

use super::halfspace::halfspace_value;
use super::types::Polyhedron;
use crate::linalg::{Curvature, Matrix, Tolerances};

/// Guardrail against non-terminating correction for a pathologically large
/// displacement; a single wall-crossing per frame needs only one iteration.
const MAX_CORRECTIONS: usize = 64;

/// Post-multiply `placement` by the geometric inverse of any face whose
/// half-space value at `placement . origin` exceeds the restoring tolerance,
/// re-checking every face after each correction until the placement is
/// inside every half-space (or the guardrail is hit).
pub fn stay_in_dirichlet_domain(
    polyhedron: &Polyhedron,
    placement: &mut Matrix,
    curvature: Curvature,
    tol: &Tolerances,
) {
    for _ in 0..MAX_CORRECTIONS {
        let origin_image = placement.apply(crate::linalg::origin());
        let mut corrected = false;
        for face in &polyhedron.faces {
            if face.deleted {
                continue;
            }
            let value = halfspace_value(&face.plane, &origin_image);
            if value > tol.restoring_eps {
                let correction = face.matrix.geometric_inverse(curvature);
                *placement = placement.product(&correction);
                corrected = true;
                break;
            }
        }
        if !corrected {
            return;
        }
    }
}
