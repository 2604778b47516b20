//! Shared helpers for turning a group element into a bisector half-space.
//!
//! This is the only place outside `linalg` where curvature changes the
//! arithmetic.

use crate::linalg::{origin, Curvature, Matrix, Vector};

/// Perpendicular-bisector half-space coefficients (a, b, c, d) of `g`, such
/// that the interior of the Dirichlet cell satisfies `⟨v, n⟩ <= 0`.
pub fn face_normal(g: &Matrix, curvature: Curvature) -> Vector {
    let image = g.apply(origin());
    let diff = image - origin();
    match curvature {
        Curvature::Spherical => diff,
        Curvature::Flat => {
            let sq = diff.x * diff.x + diff.y * diff.y + diff.z * diff.z;
            Vector::new(diff.x, diff.y, diff.z, -0.5 * sq)
        }
        Curvature::Hyperbolic => Vector::new(diff.x, diff.y, diff.z, -diff.w),
        Curvature::None => diff,
    }
}

/// Raw (non-curvature-weighted) evaluation of a half-space's linear form at `p`.
#[inline]
pub fn halfspace_value(plane: &Vector, p: &Vector) -> f64 {
    plane.dot(p)
}
