//! Intrinsic distance of a group element's image of the origin, per curvature.
//!
//! Computed from `M[3][3]` directly (not from the transformed origin vector)
//! for numerical robustness, with clamped arguments so boundary values never
//! feed a NaN into `acos`/`acosh`.

use super::GroupError;
use crate::linalg::{Curvature, Matrix};

/// Intrinsic distance from the origin to `g · origin`.
pub fn distance_from_origin(g: &Matrix, curvature: Curvature) -> Result<f64, GroupError> {
    let m33 = g.entry(3, 3);
    match curvature {
        Curvature::Spherical => Ok(m33.clamp(-1.0, 1.0).acos()),
        Curvature::Flat => {
            let dx = g.entry(3, 0);
            let dy = g.entry(3, 1);
            let dz = g.entry(3, 2);
            Ok((dx * dx + dy * dy + dz * dz).sqrt())
        }
        Curvature::Hyperbolic => Ok(m33.max(1.0).acosh()),
        Curvature::None => Err(GroupError::InconsistentCurvature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_zero_distance() {
        for c in [Curvature::Spherical, Curvature::Flat, Curvature::Hyperbolic] {
            let d = distance_from_origin(&Matrix::identity(), c).unwrap();
            assert!(d.abs() < 1e-12, "curvature {:?} gave {}", c, d);
        }
    }

    #[test]
    fn flat_translation_distance_is_euclidean_norm() {
        let m = Matrix::translation(Curvature::Flat, 3.0, 4.0, 0.0);
        let d = distance_from_origin(&m, Curvature::Flat).unwrap();
        assert!((d - 5.0).abs() < 1e-12);
    }
}
