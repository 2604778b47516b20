//! 4-vectors and the three curvature-dependent inner products.
//!
//! A bare `nalgebra::Vector4<f64>` already has the right shape (an ordered
//! (x, y, z, w) tuple), so it is used directly rather than wrapped; this
//! module only layers curvature-dispatched free functions on top.

use nalgebra::{Matrix3, Vector4};

use super::{Curvature, NonPositiveNorm};

/// A point or direction in the unified projective model.
pub type Vector = Vector4<f64>;

/// The model-space origin (0, 0, 0, 1), shared by all three curvatures.
#[inline]
pub fn origin() -> Vector {
    Vector::new(0.0, 0.0, 0.0, 1.0)
}

/// Curvature-appropriate inner product ⟨u, v⟩.
///
/// - Spherical: the ordinary Euclidean form on all four coordinates.
/// - Flat: the pure translational (xyz) form; the affine model projects to
///   `w = 1`, so `w` carries no metric information.
/// - Hyperbolic: the Minkowski form with signature (−, −, −, +).
#[inline]
pub fn inner_product(u: Vector, v: Vector, curvature: Curvature) -> f64 {
    match curvature {
        Curvature::Spherical => u.dot(&v),
        Curvature::Flat => u.x * v.x + u.y * v.y + u.z * v.z,
        Curvature::Hyperbolic => -u.x * v.x - u.y * v.y - u.z * v.z + u.w * v.w,
        Curvature::None => 0.0,
    }
}

/// ⟨v, v⟩ under the curvature's inner product.
#[inline]
pub fn norm_squared(v: Vector, curvature: Curvature) -> f64 {
    inner_product(v, v, curvature)
}

/// Normalize `v` to unit norm under the curvature's inner product.
///
/// Fails with [`NonPositiveNorm`] if `⟨v, v⟩` is non-positive (null or
/// imaginary-norm vector).
pub fn vector_normalize(v: Vector, curvature: Curvature) -> Result<Vector, NonPositiveNorm> {
    let n2 = norm_squared(v, curvature);
    if !(n2 > 0.0) || !n2.is_finite() {
        return Err(NonPositiveNorm);
    }
    let n = n2.sqrt();
    Ok(v / n)
}

/// Intrinsic (geodesic) distance from the origin to a normalized point,
/// shared by the Dirichlet, honeycomb, and projection modules.
#[inline]
pub fn intrinsic_distance(p: Vector, curvature: Curvature) -> f64 {
    match curvature {
        Curvature::Spherical => p.w.clamp(-1.0, 1.0).acos(),
        Curvature::Flat => (p.x * p.x + p.y * p.y + p.z * p.z).sqrt(),
        Curvature::Hyperbolic => p.w.max(1.0).acosh(),
        Curvature::None => 0.0,
    }
}

/// The ternary cross product: the unique (up to scale) 4-vector orthogonal to
/// `a`, `b`, `c` under the ordinary Euclidean form, computed as the signed
/// 3-minors of the 4×4 matrix with rows (e, a, b, c) expanded along `e`.
///
/// This is curvature-independent: it is a purely linear-algebraic operation
/// on raw coordinates, used both to build hyperplane normals and to locate
/// new vertices at a triple intersection of half-spaces.
pub fn ternary_cross(a: Vector, b: Vector, c: Vector) -> Vector {
    let minor = |skip: usize| -> f64 {
        let mut rows: [[f64; 3]; 3] = [[0.0; 3]; 3];
        for (row_idx, v) in [a, b, c].into_iter().enumerate() {
            let mut col = 0;
            for axis in 0..4 {
                if axis == skip {
                    continue;
                }
                rows[row_idx][col] = v[axis];
                col += 1;
            }
        }
        #[rustfmt::skip]
        let m = Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        );
        m.determinant()
    };
    // Cofactor expansion along the (virtual) first row (e0, e1, e2, e3):
    // alternating signs, skipping the column matching each basis vector.
    Vector::new(minor(0), -minor(1), minor(2), -minor(3))
}
