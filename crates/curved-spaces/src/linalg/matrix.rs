//! Isometry matrices: construction, geometric inverse, and re-orthogonalization.
//!
//! A small struct wrapping the `nalgebra` type with inherent methods, rather
//! than operating on a bare `Matrix4<f64>`, so parity is computed once at
//! construction and never silently goes stale.

use nalgebra::Matrix4;

use super::vector::Vector;
use super::{Curvature, Parity};

/// A 4×4 isometry matrix, rows acting on the right (`v' = v · M`), with its
/// parity cached at construction time.
#[derive(Clone, Copy, Debug)]
pub struct Matrix {
    pub entries: Matrix4<f64>,
    parity: Parity,
}

impl Matrix {
    /// Wrap raw entries, computing and caching parity from the determinant.
    #[inline]
    pub fn new(entries: Matrix4<f64>) -> Self {
        Self {
            entries,
            parity: Parity::from_determinant(entries.determinant()),
        }
    }

    #[inline]
    pub fn parity(&self) -> Parity {
        self.parity
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.entries.determinant()
    }

    /// Entry `M[row][col]`, row-major.
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.entries[(row, col)]
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Matrix4::identity())
    }

    /// Whether `self` equals the identity within `eps` per entry.
    #[inline]
    pub fn is_identity(&self, eps: f64) -> bool {
        self.equality_within(&Matrix::identity(), eps)
    }

    /// Row-major translation matrix for the given curvature and displacement.
    ///
    /// - Flat: ordinary affine translation, `w` row carries (dx, dy, dz, 1).
    /// - Spherical/Hyperbolic: first-order (small-angle / small-rapidity)
    ///   boost in each of the three coordinate 2-planes with `w`, composed in
    ///   x, y, z order; exact for a single-axis displacement and the
    ///   curvature-correct analogue of `rotation`'s Rodrigues composition.
    pub fn translation(curvature: Curvature, dx: f64, dy: f64, dz: f64) -> Self {
        match curvature {
            Curvature::Flat => {
                #[rustfmt::skip]
                let m = Matrix4::new(
                    1.0, 0.0, 0.0, 0.0,
                    0.0, 1.0, 0.0, 0.0,
                    0.0, 0.0, 1.0, 0.0,
                    dx,  dy,  dz,  1.0,
                );
                Self::new(m)
            }
            Curvature::Spherical => {
                let bx = axis_boost(0, dx, true);
                let by = axis_boost(1, dy, true);
                let bz = axis_boost(2, dz, true);
                Self::new(bx * by * bz)
            }
            Curvature::Hyperbolic => {
                let bx = axis_boost(0, dx, false);
                let by = axis_boost(1, dy, false);
                let bz = axis_boost(2, dz, false);
                Self::new(bx * by * bz)
            }
            Curvature::None => Self::identity(),
        }
    }

    /// Small-angle rotation composed about the x, y, z axes in that order
    /// (a first-order Rodrigues-style composition acting on the left), as
    /// used by mouse-drag / gesture updates.
    pub fn rotation(dtheta_x: f64, dtheta_y: f64, dtheta_z: f64) -> Self {
        let rx = plane_rotation(1, 2, dtheta_x);
        let ry = plane_rotation(2, 0, dtheta_y);
        let rz = plane_rotation(0, 1, dtheta_z);
        Self::new(rx * ry * rz)
    }

    /// Matrix product, `self` applied first (`v' = v · self · other`).
    #[inline]
    pub fn product(&self, other: &Matrix) -> Matrix {
        Self::new(self.entries * other.entries)
    }

    /// The metric-adjoint appropriate to `curvature`: for a well-formed
    /// isometry this equals the ordinary matrix inverse, but is computed
    /// directly from the metric signature rather than by general inversion,
    /// which is both cheaper and what restores numerical exactness after
    /// `fast_gram_schmidt` drift.
    pub fn geometric_inverse(&self, curvature: Curvature) -> Matrix {
        match curvature {
            Curvature::Spherical => Self::new(self.entries.transpose()),
            Curvature::Flat => {
                let m = self.entries;
                // Rotational 3x3 block transpose; negated, transformed translation row.
                let rot = m.fixed_view::<3, 3>(0, 0).into_owned();
                let rot_t = rot.transpose();
                let t = nalgebra::Vector3::new(m[(3, 0)], m[(3, 1)], m[(3, 2)]);
                let t_inv = -(rot_t * t);
                #[rustfmt::skip]
                let out = Matrix4::new(
                    rot_t[(0, 0)], rot_t[(0, 1)], rot_t[(0, 2)], 0.0,
                    rot_t[(1, 0)], rot_t[(1, 1)], rot_t[(1, 2)], 0.0,
                    rot_t[(2, 0)], rot_t[(2, 1)], rot_t[(2, 2)], 0.0,
                    t_inv.x,       t_inv.y,       t_inv.z,       1.0,
                );
                Self::new(out)
            }
            Curvature::Hyperbolic => {
                // Minkowski-adjoint: (i,j) entry is sign(i)*sign(j)*M[j,i],
                // signature (-,-,-,+).
                let sign = |k: usize| if k == 3 { 1.0 } else { -1.0 };
                let mut out = Matrix4::<f64>::zeros();
                for i in 0..4 {
                    for j in 0..4 {
                        out[(i, j)] = sign(i) * sign(j) * self.entries[(j, i)];
                    }
                }
                Self::new(out)
            }
            Curvature::None => Self::identity(),
        }
    }

    /// Equality within `eps` per entry.
    pub fn equality_within(&self, other: &Matrix, eps: f64) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if (self.entries[(i, j)] - other.entries[(i, j)]).abs() > eps {
                    return false;
                }
            }
        }
        true
    }

    /// `-I` on the spatial (xyz) block, identity on `w`: the antipodal map,
    /// used only in spherical geometry.
    pub fn antipodal_map() -> Matrix {
        #[rustfmt::skip]
        let m = Matrix4::new(
            -1.0,  0.0,  0.0, 0.0,
             0.0, -1.0,  0.0, 0.0,
             0.0,  0.0, -1.0, 0.0,
             0.0,  0.0,  0.0, 1.0,
        );
        Self::new(m)
    }

    /// Apply to a row vector: `v · M`.
    #[inline]
    pub fn apply(&self, v: Vector) -> Vector {
        self.entries.transpose() * v
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        self.product(&rhs)
    }
}

/// First-order boost/rotation of the w-axis against coordinate `axis`
/// (0=x, 1=y, 2=z), used by `translation`. `trig_is_circular` selects the
/// spherical (cos/sin) vs hyperbolic (cosh/sinh) pair.
fn axis_boost(axis: usize, d: f64, trig_is_circular: bool) -> Matrix4<f64> {
    let mut m = Matrix4::<f64>::identity();
    let (c, s) = if trig_is_circular {
        (d.cos(), d.sin())
    } else {
        (d.cosh(), d.sinh())
    };
    m[(axis, axis)] = c;
    m[(axis, 3)] = s;
    m[(3, axis)] = if trig_is_circular { -s } else { s };
    m[(3, 3)] = c;
    m
}

/// Small-angle rotation in the plane spanned by coordinates `(a, b)`.
fn plane_rotation(a: usize, b: usize, theta: f64) -> Matrix4<f64> {
    let mut m = Matrix4::<f64>::identity();
    let (c, s) = (theta.cos(), theta.sin());
    m[(a, a)] = c;
    m[(a, b)] = s;
    m[(b, a)] = -s;
    m[(b, b)] = c;
    m
}

/// Re-orthogonalize `m` into the isometry group of `curvature`: rescale each
/// row to unit norm under the curvature metric, then Gram–Schmidt from the
/// bottom row up using first-order corrections, leaving the last row's
/// magnitude unchanged. Restores group membership after accumulated
/// floating-point drift from repeated incremental updates.
pub fn fast_gram_schmidt(m: &Matrix, curvature: Curvature) -> Matrix {
    use super::vector::{inner_product, vector_normalize};

    let mut rows: [Vector; 4] = [
        m.entries.row(0).transpose().into_owned(),
        m.entries.row(1).transpose().into_owned(),
        m.entries.row(2).transpose().into_owned(),
        m.entries.row(3).transpose().into_owned(),
    ];

    for row in rows.iter_mut() {
        if let Ok(n) = vector_normalize(*row, curvature) {
            *row = n;
        }
    }

    // Orthogonalize from the bottom row up: row k loses its first-order
    // projection onto every row below it (first-order correction only, which
    // is enough since drift is assumed small between frames).
    for k in (0..3).rev() {
        for j in (k + 1)..4 {
            let proj = inner_product(rows[k], rows[j], curvature);
            rows[k] -= rows[j] * proj;
        }
    }
    // Re-normalize the corrected rows (skip the last row: its magnitude is
    // left unchanged per spec).
    for row in rows.iter_mut().take(3) {
        if let Ok(n) = vector_normalize(*row, curvature) {
            *row = n;
        }
    }

    #[rustfmt::skip]
    let entries = Matrix4::new(
        rows[0].x, rows[0].y, rows[0].z, rows[0].w,
        rows[1].x, rows[1].y, rows[1].z, rows[1].w,
        rows[2].x, rows[2].y, rows[2].z, rows[2].w,
        rows[3].x, rows[3].y, rows[3].z, rows[3].w,
    );
    Matrix::new(entries)
}
