//! View-wedge-to-clip-wedge projection matrix.
//!
//! The view wedge has corners `(±w/c, ±h/c, 1, w_near)` (near) and
//! `(±w/c, ±h/c, 1, w_far)` (far), where `c = characteristic_view_size(w, h)`.
//! Treating the third coordinate as the homogeneous reference (always 1 at
//! both corner sets) and the fourth as the true depth variable gives a
//! standard perspective-style matrix: `x`/`y` scale directly, `z`/`w` carry
//! the near/far remap with the old `z` becoming the output divisor (the same
//! shape as an ordinary OpenGL/D3D clip matrix with those two axes swapped to
//! match this engine's (x, y, z, w) layout).
//!
//! `w_near` is fixed at 512; `w_far` is 0 (flat), −512 (spherical), or 1
//! (hyperbolic).

use nalgebra::Matrix4;

use crate::linalg::{Curvature, Matrix};

use super::frustum::characteristic_view_size;

const W_NEAR: f64 = 512.0;

fn w_far(curvature: Curvature) -> f64 {
    match curvature {
        Curvature::Flat | Curvature::None => 0.0,
        Curvature::Spherical => -512.0,
        Curvature::Hyperbolic => 1.0,
    }
}

/// Which half of the depth range a projection matrix clips to, for the
/// two-pass front/back depth-precision split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClippingBox {
    Full,
    FrontHalf,
    BackHalf,
}

/// Build the matrix taking the view wedge onto the clip wedge
/// `{-1 <= x, y <= 1, 0 <= z <= w}` for the given viewport and curvature.
pub fn make_projection_matrix(
    image_width: f64,
    image_height: f64,
    curvature: Curvature,
    clip: ClippingBox,
) -> Matrix {
    let c = characteristic_view_size(image_width, image_height);
    let sx = c / image_width;
    let sy = c / image_height;
    let far = w_far(curvature);
    let a = 1.0 / (far - W_NEAR);
    let b = -W_NEAR * a;

    #[rustfmt::skip]
    let entries = Matrix4::new(
        sx,  0.0, 0.0, 0.0,
        0.0, sy,  0.0, 0.0,
        0.0, 0.0, b,   1.0,
        0.0, 0.0, a,   0.0,
    );
    let projection = Matrix::new(entries);

    match clip {
        ClippingBox::Full => projection,
        ClippingBox::FrontHalf => projection.product(&front_half_compress()),
        ClippingBox::BackHalf => projection.product(&back_half_compress()),
    }
}

/// Doubles `z`, mapping the near half `[0, w/2]` onto the full `[0, w]`.
fn front_half_compress() -> Matrix {
    #[rustfmt::skip]
    let entries = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 2.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    Matrix::new(entries)
}

/// `z' = 2z - w`, mapping the far half `[w/2, w]` onto the full `[0, w]`.
fn back_half_compress() -> Matrix {
    #[rustfmt::skip]
    let entries = Matrix4::new(
        1.0, 0.0, 0.0,  0.0,
        0.0, 1.0, 0.0,  0.0,
        0.0, 0.0, 2.0,  0.0,
        0.0, 0.0, -1.0, 1.0,
    );
    Matrix::new(entries)
}
