//! View-frustum sizing and side-plane normals.

use crate::linalg::Vector;

/// On-screen distance subtending a 45° half-angle for an `image_width` ×
/// `image_height` viewport.
#[inline]
pub fn characteristic_view_size(image_width: f64, image_height: f64) -> f64 {
    0.5 * image_width.max(image_height)
}

/// Inward unit normals of the four view-frustum side hyperplanes (left,
/// right, bottom, top), in view space. Each has a zero `w` component, so a
/// dot product against a point with nonzero `w` ignores it.
pub fn frustum_side_normals(image_width: f64, image_height: f64) -> [Vector; 4] {
    let c = characteristic_view_size(image_width, image_height);
    let norm_w = (c * c + image_width * image_width).sqrt();
    let norm_h = (c * c + image_height * image_height).sqrt();
    [
        Vector::new(c / norm_w, 0.0, image_width / norm_w, 0.0),
        Vector::new(-c / norm_w, 0.0, image_width / norm_w, 0.0),
        Vector::new(0.0, c / norm_h, image_height / norm_h, 0.0),
        Vector::new(0.0, -c / norm_h, image_height / norm_h, 0.0),
    ]
}
