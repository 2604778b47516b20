use super::*;
use crate::linalg::Curvature;

#[test]
fn characteristic_view_size_is_half_the_larger_dimension() {
    assert_eq!(characteristic_view_size(1920.0, 1080.0), 960.0);
    assert_eq!(characteristic_view_size(800.0, 1200.0), 600.0);
}

#[test]
fn frustum_normals_are_unit_length() {
    for &n in &frustum_side_normals(1920.0, 1080.0) {
        assert!((n.norm() - 1.0).abs() < 1e-10);
    }
}

#[test]
fn frustum_normals_are_orthogonal_to_the_forward_axis_w_component() {
    for &n in &frustum_side_normals(1024.0, 768.0) {
        assert_eq!(n.w, 0.0);
    }
}

#[test]
fn frustum_normal_accepts_screen_center_ray() {
    // (0, 0, 1, *) is dead ahead: every side plane should consider it interior.
    let normals = frustum_side_normals(1280.0, 720.0);
    let center = crate::linalg::Vector::new(0.0, 0.0, 1.0, 0.0);
    for &n in &normals {
        assert!(n.dot(&center) > 0.0);
    }
}

#[test]
fn projection_matrix_maps_near_corner_to_clip_z_zero() {
    let curvature = Curvature::Flat;
    let projection = make_projection_matrix(1920.0, 1080.0, curvature, ClippingBox::Full);
    let c = characteristic_view_size(1920.0, 1080.0);
    let near_corner = crate::linalg::Vector::new(1920.0 / c, 1080.0 / c, 1.0, 512.0);
    let clip = projection.apply(near_corner);
    assert!((clip.x - 1.0).abs() < 1e-9);
    assert!((clip.y - 1.0).abs() < 1e-9);
    assert!(clip.z.abs() < 1e-9);
    assert!((clip.w - 1.0).abs() < 1e-9);
}

#[test]
fn projection_matrix_maps_far_corner_to_clip_z_equal_to_w() {
    let curvature = Curvature::Spherical;
    let projection = make_projection_matrix(1920.0, 1080.0, curvature, ClippingBox::Full);
    let c = characteristic_view_size(1920.0, 1080.0);
    let far_corner = crate::linalg::Vector::new(-1920.0 / c, -1080.0 / c, 1.0, -512.0);
    let clip = projection.apply(far_corner);
    assert!((clip.x + 1.0).abs() < 1e-9);
    assert!((clip.y + 1.0).abs() < 1e-9);
    assert!((clip.z - clip.w).abs() < 1e-9);
}

#[test]
fn front_half_clip_doubles_z_relative_to_full() {
    let full = make_projection_matrix(800.0, 600.0, Curvature::Hyperbolic, ClippingBox::Full);
    let front = make_projection_matrix(800.0, 600.0, Curvature::Hyperbolic, ClippingBox::FrontHalf);
    let p = crate::linalg::Vector::new(0.1, 0.1, 1.0, 600.0);
    let clip_full = full.apply(p);
    let clip_front = front.apply(p);
    assert!((clip_front.z - 2.0 * clip_full.z).abs() < 1e-9);
}
