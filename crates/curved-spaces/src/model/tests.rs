use super::*;
use crate::linalg::{Curvature, Matrix};

fn matrices_to_generator_text(matrices: &[Matrix]) -> String {
    let mut text = String::new();
    for m in matrices {
        for row in 0..4 {
            for col in 0..4 {
                text.push_str(&format!("{} ", m.entry(row, col)));
            }
        }
        text.push('\n');
    }
    text
}

fn three_torus_text() -> String {
    matrices_to_generator_text(&[
        Matrix::identity(),
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 1.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 0.0, 1.0),
    ])
}

#[test]
fn loading_a_three_torus_populates_domain_and_honeycomb() {
    let mut model = ModelData::new();
    model.load_generators(three_torus_text().as_bytes()).unwrap();
    assert_eq!(model.curvature, Curvature::Flat);
    assert!(model.domain.is_some());
    assert!(model.honeycomb.is_some());
    assert_eq!(model.domain.as_ref().unwrap().live_face_count(), 6);
}

#[test]
fn loading_an_identity_only_file_yields_no_domain_and_no_error() {
    let mut model = ModelData::new();
    let text = matrices_to_generator_text(&[Matrix::identity()]);
    model.load_generators(text.as_bytes()).unwrap();
    assert!(model.domain.is_none());
    assert!(model.honeycomb.is_none());
    assert_eq!(model.curvature, Curvature::Flat);
}

#[test]
fn loading_identity_and_antipodal_map_yields_no_domain_and_no_error() {
    let mut model = ModelData::new();
    let antipodal = Matrix::identity().antipodal_map();
    let text = matrices_to_generator_text(&[Matrix::identity(), antipodal]);
    model.load_generators(text.as_bytes()).unwrap();
    assert!(model.domain.is_none());
}

#[test]
fn a_malformed_file_leaves_model_in_the_clean_no_space_state() {
    let mut model = ModelData::new();
    model.load_generators(three_torus_text().as_bytes()).unwrap();
    assert!(model.domain.is_some());

    let bad_text = "1 0 0 0 0 1 0 0 0 0 1 0 0 0 0\n"; // 15 numbers, not a multiple of 16
    let err = model.load_generators(bad_text.as_bytes()).unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));
    assert!(model.domain.is_none());
    assert!(model.honeycomb.is_none());
    assert_eq!(model.curvature, Curvature::None);
    assert!(model.observer.placement.is_identity(1e-12));
    assert_eq!(model.observer.speed, 0.0);
}

#[test]
fn pinch_clamps_aperture_to_zero_one() {
    let mut model = ModelData::new();
    assert_eq!(model.aperture, 1.0);
    for _ in 0..10 {
        model.pinch(0.5);
    }
    assert_eq!(model.aperture, 0.0);
    for _ in 0..10 {
        model.pinch(1.5);
    }
    assert_eq!(model.aperture, 1.0);
}

#[test]
fn wall_mesh_is_none_before_loading_a_space() {
    let mut model = ModelData::new();
    assert!(model.wall_mesh().is_none());
}

#[test]
fn wall_mesh_is_empty_at_full_aperture_and_non_empty_once_pinched() {
    let mut model = ModelData::new();
    model.load_generators(three_torus_text().as_bytes()).unwrap();

    assert!(model.wall_mesh().unwrap().vertices.is_empty());

    model.pinch(0.5);
    assert!(model.aperture < 1.0);
    assert!(!model.wall_mesh().unwrap().vertices.is_empty());
}

#[test]
fn vertex_figure_mesh_is_available_once_a_space_is_loaded() {
    let mut model = ModelData::new();
    model.load_generators(three_torus_text().as_bytes()).unwrap();
    assert!(!model.vertex_figure_mesh().unwrap().vertices.is_empty());
}

#[test]
fn reloading_a_space_bumps_the_change_counter() {
    let mut model = ModelData::new();
    let before = model.change_counter;
    model.load_generators(three_torus_text().as_bytes()).unwrap();
    assert_ne!(model.change_counter, before);
    let after_first_load = model.change_counter;
    model.load_generators(three_torus_text().as_bytes()).unwrap();
    assert_ne!(model.change_counter, after_first_load);
}
