use std::f64::consts::PI;

use super::Honeycomb;
use crate::dirichlet::Polyhedron;
use crate::holonomy::build_group;
use crate::linalg::{Curvature, Matrix, Parity, Tolerances};

fn three_torus_group() -> Vec<Matrix> {
    let tol = Tolerances::default();
    let generators = vec![
        Matrix::translation(Curvature::Flat, 1.0, 0.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 1.0, 0.0),
        Matrix::translation(Curvature::Flat, 0.0, 0.0, 1.0),
    ];
    build_group(&generators, Curvature::Flat, 2.0, &tol).unwrap()
}

#[test]
fn build_puts_identity_cell_first_with_zero_position_offset() {
    let group = three_torus_group();
    let comb = Honeycomb::build(&group, Curvature::Flat);
    assert_eq!(comb.cells.len(), group.len());
    assert_eq!(comb.cells[0].matrix.entries, Matrix::identity().entries);
}

#[test]
fn cull_and_sort_reports_only_plain_cells_for_an_identity_view() {
    let group = three_torus_group();
    let mut comb = Honeycomb::build(&group, Curvature::Flat);
    let tol = Tolerances::default();
    let domain = Polyhedron::from_group(&group, Curvature::Flat, tol).unwrap();

    let view = Matrix::identity();
    comb.cull_and_sort(&view, 1920.0, 1080.0, 11.0, domain.outradius, Parity::Positive);

    assert!(comb.plain_count > 0);
    assert_eq!(comb.reflected_count, 0);
    assert_eq!(comb.plain_count + comb.reflected_count, comb.visible.len());

    let first = comb.visible[0];
    assert_eq!(first, 0, "the identity cell should sort first (distance 0)");

    let last = *comb.visible.last().unwrap();
    assert!(comb.cells[last].distance < 11.0 + domain.outradius);
}

#[test]
fn cull_and_sort_orders_visible_cells_by_ascending_distance() {
    let group = three_torus_group();
    let mut comb = Honeycomb::build(&group, Curvature::Flat);
    let tol = Tolerances::default();
    let domain = Polyhedron::from_group(&group, Curvature::Flat, tol).unwrap();
    comb.cull_and_sort(
        &Matrix::identity(),
        1920.0,
        1080.0,
        11.0,
        domain.outradius,
        Parity::Positive,
    );
    for pair in comb.visible.windows(2) {
        assert!(comb.cells[pair[0]].distance <= comb.cells[pair[1]].distance);
    }
}

#[test]
fn inverted_tiles_pair_every_cell_with_the_antipodal_map() {
    // Order-3 cyclic rotation group in the z-w plane: spherical, odd order.
    let generator = Matrix::translation(Curvature::Spherical, 0.0, 0.0, 2.0 * PI / 3.0);
    let tol = Tolerances::default();
    let group = build_group(&[generator], Curvature::Spherical, 2.2, &tol).unwrap();
    assert_eq!(group.len(), 3, "expected an order-3 cyclic group");

    let comb = Honeycomb::build(&group, Curvature::Spherical);
    let antipodal = Matrix::antipodal_map();
    let tiles = comb.build_inverted_tiles(antipodal);

    assert_eq!(tiles.len(), group.len());
    for (cell, tile) in comb.cells.iter().zip(tiles.iter()) {
        let expected = cell.parity.compose(antipodal.parity());
        assert_eq!(tile.parity, expected);
        assert_eq!(tile.parity, Parity::Negative, "a pure rotation composed with the antipodal map reverses orientation");
    }
}
