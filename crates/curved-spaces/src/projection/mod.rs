//! Projection & culling math: characteristic view size, frustum side normals,
//! and the view-wedge-to-clip-wedge matrix.

mod frustum;
mod matrix;

#[cfg(test)]
mod tests;

pub use frustum::{characteristic_view_size, frustum_side_normals};
pub use matrix::{make_projection_matrix, ClippingBox};
