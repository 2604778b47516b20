//! Geometry kernel for visualizing life inside a closed constant-curvature
//! 3-manifold: holonomy groups, Dirichlet fundamental domains, honeycomb
//! tilings, observer kinematics, projection, and mesh generation.

pub mod dirichlet;
pub mod holonomy;
pub mod honeycomb;
pub mod linalg;
pub mod mesh;
pub mod model;
pub mod observer;
pub mod parser;
pub mod projection;
