use std::fmt;

use crate::linalg::NonPositiveNorm;

/// Failure modes of the Dirichlet-domain pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DirichletError {
    /// Banana seeding never found a fourth hyperplane-independent element;
    /// the bisector axis stays unbounded (an infinite "chimney").
    ChimneyUnsupported,
    /// Lens seeding deduced a non-integral face count from `g1`'s rotation.
    LensOrderIndeterminate,
    /// Lens seeding deduced a face count below 3.
    LensOrderTooSmall,
    /// Lens seeding was reached for a hyperbolic generator set; hyperbolic
    /// slab spaces are not supported.
    HyperbolicSlabUnsupported,
    /// The element-count guardrail was exceeded while intersecting half-spaces.
    OutOfMemory,
    /// A vertex position collapsed to a null or imaginary-norm vector.
    NonPositiveNorm,
}

impl fmt::Display for DirichletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirichletError::ChimneyUnsupported => {
                write!(f, "banana seed has no bounding fourth hyperplane (unbounded chimney)")
            }
            DirichletError::LensOrderIndeterminate => {
                write!(f, "lens seed face count is not close enough to an integer")
            }
            DirichletError::LensOrderTooSmall => {
                write!(f, "lens seed face count is below 3")
            }
            DirichletError::HyperbolicSlabUnsupported => {
                write!(f, "hyperbolic slab spaces (lens seeding) are not supported")
            }
            DirichletError::OutOfMemory => {
                write!(f, "polyhedron element count exceeded the construction guardrail")
            }
            DirichletError::NonPositiveNorm => {
                write!(f, "a vertex position has non-positive norm under the curvature's inner product")
            }
        }
    }
}

impl std::error::Error for DirichletError {}

impl From<NonPositiveNorm> for DirichletError {
    fn from(_: NonPositiveNorm) -> Self {
        DirichletError::NonPositiveNorm
    }
}
