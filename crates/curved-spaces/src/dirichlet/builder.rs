use super::seed::DirichletBuilder;
use super::types::Polyhedron;
use super::DirichletError;
use crate::linalg::{Curvature, Matrix, Tolerances};

impl Polyhedron {
    /// Seed, intersect with every remaining group element, and finalize
    /// (the common-case entry point `ModelData::load_generators` calls).
    pub fn from_group(
        group: &[Matrix],
        curvature: Curvature,
        tol: Tolerances,
    ) -> Result<Polyhedron, DirichletError> {
        let mut builder = DirichletBuilder::seed(group, curvature, tol)?;
        for (i, g) in group.iter().enumerate() {
            if i == 0 || builder.consumed.contains(&i) {
                continue;
            }
            builder.intersect(g)?;
        }
        builder.finalize()
    }
}
