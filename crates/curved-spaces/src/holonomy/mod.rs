//! Holonomy-group builder: breadth-first word-closure of generators.
//!
//! Grows a finite, radially sorted window of the covering group Γ from a
//! generator set, bounded by an intrinsic-distance radius.

mod distance;
mod error;

#[cfg(test)]
mod tests;

pub use distance::distance_from_origin;
pub use error::GroupError;

use crate::linalg::{Curvature, Matrix, Tolerances};

/// Generous guardrail far above any realistic sample space but far below
/// runaway growth from a non-discrete or inconsistent generator set.
pub const MAX_GROUP_ELEMENTS: usize = 20_000;

/// Grow the holonomy group `⟨G⟩` to radius `r`, returning elements sorted by
/// distance from the origin with the identity first.
///
/// Assumes `generators` all share one curvature and that the group acts
/// freely on the origin; callers that have not already validated this should
/// check with [`detect_curvature`] first.
pub fn build_group(
    generators: &[Matrix],
    curvature: Curvature,
    radius: f64,
    tol: &Tolerances,
) -> Result<Vec<Matrix>, GroupError> {
    if generators.is_empty() {
        return Ok(vec![Matrix::identity()]);
    }

    let mut inverses = Vec::with_capacity(generators.len());
    for g in generators {
        inverses.push(g.geometric_inverse(curvature));
    }

    let identity = Matrix::identity();
    for g in generators {
        if g.is_identity(tol.matrix_eps) {
            continue;
        }
        if matrix_fixes_origin(g, curvature, tol) {
            return Err(GroupError::FixesOrigin);
        }
    }

    let mut elements: Vec<Matrix> = vec![identity];
    let mut frontier: Vec<Matrix> = vec![identity];

    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for f in &frontier {
            for step in generators.iter().chain(inverses.iter()) {
                let candidate = f.product(step);
                let dist = distance_from_origin(&candidate, curvature)?;
                if dist > radius + tol.matrix_eps {
                    continue;
                }
                if elements
                    .iter()
                    .any(|e| e.equality_within(&candidate, tol.matrix_eps))
                {
                    continue;
                }
                if elements.len() >= MAX_GROUP_ELEMENTS {
                    return Err(GroupError::NotDiscrete);
                }
                elements.push(candidate);
                next_frontier.push(candidate);
            }
        }
        frontier = next_frontier;
        #[cfg(debug_assertions)]
        if std::env::var_os("CURVED_SPACES_DEBUG_HOLONOMY").is_some() {
            eprintln!(
                "holonomy: frontier grew to {} (total {})",
                frontier.len(),
                elements.len()
            );
        }
    }

    elements.sort_by(|a, b| {
        let da = distance_from_origin(a, curvature).unwrap_or(f64::INFINITY);
        let db = distance_from_origin(b, curvature).unwrap_or(f64::INFINITY);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(elements)
}

/// Detect a single consistent curvature from a generator list: classify every
/// non-identity matrix's `M[3][3]`; all must agree (`<1`, `=1`, or `>1`).
pub fn detect_curvature(generators: &[Matrix], tol: &Tolerances) -> Result<Curvature, GroupError> {
    let mut detected: Option<Curvature> = None;
    for g in generators {
        if g.is_identity(tol.matrix_eps) {
            continue;
        }
        let c = Curvature::classify(g.entry(3, 3), tol.file_format_eps);
        match detected {
            None => detected = Some(c),
            Some(prev) if prev == c => {}
            Some(_) => return Err(GroupError::InconsistentCurvature),
        }
    }
    Ok(detected.unwrap_or(Curvature::Flat))
}

/// Whether `g` fixes the origin (distance ~0 but `g` is not the identity),
/// violating the free-action assumption the builder relies on.
fn matrix_fixes_origin(g: &Matrix, curvature: Curvature, tol: &Tolerances) -> bool {
    if g.is_identity(tol.matrix_eps) {
        return false;
    }
    match distance_from_origin(g, curvature) {
        Ok(d) => d <= tol.matrix_eps,
        Err(_) => false,
    }
}
