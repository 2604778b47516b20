//! Holonomy-builder error surface, following `geom4::volume::VolumeError`'s
//! hand-written `Display` style (no `thiserror` dependency).

use std::fmt;

/// Failure modes of [`super::build_group`] / [`super::detect_curvature`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupError {
    /// Element accumulation exceeded [`super::MAX_GROUP_ELEMENTS`]; surfaced so
    /// a bad generator set is rejected rather than looping forever.
    NotDiscrete,
    /// Generators disagree on curvature under the `M[3][3]` auto-detect rule.
    InconsistentCurvature,
    /// A non-identity generator fixes the origin, violating the free-action
    /// assumption the builder relies on.
    FixesOrigin,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::NotDiscrete => {
                write!(f, "holonomy group exceeded the element guardrail; generators may not be discrete")
            }
            GroupError::InconsistentCurvature => {
                write!(f, "generators do not agree on curvature")
            }
            GroupError::FixesOrigin => {
                write!(f, "a generator fixes the origin; the group does not act freely")
            }
        }
    }
}

impl std::error::Error for GroupError {}
