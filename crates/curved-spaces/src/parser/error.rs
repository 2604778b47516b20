use std::fmt;

use crate::holonomy::GroupError;

/// Errors from reading a generator file.
#[derive(Debug)]
pub enum ParseError {
    /// Not 7-bit-clean text (after tolerating a leading BOM).
    MatrixFileWrongUnicode,
    /// A character outside `[0-9.eE+\- \t\r\n]` after comment stripping.
    MatrixFileBadCharacter { position: usize },
    /// A float token failed to parse, or the first matrix is not the identity.
    MatrixFileMalformed { detail: &'static str },
    /// Total float count is zero or not a multiple of 16.
    UnexpectedGeneratorCount { count: usize },
    /// Propagated from the curvature auto-detect rule.
    InconsistentCurvature(GroupError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MatrixFileWrongUnicode => {
                write!(f, "generator file is not 7-bit ASCII (after a tolerated UTF-8 BOM)")
            }
            ParseError::MatrixFileBadCharacter { position } => {
                write!(f, "generator file has an unexpected character at byte {}", position)
            }
            ParseError::MatrixFileMalformed { detail } => {
                write!(f, "generator file is malformed: {}", detail)
            }
            ParseError::UnexpectedGeneratorCount { count } => write!(
                f,
                "generator file has {} numbers, which is not a positive multiple of 16",
                count
            ),
            ParseError::InconsistentCurvature(e) => write!(f, "generator file: {}", e),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<GroupError> for ParseError {
    fn from(e: GroupError) -> Self {
        ParseError::InconsistentCurvature(e)
    }
}
