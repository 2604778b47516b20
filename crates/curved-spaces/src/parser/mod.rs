//! Generator file parsing: the on-disk format a user drops in to define a
//! space.

mod error;
mod tokenizer;


pub use error::ParseError;

use nalgebra::Matrix4;

use crate::holonomy::detect_curvature;
use crate::linalg::{Curvature, Matrix, Tolerances};

/// The parsed contents of a generator file: the matrices it lists (first one
/// always the identity), the auto-detected curvature, and whether a "large
/// volume" hyperbolic preset comment was seen.
#[derive(Clone, Debug)]
pub struct MatrixList {
    pub matrices: Vec<Matrix>,
    pub curvature: Curvature,
    pub large_volume_hint: bool,
}

/// Parses a generator file's raw bytes into a [`MatrixList`].
pub fn parse_generator_file(raw: &[u8], tol: &Tolerances) -> Result<MatrixList, ParseError> {
    let (code, large_volume_hint) = tokenizer::strip_comments(raw)?;
    let floats = tokenizer::tokenize_floats(&code)?;

    if floats.is_empty() || floats.len() % 16 != 0 {
        return Err(ParseError::UnexpectedGeneratorCount { count: floats.len() });
    }

    let matrices: Vec<Matrix> = floats
        .chunks_exact(16)
        .map(|row| {
            Matrix::new(Matrix4::new(
                row[0], row[1], row[2], row[3], row[4], row[5], row[6], row[7], row[8], row[9], row[10], row[11],
                row[12], row[13], row[14], row[15],
            ))
        })
        .collect();

    if !matrices[0].is_identity(tol.file_format_eps) {
        return Err(ParseError::MatrixFileMalformed {
            detail: "the first matrix in the file must be the identity",
        });
    }

    let curvature = detect_curvature(&matrices, tol)?;

    Ok(MatrixList {
        matrices,
        curvature,
        large_volume_hint,
    })
}
