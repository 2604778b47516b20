use std::fmt;

use crate::dirichlet::DirichletError;
use crate::holonomy::GroupError;
use crate::parser::ParseError;

/// The crate's top-level error surface, spanning every lower sub-enum.
///
/// `NullArgument` and `NonNullOutputNotExpected` are carried for parity with
/// the source's error surface; nothing in this crate's safe-Rust API can
/// actually construct them, since there are no raw pointers to be null.
#[derive(Debug)]
pub enum CoreError {
    NullArgument,
    NonNullOutputNotExpected,
    Group(GroupError),
    Seed(DirichletError),
    Parse(ParseError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::NullArgument => write!(f, "a required argument was null"),
            CoreError::NonNullOutputNotExpected => write!(f, "an output slot expected to stay empty was not"),
            CoreError::Group(e) => write!(f, "{}", e),
            CoreError::Seed(e) => write!(f, "{}", e),
            CoreError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<GroupError> for CoreError {
    fn from(e: GroupError) -> Self {
        CoreError::Group(e)
    }
}

impl From<DirichletError> for CoreError {
    fn from(e: DirichletError) -> Self {
        CoreError::Seed(e)
    }
}

impl From<ParseError> for CoreError {
    fn from(e: ParseError) -> Self {
        CoreError::Parse(e)
    }
}
