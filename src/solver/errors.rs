use thiserror::Error;

use crate::parser::ParseError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("parsing error: {0}")]
    Parse(#[from] ParseError),
}
