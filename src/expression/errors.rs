use thiserror::Error;

/// Arithmetic faults raised while evaluating an expression.
///
/// These are recovered locally by the solver: a faulting digit assignment
/// simply does not satisfy the puzzle, and the search moves on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("negative exponent")]
    NegativeExponent,
    #[error("arithmetic overflow")]
    Overflow,
}
