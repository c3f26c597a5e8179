//! Cryptarithmix - a solver for cryptarithmetic puzzles
//!
//! A puzzle is a textual arithmetic formula, such as `SEND + MORE = MONEY`,
//! in which uppercase Latin letters stand for unknown decimal digits.
//! Distinct letters stand for distinct digits and no number may start with
//! the digit 0. The crate parses the formula once into an expression tree
//! and searches ordered digit permutations for assignments that satisfy it.

pub mod correspondence;
pub mod expression;
pub mod parser;
pub mod permutations;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use correspondence::{CorrespondenceError, CorrespondenceMap};
pub use expression::{EvaluationError, Expression};
pub use parser::{parse, ParseError};
pub use solver::{PuzzleSolver, Solutions, SolverError};

/// Returns the lazy sequence of all solutions of `formula`, in
/// lexicographic order of the digit assignment.
///
/// This is a convenience function that creates a default solver; see
/// [`PuzzleSolver::solve`].
///
/// # Errors
///
/// Returns [`SolverError::Parse`] when the formula fails to tokenize or
/// parse. A well-formed but unsatisfiable formula is not an error: it
/// yields an empty sequence.
///
/// # Examples
///
/// ```
/// use cryptarithmix::solve;
///
/// let solutions: Vec<String> = solve("I + BB = ILL")
///     .expect("well-formed puzzle")
///     .collect();
/// assert_eq!(solutions, ["1 + 99 = 100"]);
/// ```
pub fn solve(formula: &str) -> Result<Solutions, SolverError> {
    PuzzleSolver::new().solve(formula)
}

/// Returns the first solution of `formula` in lexicographic order of the
/// digit assignment, or `None` when there is no solution.
///
/// The search runs across worker threads and cancels outstanding work once
/// the earliest hit is confirmed; see [`PuzzleSolver::solve_first`].
///
/// # Errors
///
/// Returns [`SolverError::Parse`] when the formula fails to tokenize or
/// parse, keeping malformed puzzles distinguishable from unsatisfiable
/// ones.
pub fn solve_first(formula: &str) -> Result<Option<String>, SolverError> {
    PuzzleSolver::new().solve_first(formula)
}

/// Checks whether a fully-numeric formula evaluates to a truthy value.
///
/// Useful for verifying a substituted solution such as `1 + 99 = 100`.
/// Arithmetic faults (division by zero and friends) count as `false`.
///
/// # Errors
///
/// Returns a [`ParseError`] when the formula fails to tokenize or parse.
///
/// # Examples
///
/// ```
/// use cryptarithmix::check;
///
/// assert_eq!(check("9567 + 1085 = 10652"), Ok(true));
/// assert_eq!(check("2 + 2 = 5"), Ok(false));
/// ```
pub fn check(formula: &str) -> Result<bool, ParseError> {
    let expression = parse(formula)?;
    let identity = CorrespondenceMap::default();
    Ok(matches!(
        expression.evaluate(formula, &identity),
        Ok(value) if value != 0
    ))
}
