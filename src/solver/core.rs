use log::{debug, info};
use rayon::prelude::*;

use crate::correspondence::CorrespondenceMap;
use crate::expression::Expression;
use crate::parser::parse;
use crate::permutations::{nth_permutation, permutation_count, Permutations};
use crate::solver::errors::SolverError;
use crate::utils::{make_trans, translate};

/// Digits available for assignment, in the order that defines the search.
const DIGITS: &str = "0123456789";

/// Solver for cryptarithmetic puzzles.
///
/// A puzzle is a formula such as `SEND + MORE = MONEY` in which every
/// uppercase Latin letter stands for an unknown decimal digit, distinct
/// letters stand for distinct digits, and no multi-character number starts
/// with the digit 0.
#[derive(Debug)]
pub struct PuzzleSolver;

impl PuzzleSolver {
    /// Creates a new puzzle solver.
    pub fn new() -> Self {
        Self
    }

    /// Returns the lazy sequence of all satisfying substitutions of
    /// `formula`, in lexicographic order of the digit assignment.
    ///
    /// A formula with more than ten distinct letters is unsolvable and
    /// yields an empty sequence immediately, without any permutation work
    /// and without parsing.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Parse`] when the formula fails to tokenize or
    /// parse.
    pub fn solve(&self, formula: &str) -> Result<Solutions, SolverError> {
        let letters = distinct_letters(formula);
        if letters.chars().count() > DIGITS.len() {
            info!(
                "puzzle '{}' has {} distinct letters for {} digits: unsolvable",
                formula,
                letters.len(),
                DIGITS.len(),
            );
            return Ok(Solutions::empty(formula));
        }

        let expression = parse(formula)?;
        info!(
            "searching '{}' over {} letters ({} candidates)",
            formula,
            letters.len(),
            permutation_count(DIGITS.len(), letters.len()),
        );
        Ok(Solutions::new(formula, letters, expression))
    }

    /// Returns the first satisfying substitution of `formula` in
    /// lexicographic order of the digit assignment, or `None` when the
    /// puzzle has no solutions.
    ///
    /// The permutation index space is partitioned across worker threads;
    /// outstanding work is cancelled as soon as the earliest hit is
    /// confirmed, which keeps factorially large searches prompt.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Parse`] when the formula fails to tokenize or
    /// parse.
    pub fn solve_first(&self, formula: &str) -> Result<Option<String>, SolverError> {
        let letters = distinct_letters(formula);
        let length = letters.chars().count();
        if length > DIGITS.len() {
            return Ok(None);
        }

        let expression = parse(formula)?;
        let constrained = leading_letters(formula);
        let pool: Vec<char> = DIGITS.chars().collect();
        let candidates = permutation_count(pool.len(), length);

        info!(
            "searching '{}' in parallel over {} candidates",
            formula, candidates,
        );

        let hit = (0..candidates).into_par_iter().find_first(|&index| {
            nth_permutation(&pool, length, index).is_some_and(|digit_chars| {
                let digits: String = digit_chars.into_iter().collect();
                satisfies(formula, &expression, &letters, &constrained, &digits)
            })
        });

        Ok(hit
            .and_then(|index| nth_permutation(&pool, length, index))
            .map(|digit_chars| {
                let digits: String = digit_chars.into_iter().collect();
                substitute(formula, &letters, &digits)
            }))
    }
}

impl Default for PuzzleSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy sequence of satisfying substitutions of a single puzzle.
///
/// Each call to [`Iterator::next`] resumes the search where it left off,
/// trying one candidate digit assignment at a time against the expression
/// tree parsed once up front. The sequence is deterministic: a fixed puzzle
/// always yields the same solutions in the same order.
#[derive(Debug)]
pub struct Solutions {
    formula: String,
    letters: String,
    constrained: Vec<char>,
    expression: Option<Expression>,
    permutations: Permutations<char>,
}

impl Solutions {
    fn new(formula: &str, letters: String, expression: Expression) -> Self {
        let length = letters.chars().count();
        Self {
            formula: formula.to_string(),
            constrained: leading_letters(formula),
            letters,
            expression: Some(expression),
            permutations: Permutations::of_str(DIGITS, length),
        }
    }

    fn empty(formula: &str) -> Self {
        Self {
            formula: formula.to_string(),
            letters: String::new(),
            constrained: Vec::new(),
            expression: None,
            permutations: Permutations::new(Vec::new(), 1),
        }
    }
}

impl Iterator for Solutions {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let Self {
            formula,
            letters,
            constrained,
            expression,
            permutations,
        } = self;
        let expression = expression.as_ref()?;

        for digit_chars in permutations {
            let digits: String = digit_chars.into_iter().collect();
            if satisfies(formula, expression, letters, constrained, &digits) {
                debug!("'{}' satisfied by digits '{}'", formula, digits);
                return Some(substitute(formula, letters, &digits));
            }
        }

        None
    }
}

/// Distinct uppercase letters of `formula` in first-occurrence order.
fn distinct_letters(formula: &str) -> String {
    let mut letters = String::new();
    for ch in formula.chars() {
        if ch.is_ascii_uppercase() && !letters.contains(ch) {
            letters.push(ch);
        }
    }
    letters
}

/// Letters that start a multi-character letters-and-digits run beginning
/// with a letter. These are the leading digits of numbers and may never be
/// assigned 0.
///
/// A letter qualifies when it sits at a word boundary and the next
/// character is a letter or digit; a lone letter names a single-digit
/// number, which may legitimately be 0.
fn leading_letters(formula: &str) -> Vec<char> {
    let is_word = |ch: char| ch.is_ascii_uppercase() || ch.is_ascii_digit();

    let mut leading = Vec::new();
    let mut previous_is_word = false;
    let mut chars = formula.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_ascii_uppercase()
            && !previous_is_word
            && chars.peek().copied().map_or(false, is_word)
            && !leading.contains(&ch)
        {
            leading.push(ch);
        }
        previous_is_word = is_word(ch);
    }

    leading
}

/// Whether assigning `digits` to `letters` satisfies the parsed `formula`.
///
/// A candidate is rejected without evaluation when any constrained leading
/// letter maps to 0; otherwise the shared tree is evaluated and any
/// arithmetic fault counts as not satisfying.
fn satisfies(
    formula: &str,
    expression: &Expression,
    letters: &str,
    constrained: &[char],
    digits: &str,
) -> bool {
    // Letters and digits have equal length by construction, so the builder
    // cannot fail here.
    let Ok(correspondence) = CorrespondenceMap::build(letters, digits) else {
        return false;
    };

    if constrained.iter().any(|&ch| correspondence.get(ch) == 0) {
        return false;
    }

    matches!(
        expression.evaluate(formula, &correspondence),
        Ok(value) if value != 0
    )
}

/// Produces the solution string by substituting each letter occurrence in
/// the puzzle text with its assigned digit.
fn substitute(formula: &str, letters: &str, digits: &str) -> String {
    match make_trans(letters, digits) {
        Ok(dictionary) => translate(formula, &dictionary),
        // Distinct letters zipped with a same-length permutation cannot
        // produce an invalid dictionary.
        Err(_) => formula.to_string(),
    }
}
