use crate::solver::SolverError;
use crate::{check, solve, solve_first};

fn solutions_of(puzzle: &str) -> Vec<String> {
    solve(puzzle).expect("puzzle must parse").collect()
}

/// A maximal digit run of length two or more must not start with 0.
fn has_leading_zero(solution: &str) -> bool {
    let mut chars = solution.chars().peekable();
    while let Some(ch) = chars.next() {
        if !ch.is_ascii_digit() {
            continue;
        }
        if ch == '0' && chars.peek().map_or(false, char::is_ascii_digit) {
            return true;
        }
        // Skip to the end of the current digit run.
        while chars.peek().map_or(false, char::is_ascii_digit) {
            chars.next();
        }
    }
    false
}

#[test]
fn solves_puzzles_with_a_single_solution() {
    assert_eq!(solutions_of("I + BB = ILL"), ["1 + 99 = 100"]);
    assert_eq!(solutions_of("TO + GO = OUT"), ["21 + 81 = 102"]);
    assert_eq!(solutions_of("II^Z = IZI"), ["11^2 = 121"]);
    assert_eq!(solutions_of("G * G - E = EE"), ["6 * 6 - 3 = 33"]);
    assert_eq!(solutions_of("X / X = X"), ["1 / 1 = 1"]);
    assert_eq!(solutions_of("GO * ON = TROT"), ["27 * 73 = 1971"]);
}

#[test]
fn solves_send_more_money() {
    assert_eq!(solutions_of("SEND + MORE = MONEY"), ["9567 + 1085 = 10652"]);
}

#[test]
fn yields_all_solutions_in_lexicographic_order_of_the_assignment() {
    assert_eq!(
        solutions_of("X + X = X * X"),
        ["0 + 0 = 0 * 0", "2 + 2 = 2 * 2"],
    );
    assert_eq!(
        solutions_of("A^2 + B^2 = C^2"),
        ["3^2 + 4^2 = 5^2", "4^2 + 3^2 = 5^2"],
    );
    assert_eq!(
        solutions_of("I+I = ME"),
        ["5+5 = 10", "6+6 = 12", "7+7 = 14", "8+8 = 16", "9+9 = 18"],
    );
    assert_eq!(
        solutions_of("ODD + ODD = EVEN"),
        ["655 + 655 = 1310", "855 + 855 = 1710"],
    );
    assert_eq!(
        solutions_of("A + B + C = A * B * C"),
        [
            "1 + 2 + 3 = 1 * 2 * 3",
            "1 + 3 + 2 = 1 * 3 * 2",
            "2 + 1 + 3 = 2 * 1 * 3",
            "2 + 3 + 1 = 2 * 3 * 1",
            "3 + 1 + 2 = 3 * 1 * 2",
            "3 + 2 + 1 = 3 * 2 * 1",
        ],
    );
}

#[test]
fn no_solution_contains_a_number_with_a_leading_zero() {
    for puzzle in ["I + BB = ILL", "I+I = ME", "ODD + ODD = EVEN"] {
        for solution in solutions_of(puzzle) {
            assert!(
                !has_leading_zero(&solution),
                "solution '{}' of '{}' has a leading zero",
                solution,
                puzzle,
            );
        }
    }
}

#[test]
fn letter_free_puzzles_degenerate_to_plain_evaluation() {
    assert_eq!(solutions_of("2 + 2 = 4"), ["2 + 2 = 4"]);
    assert!(solutions_of("2 + 2 = 5").is_empty());
}

#[test]
fn more_than_ten_distinct_letters_is_unsolvable() {
    assert!(solutions_of("ABCDEFGHIJK = K").is_empty());
}

#[test]
fn letter_count_is_checked_before_parsing() {
    // Eleven distinct letters short-circuit the search before the malformed
    // tail is ever tokenized.
    let solutions = solve("ABCDEFGHIJK = @").expect("letter cutoff precedes parsing");
    assert_eq!(solutions.count(), 0);
}

#[test]
fn parse_failures_propagate_from_solve() {
    assert!(matches!(solve("(2+2"), Err(SolverError::Parse(_))));
    assert!(matches!(solve("2 @ 2"), Err(SolverError::Parse(_))));
}

#[test]
fn solving_is_deterministic() {
    assert_eq!(solutions_of("X + X = X * X"), solutions_of("X + X = X * X"));
}

#[test]
fn solve_first_returns_the_head_of_the_sequence() {
    assert_eq!(
        solve_first("X + X = X * X"),
        Ok(Some("0 + 0 = 0 * 0".to_string())),
    );
    assert_eq!(
        solve_first("A^2 + B^2 = C^2"),
        Ok(Some("3^2 + 4^2 = 5^2".to_string())),
    );
}

#[test]
fn solve_first_finds_send_more_money() {
    assert_eq!(
        solve_first("SEND + MORE = MONEY"),
        Ok(Some("9567 + 1085 = 10652".to_string())),
    );
}

#[test]
fn solve_first_reports_unsatisfiable_puzzles_as_none() {
    // Distinct letters never share a digit, so A = B cannot hold.
    assert_eq!(solve_first("A = B"), Ok(None));
    assert_eq!(solve_first("ABCDEFGHIJK = K"), Ok(None));
}

#[test]
fn solve_first_propagates_parse_failures() {
    assert!(matches!(solve_first("(2+2"), Err(SolverError::Parse(_))));
}

#[test]
fn emitted_solutions_verify_as_numeric_formulas() {
    for puzzle in ["I + BB = ILL", "A^2 + B^2 = C^2", "GO * ON = TROT"] {
        for solution in solutions_of(puzzle) {
            assert_eq!(
                check(&solution),
                Ok(true),
                "solution '{}' of '{}' does not verify",
                solution,
                puzzle,
            );
        }
    }
}
