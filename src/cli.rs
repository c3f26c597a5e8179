use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use cryptarithmix::{solve, solve_first};

/// The padding to align solution labels with the puzzle above in the output.
const OUTPUT_PADDING: usize = 15;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Cryptarithmix - solve cryptarithmetic puzzles
#[derive(Parser, Debug)]
#[command(name = "cryptarithmix")]
#[command(about = "Solve cryptarithmetic puzzles such as SEND + MORE = MONEY")]
#[command(version)]
pub struct CliArgs {
    /// Puzzles to solve; when omitted, puzzle lines are read from standard
    /// input (blank lines and lines starting with '#' are skipped)
    pub puzzles: Vec<String>,

    /// Report only the first solution of each puzzle
    #[arg(short, long)]
    pub first: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level);

    if args.puzzles.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read puzzle from standard input")?;
            if is_skipped(&line) {
                continue;
            }
            solve_puzzle(line.trim(), args.first);
        }
    } else {
        for puzzle in &args.puzzles {
            if is_skipped(puzzle) {
                continue;
            }
            solve_puzzle(puzzle.trim(), args.first);
        }
    }

    Ok(())
}

/// Whether the line is blank or a comment and should not reach the solver.
fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn solve_puzzle(puzzle: &str, first_only: bool) {
    info!("solving puzzle '{}'", puzzle);

    if first_only {
        match solve_first(puzzle) {
            Ok(Some(solution)) => {
                println!("Solution(s) for '{}':", puzzle);
                print_solution(0, &solution);
            }
            Ok(None) => println!("Puzzle '{}' has no solutions", puzzle),
            Err(err) => report_parse_failure(puzzle, &err),
        }
        return;
    }

    match solve(puzzle) {
        Ok(solutions) => {
            let mut total = 0;
            for (index, solution) in solutions.enumerate() {
                if index == 0 {
                    println!("Solution(s) for '{}':", puzzle);
                }
                print_solution(index, &solution);
                total = index + 1;
            }
            if total == 0 {
                println!("Puzzle '{}' has no solutions", puzzle);
            }
        }
        Err(err) => report_parse_failure(puzzle, &err),
    }
}

fn print_solution(index: usize, solution: &str) {
    println!(
        "{:.<width$}  {}",
        format_label(index),
        solution,
        width = OUTPUT_PADDING,
    );
}

fn format_label(index: usize) -> String {
    format!("    #{} ", index + 1)
}

fn report_parse_failure(puzzle: &str, err: &cryptarithmix::SolverError) {
    warn!("puzzle '{}' failed to parse: {}", puzzle, err);
    println!("Puzzle '{}' cannot be parsed: {}", puzzle, err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_and_blank_lines_are_skipped() {
        assert!(is_skipped(""));
        assert!(is_skipped("   "));
        assert!(is_skipped("# a comment"));
        assert!(is_skipped("   # indented comment"));
        assert!(!is_skipped("SEND + MORE = MONEY"));
    }

    #[test]
    fn test_labels_are_padded_with_dots() {
        assert_eq!(format!("{:.<15}", format_label(0)), "    #1 ........");
        assert_eq!(format!("{:.<15}", format_label(9)), "    #10 .......");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs {
            puzzles: vec!["I + BB = ILL".to_string()],
            first: false,
            log_level: LogLevel::Warn,
        };

        assert_eq!(args.puzzles, ["I + BB = ILL"]);
        assert!(!args.first);
        assert!(matches!(args.log_level, LogLevel::Warn));
    }
}
