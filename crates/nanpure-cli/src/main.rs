//! Command-line front end for puzzle solving and placement checks.
//!
//! Results are printed to stdout as single-line JSON objects:
//! `{"solution": …}` for a solved puzzle, `{"valid": …}` (plus a
//! `"conflict"` list when invalid) for a placement check, and
//! `{"error": …}` with a fixed message for every failure. Logging goes to
//! stderr and is configured through `RUST_LOG`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nanpure_core::{Coordinate, Digit, PeerDigits, PuzzleGrid};
use nanpure_solver::BacktrackSolver;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "nanpure", version, about = "Validate, check, and solve 9x9 sudoku puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle and print the completed 81-character string.
    Solve {
        /// Puzzle string: 81 characters, digits 1-9 and `.` for empty cells.
        #[arg(long)]
        puzzle: Option<String>,
    },
    /// Check whether a value can be placed at a coordinate.
    Check {
        /// Puzzle string: 81 characters, digits 1-9 and `.` for empty cells.
        #[arg(long)]
        puzzle: Option<String>,
        /// Cell coordinate: row letter A-I plus column digit 1-9, e.g. `A1`.
        #[arg(long)]
        coordinate: Option<String>,
        /// Candidate value: a single digit 1-9.
        #[arg(long)]
        value: Option<String>,
    },
}

/// A result object in the JSON shape printed to stdout.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Solution {
        solution: String,
    },
    Placement {
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        conflict: Option<Vec<String>>,
    },
    Error {
        error: String,
    },
}

impl Response {
    fn error(message: impl Into<String>) -> Self {
        Response::Error {
            error: message.into(),
        }
    }
}

fn solve_response(puzzle: Option<&str>) -> Response {
    let Some(puzzle) = puzzle else {
        return Response::error("Required field missing");
    };

    let grid: PuzzleGrid = match puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => return Response::error(err.to_string()),
    };
    match BacktrackSolver::new().solve_with_stats(&grid) {
        Ok((solution, stats)) => {
            log::debug!(
                "search finished after {} placements and {} backtracks",
                stats.placements(),
                stats.backtracks()
            );
            Response::Solution {
                solution: solution.to_string(),
            }
        }
        Err(err) => Response::error(err.to_string()),
    }
}

fn check_response(
    puzzle: Option<&str>,
    coordinate: Option<&str>,
    value: Option<&str>,
) -> Response {
    let (Some(puzzle), Some(coordinate), Some(value)) = (puzzle, coordinate, value) else {
        return Response::error("Required field(s) missing");
    };

    let grid: PuzzleGrid = match puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => return Response::error(err.to_string()),
    };
    let coordinate: Coordinate = match coordinate.parse() {
        Ok(coordinate) => coordinate,
        Err(err) => return Response::error(err.to_string()),
    };
    let value: Digit = match value.parse() {
        Ok(value) => value,
        Err(err) => return Response::error(err.to_string()),
    };

    let check = PeerDigits::scan(&grid, coordinate.position()).check(value);
    if check.is_valid() {
        Response::Placement {
            valid: true,
            conflict: None,
        }
    } else {
        Response::Placement {
            valid: false,
            conflict: Some(check.conflicts().iter().map(ToString::to_string).collect()),
        }
    }
}

fn run(cli: Cli) -> Response {
    match cli.command {
        Command::Solve { puzzle } => solve_response(puzzle.as_deref()),
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => check_response(puzzle.as_deref(), coordinate.as_deref(), value.as_deref()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let response = run(Cli::parse());
    let json = serde_json::to_string(&response).expect("response serialization cannot fail");
    println!("{json}");

    match response {
        Response::Error { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
    const SOLUTION: &str =
        "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

    fn to_json(response: &Response) -> serde_json::Value {
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_solve_returns_solution_object() {
        let response = solve_response(Some(PUZZLE));
        assert_eq!(to_json(&response), json!({ "solution": SOLUTION }));
    }

    #[test]
    fn test_solve_missing_field() {
        let response = solve_response(None);
        assert_eq!(to_json(&response), json!({ "error": "Required field missing" }));
    }

    #[test]
    fn test_solve_surfaces_validation_errors() {
        let response = solve_response(Some("too short"));
        assert_eq!(
            to_json(&response),
            json!({ "error": "Expected puzzle to be 81 characters long" })
        );

        let bad = format!("v{}", &PUZZLE[1..]);
        let response = solve_response(Some(&bad));
        assert_eq!(
            to_json(&response),
            json!({ "error": "Invalid characters in puzzle" })
        );
    }

    #[test]
    fn test_solve_unsolvable_puzzle() {
        let contradictory = format!("9{}", &PUZZLE[1..]);
        let response = solve_response(Some(&contradictory));
        assert_eq!(
            to_json(&response),
            json!({ "error": "Puzzle cannot be solved" })
        );
    }

    #[test]
    fn test_check_valid_placement() {
        let response = check_response(Some(PUZZLE), Some("a1"), Some("7"));
        assert_eq!(to_json(&response), json!({ "valid": true }));
    }

    #[test]
    fn test_check_conflicting_placements() {
        let response = check_response(Some(PUZZLE), Some("a1"), Some("1"));
        assert_eq!(
            to_json(&response),
            json!({ "valid": false, "conflict": ["row", "column"] })
        );

        let response = check_response(Some(PUZZLE), Some("a1"), Some("5"));
        assert_eq!(
            to_json(&response),
            json!({ "valid": false, "conflict": ["row", "column", "region"] })
        );

        let response = check_response(Some(PUZZLE), Some("a1"), Some("2"));
        assert_eq!(
            to_json(&response),
            json!({ "valid": false, "conflict": ["region"] })
        );
    }

    #[test]
    fn test_check_missing_fields() {
        for (puzzle, coordinate, value) in [
            (None, Some("a1"), Some("7")),
            (Some(PUZZLE), None, Some("7")),
            (Some(PUZZLE), Some("a1"), None),
            (None, None, None),
        ] {
            let response = check_response(puzzle, coordinate, value);
            assert_eq!(
                to_json(&response),
                json!({ "error": "Required field(s) missing" })
            );
        }
    }

    #[test]
    fn test_check_surfaces_parse_errors_in_field_order() {
        // Puzzle errors win over coordinate and value errors
        let response = check_response(Some("bad"), Some("zz"), Some("0"));
        assert_eq!(
            to_json(&response),
            json!({ "error": "Expected puzzle to be 81 characters long" })
        );

        let response = check_response(Some(PUZZLE), Some("p70"), Some("0"));
        assert_eq!(to_json(&response), json!({ "error": "Invalid coordinate" }));

        let response = check_response(Some(PUZZLE), Some("a1"), Some("0"));
        assert_eq!(to_json(&response), json!({ "error": "Invalid value" }));
    }
}
