//! Depth-first backtracking search over empty cells.

use nanpure_core::{Digit, ParsePuzzleError, PeerDigits, Position, PuzzleGrid};

/// Errors produced while solving.
///
/// Malformed puzzle strings are rejected before any search begins, so a
/// string-level solve surfaces the validation messages unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle string failed structural validation.
    #[display("{_0}")]
    Puzzle(ParsePuzzleError),
    /// The puzzle is well-formed but has no valid completion.
    #[display("Puzzle cannot be solved")]
    Unsolvable,
}

/// Counters collected during a solve.
///
/// # Examples
///
/// ```
/// use nanpure_core::PuzzleGrid;
/// use nanpure_solver::BacktrackSolver;
///
/// let grid: PuzzleGrid = ".".repeat(81).parse()?;
/// let (_solution, stats) = BacktrackSolver::new().solve_with_stats(&grid)?;
/// assert!(stats.placements() >= 81);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    placements: usize,
    backtracks: usize,
}

impl SolveStats {
    /// Returns how many candidate placements the search tried.
    #[must_use]
    pub const fn placements(&self) -> usize {
        self.placements
    }

    /// Returns how many placements the search had to undo.
    #[must_use]
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }
}

/// A depth-first backtracking solver.
///
/// Empty cells are visited in fixed row-major order and candidates are tried
/// in ascending digit order, so the same puzzle always produces the same
/// search and the same solution.
///
/// # Examples
///
/// ```
/// use nanpure_core::PuzzleGrid;
/// use nanpure_solver::BacktrackSolver;
///
/// let grid: PuzzleGrid =
///     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
///         .parse()?;
/// let solution = BacktrackSolver::new().solve(&grid)?;
/// assert!(solution.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackSolver
    }

    /// Solves a grid, returning the completed grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] when no completion exists.
    pub fn solve(&self, grid: &PuzzleGrid) -> Result<PuzzleGrid, SolveError> {
        self.solve_with_stats(grid).map(|(solution, _)| solution)
    }

    /// Solves a grid, returning the completed grid and search counters.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] when no completion exists.
    pub fn solve_with_stats(
        &self,
        grid: &PuzzleGrid,
    ) -> Result<(PuzzleGrid, SolveStats), SolveError> {
        let mut stats = SolveStats::default();

        // A given that already clashes with a peer can never be repaired by
        // filling empty cells; failing here skips a doomed search.
        if has_contradiction(grid) {
            return Err(SolveError::Unsolvable);
        }

        let empties: Vec<Position> = grid.empty_positions().collect();
        let mut work = grid.clone();
        if search(&mut work, &empties, 0, &mut stats) {
            Ok((work, stats))
        } else {
            Err(SolveError::Unsolvable)
        }
    }

    /// Validates and solves a flat 81-character puzzle string.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Puzzle`] with the validation error when the
    /// string is malformed, and [`SolveError::Unsolvable`] when the puzzle
    /// has no completion.
    pub fn solve_str(&self, puzzle: &str) -> Result<String, SolveError> {
        let grid: PuzzleGrid = puzzle.parse()?;
        Ok(self.solve(&grid)?.to_string())
    }
}

/// Returns whether any filled cell repeats a digit within one of its houses.
fn has_contradiction(grid: &PuzzleGrid) -> bool {
    Position::ALL.into_iter().any(|pos| {
        grid.get(pos)
            .is_some_and(|digit| PeerDigits::scan(grid, pos).all().contains(digit))
    })
}

/// Fills `empties[depth..]` in order, trying candidates 1-9 ascending.
///
/// Returns `true` when the grid is completely filled. Each failed branch is
/// undone before the next candidate is tried, so on `false` the grid is
/// back in its pre-call state.
fn search(
    grid: &mut PuzzleGrid,
    empties: &[Position],
    depth: usize,
    stats: &mut SolveStats,
) -> bool {
    let Some(&pos) = empties.get(depth) else {
        return true;
    };

    let used = PeerDigits::scan(grid, pos).all();
    for digit in Digit::ALL {
        if used.contains(digit) {
            continue;
        }
        grid.set(pos, Some(digit));
        stats.placements += 1;
        if search(grid, empties, depth + 1, stats) {
            return true;
        }
        grid.set(pos, None);
        stats.backtracks += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PUZZLE: &str =
        "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
    const SOLUTION: &str =
        "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

    #[test]
    fn test_solves_reference_puzzle() {
        let solver = BacktrackSolver::new();
        assert_eq!(solver.solve_str(PUZZLE).unwrap(), SOLUTION);
    }

    #[test]
    fn test_solution_is_complete_and_keeps_givens() {
        let grid: PuzzleGrid = PUZZLE.parse().unwrap();
        let solution = BacktrackSolver::new().solve(&grid).unwrap();

        assert!(solution.is_complete());
        for pos in Position::ALL {
            if let Some(given) = grid.get(pos) {
                assert_eq!(solution.get(pos), Some(given), "given changed at {pos}");
            }
        }
    }

    #[test]
    fn test_solve_is_idempotent() {
        let solver = BacktrackSolver::new();
        assert_eq!(
            solver.solve_str(PUZZLE).unwrap(),
            solver.solve_str(PUZZLE).unwrap()
        );
    }

    #[test]
    fn test_solved_input_comes_back_unchanged() {
        let grid: PuzzleGrid = SOLUTION.parse().unwrap();
        let (solution, stats) = BacktrackSolver::new().solve_with_stats(&grid).unwrap();
        assert_eq!(solution, grid);
        assert_eq!(stats.placements(), 0);
        assert_eq!(stats.backtracks(), 0);
    }

    #[test]
    fn test_contradictory_givens_are_unsolvable() {
        // Two 9s in the top row
        let contradictory = format!("9{}", &PUZZLE[1..]);
        let grid: PuzzleGrid = contradictory.parse().unwrap();
        assert_eq!(
            BacktrackSolver::new().solve(&grid),
            Err(SolveError::Unsolvable)
        );
        assert_eq!(
            SolveError::Unsolvable.to_string(),
            "Puzzle cannot be solved"
        );
    }

    #[test]
    fn test_solve_str_propagates_validation_errors() {
        let solver = BacktrackSolver::new();

        let short = &PUZZLE[1..];
        assert_eq!(
            solver.solve_str(short),
            Err(SolveError::Puzzle(ParsePuzzleError::Length))
        );

        let bad = format!("v{}", &PUZZLE[1..]);
        assert_eq!(
            solver.solve_str(&bad),
            Err(SolveError::Puzzle(ParsePuzzleError::Character))
        );

        // Validation messages pass through unchanged
        assert_eq!(
            SolveError::Puzzle(ParsePuzzleError::Length).to_string(),
            "Expected puzzle to be 81 characters long"
        );
        assert_eq!(
            SolveError::Puzzle(ParsePuzzleError::Character).to_string(),
            "Invalid characters in puzzle"
        );
    }

    #[test]
    fn test_empty_grid_is_solvable() {
        let grid = PuzzleGrid::new();
        let (solution, stats) = BacktrackSolver::new().solve_with_stats(&grid).unwrap();
        assert!(solution.is_complete());
        assert!(stats.placements() >= 81);
    }

    #[test]
    fn test_unsolvable_without_direct_contradiction() {
        // Row A holds 1-8 with both remaining row cells blocked for 9 by
        // their columns: no direct duplicate, but no completion either.
        let puzzle = format!(
            "{}{}{}",
            "1234567..", // row A misses 9 in the last two cells
            ".........",
            ".......9.", // 9 blocks column 7
        );
        let puzzle = format!("{puzzle}{}", ".........".repeat(5));
        let puzzle = format!("{puzzle}........9"); // 9 blocks column 8
        let grid: PuzzleGrid = puzzle.parse().unwrap();
        assert!(!has_contradiction(&grid));
        assert_eq!(
            BacktrackSolver::new().solve(&grid),
            Err(SolveError::Unsolvable)
        );
    }

    proptest! {
        // Whatever the input, a returned solution extends the givens and a
        // failure leaves nothing behind.
        #[test]
        fn prop_solver_never_alters_givens(s in "[1-9.]{81}") {
            let grid: PuzzleGrid = s.parse().unwrap();
            if let Ok(solution) = BacktrackSolver::new().solve(&grid) {
                prop_assert!(solution.is_complete());
                for pos in Position::ALL {
                    if let Some(given) = grid.get(pos) {
                        prop_assert_eq!(solution.get(pos), Some(given));
                    }
                }
            }
        }
    }
}
