//! Backtracking solver for 9x9 sudoku puzzles.
//!
//! The solver consumes grids from [`nanpure_core`] and fills every empty
//! cell subject to row/column/region uniqueness, or reports that no
//! completion exists. Search order is fixed, so solving is deterministic.
//!
//! # Examples
//!
//! ```
//! use nanpure_solver::BacktrackSolver;
//!
//! let solver = BacktrackSolver::new();
//! let solution = solver.solve_str(
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..",
//! )?;
//! assert_eq!(solution.len(), 81);
//! # Ok::<(), nanpure_solver::SolveError>(())
//! ```

pub use self::backtrack::*;

mod backtrack;
