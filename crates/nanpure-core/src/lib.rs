//! Core data structures and checks for 9x9 sudoku puzzles.
//!
//! This crate covers everything except solving:
//!
//! - [`digit`]: type-safe digits 1-9 and value-token parsing
//! - [`digit_set`]: compact sets of digits for conflict scans
//! - [`position`] and [`house`]: board geometry and the precomputed
//!   row/column/region tables shared by checking and solving
//! - [`grid`]: puzzle storage plus validation of flat 81-character strings
//! - [`coordinate`]: parsing of human-facing `A1`-style cell coordinates
//! - [`placement`]: peer-digit extraction and placement conflict checking
//!
//! All operations are pure functions over in-memory values; the only shared
//! state is the static house tables, which are immutable and safe to use
//! from any number of threads.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Coordinate, Digit, PeerDigits, PuzzleGrid};
//!
//! let puzzle =
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
//! let grid: PuzzleGrid = puzzle.parse()?;
//! let coordinate: Coordinate = "a1".parse()?;
//!
//! let peers = PeerDigits::scan(&grid, coordinate.position());
//! assert!(peers.check(Digit::D7).is_valid());
//! assert!(!peers.check(Digit::D5).is_valid());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod coordinate;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod placement;
pub mod position;

// Re-export commonly used types
pub use self::{
    coordinate::{Coordinate, ParseCoordinateError},
    digit::{Digit, ParseDigitError},
    digit_set::DigitSet,
    grid::{ParsePuzzleError, PuzzleGrid},
    house::House,
    placement::{ConflictGroup, PeerDigits, PlacementCheck},
    position::Position,
};
