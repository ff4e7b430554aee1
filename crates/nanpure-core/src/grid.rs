//! Puzzle grid storage and puzzle-string validation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// The character marking an empty cell in flat puzzle strings.
pub const EMPTY_CELL: char = '.';

/// Validation failures for raw puzzle strings.
///
/// The variants display the fixed user-visible messages. Validation rules
/// are applied in order: the length rule always wins over the character
/// rule when both are violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePuzzleError {
    /// The input is not exactly 81 characters long.
    #[display("Expected puzzle to be 81 characters long")]
    Length,
    /// The input contains a character other than `1-9` or `.`.
    #[display("Invalid characters in puzzle")]
    Character,
}

/// A 9x9 puzzle grid: 81 cells, each holding a digit or nothing.
///
/// Cells are addressed by [`Position`] and stored in row-major order, matching
/// the flat 81-character string form the grid parses from and displays as.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, Position, PuzzleGrid};
///
/// let grid: PuzzleGrid = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
///     .parse()?;
///
/// assert_eq!(grid.get(Position::new(2, 0)), Some(Digit::D9));
/// assert_eq!(grid.get(Position::new(0, 0)), None);
/// # Ok::<(), nanpure_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGrid {
    cells: [Option<Digit>; 81],
}

impl PuzzleGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at a position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.get(*pos).is_none())
    }
}

impl Default for PuzzleGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for PuzzleGrid {
    type Err = ParsePuzzleError;

    /// Validates and parses a flat 81-character puzzle string.
    ///
    /// Digits 1-9 are filled cells and `.` is an empty cell. The length rule
    /// is checked before any character is inspected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 81 {
            return Err(ParsePuzzleError::Length);
        }

        let mut cells = [None; 81];
        for (cell, c) in cells.iter_mut().zip(s.chars()) {
            *cell = match c {
                EMPTY_CELL => None,
                _ => Some(Digit::from_char(c).ok_or(ParsePuzzleError::Character)?),
            };
        }
        Ok(Self { cells })
    }
}

impl Display for PuzzleGrid {
    /// Renders the canonical flat 81-character form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = cell.map_or(EMPTY_CELL, Digit::to_char);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
