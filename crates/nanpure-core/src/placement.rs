//! Peer-digit extraction and placement conflict checking.

use std::fmt::{self, Display};

use crate::{digit::Digit, digit_set::DigitSet, grid::PuzzleGrid, house::House, position::Position};

/// A group of cells that can conflict with a placement.
///
/// Displays as the lowercase group name (`row`, `column`, `region`) used in
/// conflict reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConflictGroup {
    /// The placement's row already contains the value.
    #[display("row")]
    Row,
    /// The placement's column already contains the value.
    #[display("column")]
    Column,
    /// The placement's 3x3 region already contains the value.
    #[display("region")]
    Region,
}

/// The digits surrounding a cell, grouped by house.
///
/// Each set holds the digits already placed in the cell's row, column, or
/// region, always excluding the cell itself, so a cell's own value never
/// conflicts with itself. Scanning is a pure read of the grid.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Digit, PeerDigits, Position, PuzzleGrid};
///
/// let grid: PuzzleGrid = "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.."
///     .parse()?;
/// let peers = PeerDigits::scan(&grid, Position::new(0, 0));
///
/// assert!(peers.row().contains(Digit::D9));
/// assert!(peers.column().contains(Digit::D8));
/// assert!(!peers.region().contains(Digit::D1));
/// # Ok::<(), nanpure_core::ParsePuzzleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerDigits {
    row: DigitSet,
    column: DigitSet,
    region: DigitSet,
}

impl PeerDigits {
    /// Collects the digits in the three houses containing `pos`, excluding
    /// the cell at `pos` itself.
    #[must_use]
    pub fn scan(grid: &PuzzleGrid, pos: Position) -> Self {
        let [row, column, region] =
            House::of(pos).map(|house| Self::house_digits(grid, house, pos));
        Self {
            row,
            column,
            region,
        }
    }

    fn house_digits(grid: &PuzzleGrid, house: House, except: Position) -> DigitSet {
        let mut digits = DigitSet::EMPTY;
        for &peer in house.positions() {
            if peer == except {
                continue;
            }
            if let Some(digit) = grid.get(peer) {
                digits.insert(digit);
            }
        }
        digits
    }

    /// Returns the digits present elsewhere in the row.
    #[must_use]
    pub const fn row(&self) -> DigitSet {
        self.row
    }

    /// Returns the digits present elsewhere in the column.
    #[must_use]
    pub const fn column(&self) -> DigitSet {
        self.column
    }

    /// Returns the digits present elsewhere in the region.
    #[must_use]
    pub const fn region(&self) -> DigitSet {
        self.region
    }

    /// Returns the union of all three groups.
    ///
    /// This is the set of digits that cannot legally be placed at the
    /// scanned cell, which is exactly what the solver prunes candidates
    /// against.
    #[must_use]
    pub const fn all(&self) -> DigitSet {
        self.row.union(self.column).union(self.region)
    }

    /// Tests a candidate value against all three groups.
    ///
    /// Every group is always tested; the resulting conflict list preserves
    /// the fixed row, column, region order.
    #[must_use]
    pub fn check(&self, value: Digit) -> PlacementCheck {
        let mut conflicts = Vec::new();
        if self.row.contains(value) {
            conflicts.push(ConflictGroup::Row);
        }
        if self.column.contains(value) {
            conflicts.push(ConflictGroup::Column);
        }
        if self.region.contains(value) {
            conflicts.push(ConflictGroup::Region);
        }
        PlacementCheck { conflicts }
    }
}

/// The outcome of testing a value against a cell's peer digits.
///
/// A placement is valid when no group contains the value; otherwise the
/// check lists every violated group, ordered row, column, region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementCheck {
    conflicts: Vec<ConflictGroup>,
}

impl PlacementCheck {
    /// Returns whether the placement introduces no conflict.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Returns the violated groups, ordered row, column, region.
    #[must_use]
    pub fn conflicts(&self) -> &[ConflictGroup] {
        &self.conflicts
    }
}

impl Display for PlacementCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        f.write_str("conflicts with ")?;
        for (i, group) in self.conflicts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(group, f)?;
        }
        Ok(())
    }
}
