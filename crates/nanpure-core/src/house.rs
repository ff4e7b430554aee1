//! Houses (rows, columns, 3x3 regions) and their precomputed position tables.
//!
//! The tables in this module are the shared sector map of the board: the
//! fixed grouping of the 81 cells into rows, columns, and regions. They are
//! built once in `const` context and referenced read-only by both placement
//! checking and the solver, so no synchronization is ever needed.

use crate::position::Position;

/// Positions of each row, indexed by `y`.
static ROW_POSITIONS: [[Position; 9]; 9] = {
    let mut table = [[Position::new(0, 0); 9]; 9];
    let mut y = 0;
    #[expect(clippy::cast_possible_truncation)]
    while y < 9 {
        let mut i = 0;
        while i < 9 {
            table[y][i] = Position::new(i as u8, y as u8);
            i += 1;
        }
        y += 1;
    }
    table
};

/// Positions of each column, indexed by `x`.
static COLUMN_POSITIONS: [[Position; 9]; 9] = {
    let mut table = [[Position::new(0, 0); 9]; 9];
    let mut x = 0;
    #[expect(clippy::cast_possible_truncation)]
    while x < 9 {
        let mut i = 0;
        while i < 9 {
            table[x][i] = Position::new(x as u8, i as u8);
            i += 1;
        }
        x += 1;
    }
    table
};

/// Positions of each 3x3 region, indexed by region index.
static REGION_POSITIONS: [[Position; 9]; 9] = {
    let mut table = [[Position::new(0, 0); 9]; 9];
    let mut region = 0;
    #[expect(clippy::cast_possible_truncation)]
    while region < 9 {
        let mut cell = 0;
        while cell < 9 {
            table[region][cell] = Position::from_region(region as u8, cell as u8);
            cell += 1;
        }
        region += 1;
    }
    table
};

/// A sudoku house (row, column, or 3x3 region).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 region identified by its index (0-8, left to right, top to bottom).
    Region {
        /// Region index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all houses in row, column, region order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Region { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing a position, in row, column,
    /// region order.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Region {
                index: pos.region_index(),
            },
        ]
    }

    /// Returns all positions contained in this house.
    #[must_use]
    pub fn positions(self) -> &'static [Position; 9] {
        match self {
            House::Row { y } => &ROW_POSITIONS[y as usize],
            House::Column { x } => &COLUMN_POSITIONS[x as usize],
            House::Region { index } => &REGION_POSITIONS[index as usize],
        }
    }
}
