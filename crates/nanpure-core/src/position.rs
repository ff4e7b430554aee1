//! Board position type.

use std::fmt::{self, Display};

/// A cell position on the 9x9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions also have a linear index 0-80 in row-major order,
/// which is how flat puzzle strings are addressed.
///
/// # Examples
///
/// ```
/// use nanpure_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// assert_eq!(Position::from_index(pos.index()), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// This ordering defines the fixed left-to-right, top-to-bottom scan
    /// order used by the solver.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from its row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Creates a position from a region index and a cell index within the
    /// region (both 0-8, left to right, top to bottom).
    ///
    /// # Panics
    ///
    /// Panics if `region` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_region(region: u8, cell: u8) -> Self {
        assert!(region < 9 && cell < 9);
        Self {
            x: (region % 3) * 3 + cell % 3,
            y: (region / 3) * 3 + cell / 3,
        }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3x3 region containing this position (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn region_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
