//! Human-facing cell coordinates (`A1`..`I9`).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::position::Position;

/// Error returned when a coordinate token cannot be parsed.
///
/// The message is the fixed user-visible string for malformed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid coordinate")]
pub struct ParseCoordinateError;

/// A board coordinate in its human-facing letter+digit form.
///
/// The letter (`A`-`I`, case-insensitive) names the row and the digit
/// (`1`-`9`) names the column; `A1` is the top-left cell. Internally a
/// coordinate is just a [`Position`].
///
/// # Examples
///
/// ```
/// use nanpure_core::{Coordinate, Position};
///
/// let coordinate: Coordinate = "a1".parse()?;
/// assert_eq!(coordinate.position(), Position::new(0, 0));
/// assert_eq!(coordinate.to_string(), "A1");
///
/// assert!("J1".parse::<Coordinate>().is_err());
/// assert!("A10".parse::<Coordinate>().is_err());
/// # Ok::<(), nanpure_core::ParseCoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    position: Position,
}

impl Coordinate {
    /// Creates a coordinate for a position.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }

    /// Returns the underlying board position.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns the row index (0-8) named by the letter.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.position.y()
    }

    /// Returns the column index (0-8) named by the digit.
    #[must_use]
    pub const fn column(self) -> u8 {
        self.position.x()
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.position.index()
    }
}

impl From<Coordinate> for Position {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.position()
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses a coordinate token: exactly one letter `A`-`I`
    /// (case-insensitive) followed by one digit `1`-`9`.
    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCoordinateError);
        };

        let y = match letter.to_ascii_uppercase() {
            c @ 'A'..='I' => c as u8 - b'A',
            _ => return Err(ParseCoordinateError),
        };
        let x = match digit {
            c @ '1'..='9' => c as u8 - b'1',
            _ => return Err(ParseCoordinateError),
        };
        Ok(Self::new(Position::new(x, y)))
    }
}

impl Display for Coordinate {
    /// Renders the canonical uppercase token, e.g. `A1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.row()) as char;
        write!(f, "{}{}", letter, self.column() + 1)
    }
}
