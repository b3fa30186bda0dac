//! The 9×9 grid of optional digits.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 grid of optional digits.
///
/// Cells are addressed by [`Position`]; `None` denotes an empty cell. The
/// same type represents solution grids (fully populated) and puzzle grids
/// (partially populated).
///
/// # Text format
///
/// [`Display`](fmt::Display) and [`FromStr`] use an 81-character row-major
/// form with `.` for empty cells:
///
/// ```
/// use nanpure_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// assert_eq!(grid.to_string().len(), 81);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.board_index()]
    }

    /// Sets or clears the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.board_index()] = digit;
    }

    /// Returns the number of non-empty cells (0-81).
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the grid is a valid solution: every cell is filled
    /// and every row, column, and box contains each digit exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::DigitGrid;
    ///
    /// let solved: DigitGrid =
    ///     "185362947793148526246795183564239871931874265827516394318427659672951438459683712"
    ///         .parse()
    ///         .unwrap();
    /// assert!(solved.is_solved());
    /// assert!(!DigitGrid::new().is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete()
            && House::ALL.into_iter().all(|house| {
                let digits: DigitSet = house
                    .positions()
                    .into_iter()
                    .filter_map(|pos| self.get(pos))
                    .collect();
                digits == DigitSet::FULL
            })
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.board_index()]
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Error returned when parsing an invalid grid text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseDigitGridError {
    /// The text is not exactly 81 characters long.
    #[display("grid text must be 81 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The text contains a character other than `1`-`9` and `.`.
    #[display("invalid character {_0:?} in grid text")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 81 {
            return Err(ParseDigitGridError::InvalidLength(count));
        }
        let mut grid = Self::new();
        for (pos, ch) in Position::ALL.into_iter().zip(s.chars()) {
            let cell = match ch {
                '.' => None,
                '1'..='9' => ch
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::try_from_value),
                _ => return Err(ParseDigitGridError::InvalidCharacter(ch)),
            };
            grid.set(pos, cell);
        }
        Ok(grid)
    }
}
