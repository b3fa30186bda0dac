//! Per-cell state of the working grid.

use derive_more::IsVariant;
use nanpure_core::Digit;

/// The state of one working-grid cell.
///
/// A cell is either a *given* (populated by generation and carving, immutable
/// to the player), *filled* (written by the player or by a hint), or
/// *empty*.
///
/// # Examples
///
/// ```
/// use nanpure_core::Digit;
/// use nanpure_game::CellState;
///
/// let cell = CellState::Given(Digit::D3);
/// assert!(cell.is_given());
/// assert_eq!(cell.as_digit(), Some(Digit::D3));
/// assert_eq!(CellState::Empty.as_digit(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum CellState {
    /// A fixed given cell; the player cannot modify it.
    Given(Digit),
    /// A cell filled by the player or by a hint.
    Filled(Digit),
    /// An empty cell.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit in this cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}
