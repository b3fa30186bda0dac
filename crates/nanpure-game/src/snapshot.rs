//! Read-only view of a session for presentation layers.

use nanpure_core::{Position, PositionSet};

use crate::CellState;

/// An owned, immutable view of the session state.
///
/// Presentation layers take a fresh snapshot after each operation and render
/// from it; the snapshot carries everything a view needs — the working grid
/// with per-cell given/filled/empty tags, the selection, the format-error
/// flags, the remaining hint count, and undo availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub(crate) cells: [CellState; 81],
    pub(crate) selected: Option<Position>,
    pub(crate) format_errors: PositionSet,
    pub(crate) hints_remaining: u8,
    pub(crate) can_undo: bool,
}

impl SessionSnapshot {
    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.board_index()]
    }

    /// Returns the currently selected position, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Returns `true` if the last input at `pos` failed format validation.
    #[must_use]
    pub fn has_format_error(&self, pos: Position) -> bool {
        self.format_errors.contains(pos)
    }

    /// Returns the number of hints still available.
    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    /// Returns `true` if there is at least one edit to undo.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.can_undo
    }
}
