//! The interactive game session.

use nanpure_core::{Digit, DigitGrid, Position, PositionSet};
use nanpure_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

use crate::{CellState, HintOutcome, InputOutcome, SessionSnapshot};

/// One undoable edit: the cell it touched and the value it replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HistoryEntry {
    position: Position,
    previous: Option<Digit>,
}

/// A single-player game session against one generated puzzle.
///
/// The session owns the working grid, the immutable solution, the selection
/// cursor, per-cell format-error flags, the undo history, and the hint
/// budget. All state lives in this one value; callers serialize access by
/// holding the `&mut Session`.
///
/// Every operation is total: malformed input raises a per-cell error flag,
/// and operations whose preconditions do not hold (hint without a
/// selection, undo with empty history, selecting a filled cell) are silent
/// no-ops reported through their return values.
///
/// # Examples
///
/// ```
/// use nanpure_core::Position;
/// use nanpure_game::Session;
///
/// let mut session = Session::with_removals(40);
/// assert_eq!(session.hints_remaining(), 3);
///
/// // Select the first empty cell and fill it
/// let pos = Position::ALL
///     .into_iter()
///     .find(|&pos| session.cell(pos).is_empty())
///     .expect("a carved puzzle has empty cells");
/// session.select(pos);
/// let outcome = session.submit_value(pos, "5");
/// assert!(outcome.is_set());
/// assert!(session.can_undo());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cells: [CellState; 81],
    solution: DigitGrid,
    selected: Option<Position>,
    format_errors: PositionSet,
    history: Vec<HistoryEntry>,
    hints_remaining: u8,
}

impl Session {
    /// Number of hints available at the start of each game.
    pub const INITIAL_HINTS: u8 = 3;

    /// Creates a session from a generated puzzle.
    ///
    /// Every filled cell of the puzzle's problem grid becomes a given cell;
    /// the rest start empty.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle's solution grid is not completely filled, or if
    /// a problem cell disagrees with the solution.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        assert!(
            solution.is_complete(),
            "session requires a completely filled solution grid"
        );

        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                assert!(
                    solution.get(pos) == Some(digit),
                    "problem cell at {pos} disagrees with the solution"
                );
                cells[pos.board_index()] = CellState::Given(digit);
            }
        }

        Self {
            cells,
            solution,
            selected: None,
            format_errors: PositionSet::new(),
            history: Vec::new(),
            hints_remaining: Self::INITIAL_HINTS,
        }
    }

    /// Starts a session on a freshly generated puzzle with `removals` cells
    /// erased.
    ///
    /// # Panics
    ///
    /// Panics if `removals > 81`.
    #[must_use]
    pub fn with_removals(removals: u8) -> Self {
        Self::new(PuzzleGenerator::with_removals(removals).generate())
    }

    /// Starts a session on the puzzle identified by `seed`, for reproducible
    /// games.
    ///
    /// # Panics
    ///
    /// Panics if `removals > 81`.
    #[must_use]
    pub fn with_seed(removals: u8, seed: PuzzleSeed) -> Self {
        Self::new(PuzzleGenerator::with_removals(removals).generate_with_seed(seed))
    }

    /// Abandons the current game and starts a new one with `removals` cells
    /// erased.
    ///
    /// Regenerates the solution and puzzle, clears the selection, error
    /// flags, and history, and resets the hint budget to
    /// [`INITIAL_HINTS`](Self::INITIAL_HINTS).
    ///
    /// # Panics
    ///
    /// Panics if `removals > 81`.
    pub fn new_game(&mut self, removals: u8) {
        *self = Self::with_removals(removals);
    }

    /// Selects or deselects a cell.
    ///
    /// Only an empty cell may be selected. Selecting a filled or given cell,
    /// or the already-selected cell, clears the selection instead.
    pub fn select(&mut self, pos: Position) {
        if self.cell(pos).is_empty() && self.selected != Some(pos) {
            self.selected = Some(pos);
        } else {
            self.selected = None;
        }
    }

    /// Submits raw player input for the cell at `pos`.
    ///
    /// The input must parse as a digit between 1 and 9. On success the digit
    /// is written into the cell, the previous value is recorded for undo,
    /// and the cell's error flag is cleared; the write is **not** checked
    /// against the solution — wrong digits are accepted silently. On a parse
    /// failure the cell's error flag is raised and the grid and history are
    /// left untouched.
    ///
    /// Given cells are immutable; submitting to one changes nothing.
    pub fn submit_value(&mut self, pos: Position, raw_input: &str) -> InputOutcome {
        if self.cell(pos).is_given() {
            return InputOutcome::GivenCell;
        }
        let Ok(digit) = raw_input.parse::<Digit>() else {
            self.format_errors.insert(pos);
            return InputOutcome::BadFormat;
        };

        self.history.push(HistoryEntry {
            position: pos,
            previous: self.cell(pos).as_digit(),
        });
        self.cells[pos.board_index()] = CellState::Filled(digit);
        self.format_errors.remove(pos);
        if self.selected == Some(pos) {
            self.selected = None;
        }
        InputOutcome::Set
    }

    /// Reveals the solution's digit in the currently selected cell.
    ///
    /// Requires a selection and a non-zero hint budget; otherwise nothing
    /// changes. On success the digit is written, the budget is decremented,
    /// and the selection is cleared.
    ///
    /// Hints are deliberately not undoable: no history entry is recorded,
    /// so [`undo`](Self::undo) skips over revealed cells.
    pub fn hint(&mut self) -> HintOutcome {
        let Some(pos) = self.selected else {
            return HintOutcome::NoSelection;
        };
        if self.hints_remaining == 0 {
            return HintOutcome::BudgetExhausted;
        }
        let Some(digit) = self.solution.get(pos) else {
            unreachable!("the solution grid is complete by construction");
        };

        self.cells[pos.board_index()] = CellState::Filled(digit);
        self.hints_remaining -= 1;
        self.selected = None;
        HintOutcome::Revealed(digit)
    }

    /// Reverts the most recent edit, restoring the value the cell held
    /// before it and clearing the cell's error flag.
    ///
    /// Returns `false` (and changes nothing) if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.cells[entry.position.board_index()] = match entry.previous {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
        self.format_errors.remove(entry.position);
        true
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.board_index()]
    }

    /// Returns the stored solution grid.
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the currently selected position, if any.
    ///
    /// The selection, when present, always refers to an empty cell.
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
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_given()).count()
    }

    /// Returns the working grid as a plain digit grid, dropping the
    /// given/filled distinction.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).as_digit());
        }
        grid
    }

    /// Checks if the game is solved: every cell is filled and every row,
    /// column, and box contains each digit exactly once.
    ///
    /// Any valid completion counts, not just the generated solution —
    /// carving performs no uniqueness check, so a puzzle may have several.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.to_digit_grid().is_solved()
    }

    /// Takes an immutable snapshot of the session for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cells: self.cells,
            selected: self.selected,
            format_errors: self.format_errors,
            hints_remaining: self.hints_remaining,
            can_undo: self.can_undo(),
        }
    }
}
