//! Game session management for number-place (Sudoku) puzzles.
//!
//! This crate owns the interactive side of the engine: the working grid with
//! per-cell given/filled/empty state, the selection cursor, format-error
//! flags, the undo history, and the hint budget. A presentation layer drives
//! one [`Session`] through its operations and renders from
//! [`SessionSnapshot`] values.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Position;
//! use nanpure_game::Session;
//!
//! let mut session = Session::with_removals(40);
//!
//! let pos = Position::ALL
//!     .into_iter()
//!     .find(|&pos| session.cell(pos).is_empty())
//!     .expect("a carved puzzle has empty cells");
//!
//! session.select(pos);
//! session.submit_value(pos, "5");
//!
//! let snapshot = session.snapshot();
//! assert!(snapshot.can_undo());
//! ```

pub use self::{
    cell_state::CellState,
    outcome::{HintOutcome, InputOutcome},
    session::Session,
    snapshot::SessionSnapshot,
};

mod cell_state;
mod outcome;
mod session;
mod snapshot;
