//! Informational outcomes of session operations.
//!
//! Session operations are total: precondition violations are silent no-ops,
//! not faults. These enums report what an operation actually did so callers
//! can react (for example, flash the hint button when the budget is
//! exhausted) without error handling.

use derive_more::IsVariant;
use nanpure_core::Digit;

/// Outcome of [`Session::submit_value`](crate::Session::submit_value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum InputOutcome {
    /// The value was parsed and written into the cell.
    Set,
    /// The input failed format validation; the cell's error flag is raised
    /// and the grid is unchanged.
    BadFormat,
    /// The cell is a given and cannot be modified; nothing changed.
    GivenCell,
}

/// Outcome of [`Session::hint`](crate::Session::hint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum HintOutcome {
    /// The solution's digit was written into the selected cell.
    Revealed(Digit),
    /// No cell is selected; nothing changed.
    NoSelection,
    /// The hint budget is exhausted; nothing changed.
    BudgetExhausted,
}
