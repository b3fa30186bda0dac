//! Cell removal: turning a solution into a playable puzzle.

use nanpure_core::{DigitGrid, Position};
use rand::{Rng, RngExt as _};

/// Erases `removals` cells from a complete solution, producing the
/// player-facing puzzle.
///
/// Positions are sampled uniformly at random; a position that is already
/// empty is re-drawn, so exactly `removals` cells end up cleared and exactly
/// `81 - removals` given cells remain.
///
/// No uniqueness-of-solution check is performed: the resulting puzzle may
/// admit completions other than `solution`. Downstream code must only assume
/// that the givens match `solution`, not that `solution` is the only valid
/// answer.
///
/// # Panics
///
/// Panics if `removals > 81` or if `solution` is not completely filled.
#[must_use]
pub fn carve_with<R: Rng>(solution: &DigitGrid, removals: u8, rng: &mut R) -> DigitGrid {
    assert!(removals <= 81, "removal count must be 0-81, got {removals}");
    assert!(
        solution.is_complete(),
        "carving requires a completely filled solution grid"
    );

    let mut puzzle = solution.clone();
    let mut removed = 0;
    while removed < removals {
        let pos = Position::ALL[rng.random_range(0..Position::ALL.len())];
        if puzzle.get(pos).is_some() {
            puzzle.set(pos, None);
            removed += 1;
        }
    }
    puzzle
}
