//! Randomized backtracking search over the board.

use derive_more::{Display, Error};
use nanpure_core::{Digit, DigitGrid, DigitSet, House, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Error returned when a grid admits no valid completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("the grid admits no valid completion")]
pub struct UnsatisfiableError;

/// Completes a partial grid into a full valid solution using the
/// thread-local random number generator.
///
/// See [`complete_with`] for details.
///
/// # Errors
///
/// Returns [`UnsatisfiableError`] if no valid completion exists.
pub fn complete(grid: &DigitGrid) -> Result<DigitGrid, UnsatisfiableError> {
    complete_with(grid, &mut rand::rng())
}

/// Completes a partial grid into a full valid solution.
///
/// The search proceeds cell by cell in row-major order, trying the legal
/// candidates of each empty cell in an order shuffled by `rng` and
/// backtracking on exhaustion. Filled cells of the input are preserved.
/// Candidate order only selects among valid completions; it never affects
/// whether one is found.
///
/// # Errors
///
/// Returns [`UnsatisfiableError`] if the input already violates a house
/// constraint or the search exhausts every candidate.
///
/// # Examples
///
/// ```
/// use nanpure_core::DigitGrid;
/// use nanpure_generator::complete;
///
/// let solution = complete(&DigitGrid::new()).unwrap();
/// assert!(solution.is_solved());
/// ```
pub fn complete_with<R: Rng>(
    grid: &DigitGrid,
    rng: &mut R,
) -> Result<DigitGrid, UnsatisfiableError> {
    if has_house_conflict(grid) {
        return Err(UnsatisfiableError);
    }
    let mut work = grid.clone();
    if fill_from(&mut work, 0, rng) {
        Ok(work)
    } else {
        Err(UnsatisfiableError)
    }
}

/// Produces a random full solution.
///
/// Never fails: the empty grid always admits a completion, and the search
/// finds one within recursion depth 81.
pub(crate) fn random_solution<R: Rng>(rng: &mut R) -> DigitGrid {
    match complete_with(&DigitGrid::new(), rng) {
        Ok(solution) => solution,
        Err(UnsatisfiableError) => unreachable!("an empty grid always has a completion"),
    }
}

fn fill_from<R: Rng>(grid: &mut DigitGrid, start: usize, rng: &mut R) -> bool {
    let Some(pos) = next_empty(grid, start) else {
        return true;
    };
    let mut candidates: Vec<Digit> = candidates_at(grid, pos).into_iter().collect();
    candidates.shuffle(rng);
    for digit in candidates {
        grid.set(pos, Some(digit));
        if fill_from(grid, pos.board_index() + 1, rng) {
            return true;
        }
        grid.set(pos, None);
    }
    false
}

fn next_empty(grid: &DigitGrid, start: usize) -> Option<Position> {
    Position::ALL[start..]
        .iter()
        .copied()
        .find(|&pos| grid.get(pos).is_none())
}

fn candidates_at(grid: &DigitGrid, pos: Position) -> DigitSet {
    let mut candidates = DigitSet::FULL;
    for house in pos.houses() {
        for peer in house.positions() {
            if let Some(digit) = grid.get(peer) {
                candidates.remove(digit);
            }
        }
    }
    candidates
}

fn has_house_conflict(grid: &DigitGrid) -> bool {
    House::ALL.into_iter().any(|house| {
        let mut seen = DigitSet::new();
        for pos in house.positions() {
            if let Some(digit) = grid.get(pos) {
                if seen.contains(digit) {
                    return true;
                }
                seen.insert(digit);
            }
        }
        false
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_completes_empty_grid_to_valid_solution() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let solution = complete_with(&DigitGrid::new(), &mut rng).unwrap();
        assert!(solution.is_solved());
    }

    #[test]
    fn test_preserves_filled_cells() {
        let solved: DigitGrid = SOLVED.parse().unwrap();
        let mut partial = solved.clone();
        // Clear one cell; the remaining 80 givens force the original back
        partial.set(Position::new(4, 4), None);

        let mut rng = Pcg64Mcg::seed_from_u64(2);
        let completed = complete_with(&partial, &mut rng).unwrap();
        assert_eq!(completed, solved);
    }

    #[test]
    fn test_rejects_conflicting_givens() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D1));
        grid.set(Position::new(8, 0), Some(Digit::D1));

        let mut rng = Pcg64Mcg::seed_from_u64(3);
        assert_eq!(
            complete_with(&grid, &mut rng),
            Err(UnsatisfiableError)
        );
    }

    #[test]
    fn test_rejects_cell_with_no_candidates() {
        // (0, 0) sees 1-8 in its row and 9 in its column: no candidate
        // remains, yet no house holds a duplicate.
        let mut grid = DigitGrid::new();
        for (i, digit) in Digit::ALL[..8].iter().enumerate() {
            let x = u8::try_from(i + 1).unwrap_or(8);
            grid.set(Position::new(x, 0), Some(*digit));
        }
        grid.set(Position::new(0, 1), Some(Digit::D9));
        assert!(!has_house_conflict(&grid));

        let mut rng = Pcg64Mcg::seed_from_u64(4);
        assert_eq!(
            complete_with(&grid, &mut rng),
            Err(UnsatisfiableError)
        );
    }

    #[test]
    fn test_candidates_exclude_row_column_and_box() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(8, 0), Some(Digit::D1)); // same row as (0, 0)
        grid.set(Position::new(0, 8), Some(Digit::D2)); // same column
        grid.set(Position::new(1, 1), Some(Digit::D3)); // same box

        let candidates = candidates_at(&grid, Position::new(0, 0));
        assert_eq!(candidates.len(), 6);
        for digit in [Digit::D1, Digit::D2, Digit::D3] {
            assert!(!candidates.contains(digit));
        }
    }
}
