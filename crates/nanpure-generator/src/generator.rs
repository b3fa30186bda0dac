//! Puzzle generation facade.

use nanpure_core::DigitGrid;

use crate::{PuzzleSeed, backtrack::random_solution, carve::carve_with};

/// A generated puzzle: the carved problem grid, its solution, and the seed
/// that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The player-facing puzzle grid with `removals` cells erased.
    pub problem: DigitGrid,
    /// The complete solution the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that deterministically reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles by constructing a random full solution and carving a
/// configured number of cells out of it.
///
/// # Examples
///
/// ```
/// use nanpure_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate();
///
/// assert!(puzzle.solution.is_solved());
/// assert_eq!(puzzle.problem.filled_count(), 41);
///
/// // The seed reproduces the puzzle exactly
/// let again = generator.generate_with_seed(puzzle.seed);
/// assert_eq!(again, puzzle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    removals: u8,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Default number of cells erased from the solution.
    pub const DEFAULT_REMOVALS: u8 = 40;

    /// Creates a generator with the default removal count.
    #[must_use]
    pub fn new() -> Self {
        Self::with_removals(Self::DEFAULT_REMOVALS)
    }

    /// Creates a generator erasing `removals` cells per puzzle.
    ///
    /// # Panics
    ///
    /// Panics if `removals > 81`.
    #[must_use]
    pub fn with_removals(removals: u8) -> Self {
        assert!(removals <= 81, "removal count must be 0-81, got {removals}");
        Self { removals }
    }

    /// Returns the configured removal count.
    #[must_use]
    pub const fn removals(&self) -> u8 {
        self.removals
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// Deterministic: equal seeds (and equal removal counts) yield equal
    /// puzzles.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = random_solution(&mut rng);
        let problem = carve_with(&solution, self.removals, &mut rng);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use nanpure_core::Position;

    use super::*;

    #[test]
    fn test_generate_with_seed_is_deterministic() {
        let seed = PuzzleSeed::from_bytes([7; 32]);
        let generator = PuzzleGenerator::new();
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_distinct_seeds_vary_the_puzzle() {
        let generator = PuzzleGenerator::new();
        let a = generator.generate_with_seed(PuzzleSeed::from_bytes([1; 32]));
        let b = generator.generate_with_seed(PuzzleSeed::from_bytes([2; 32]));
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn test_removal_count_bounds() {
        assert_eq!(PuzzleGenerator::new().removals(), 40);
        assert_eq!(PuzzleGenerator::with_removals(81).removals(), 81);
    }

    #[test]
    #[should_panic(expected = "removal count must be 0-81, got 90")]
    fn test_rejects_out_of_range_removals() {
        let _ = PuzzleGenerator::with_removals(90);
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn generated_puzzles_are_consistent(bytes in any::<[u8; 32]>()) {
                let generator = PuzzleGenerator::new();
                let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes));

                prop_assert!(puzzle.solution.is_solved());
                prop_assert_eq!(puzzle.problem.filled_count(), 41);
                for pos in Position::ALL {
                    if let Some(digit) = puzzle.problem.get(pos) {
                        prop_assert_eq!(puzzle.solution.get(pos), Some(digit));
                    }
                }
            }
        }
    }
}
