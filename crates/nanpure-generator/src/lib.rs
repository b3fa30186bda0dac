//! Puzzle generation for number-place (Sudoku) boards.
//!
//! This crate builds complete, valid 9×9 solutions with a randomized
//! backtracking search and carves a configured number of cells out of them
//! to produce playable puzzles. Generation is reproducible: every puzzle is
//! identified by a [`PuzzleSeed`], and the same seed always yields the same
//! puzzle.
//!
//! # Examples
//!
//! ```
//! use nanpure_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::with_removals(40);
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.filled_count(), 41);
//! ```
//!
//! The search core is also exposed directly as [`complete`], which extends
//! any satisfiable partial grid into a full solution.

pub use self::{
    backtrack::{UnsatisfiableError, complete, complete_with},
    carve::carve_with,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};

mod backtrack;
mod carve;
mod generator;
mod seed;
