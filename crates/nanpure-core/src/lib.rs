//! Core data structures for number-place (Sudoku) puzzles.
//!
//! This crate provides the fundamental types shared by the puzzle generator
//! and the game session: digits, board positions, houses, grids, and compact
//! sets of digits and positions.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of digits 1-9, including text
//!   parsing for player input
//! - [`position`]: board (x, y) coordinates
//! - [`house`]: rows, columns, and 3×3 boxes
//! - [`digit_grid`]: the 9×9 grid of optional digits, with an 81-character
//!   text form
//! - [`digit_set`] / [`position_set`]: bitset containers for digits and
//!   positions
//!
//! # Examples
//!
//! ```
//! use nanpure_core::{Digit, DigitGrid, DigitSet, House, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // Which digits are still unused in the first row?
//! let used: DigitSet = House::Row { y: 0 }
//!     .positions()
//!     .into_iter()
//!     .filter_map(|pos| grid.get(pos))
//!     .collect();
//! assert_eq!(used.len(), 1);
//! assert!(used.contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    digit::{Digit, ParseDigitError},
    digit_grid::{DigitGrid, ParseDigitGridError},
    digit_set::DigitSet,
    house::House,
    position::Position,
    position_set::PositionSet,
};
