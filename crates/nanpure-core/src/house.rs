//! Houses: the rows, columns, and 3×3 boxes of the board.

use crate::Position;

/// A house (row, column, or 3×3 box).
///
/// Every cell belongs to exactly three houses, and a solved grid contains
/// each digit exactly once per house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// Rows are traversed left to right, columns top to bottom, and boxes in
    /// row-major order within the box.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => {
                Position::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
            }
        }
    }

    /// Returns the nine positions contained in this house.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn positions(self) -> [Position; 9] {
        std::array::from_fn(|i| self.position_from_cell_index(i as u8))
    }
}
