use std::fmt;

use strum::{EnumIter, FromRepr, VariantArray};

/// One of the four elementary moves, in the order candidates are proposed
#[derive(EnumIter, VariantArray, FromRepr, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Move {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

/// Coordinates of a cell as `(row, col)`
///
/// A `Position` carries no bounds of its own, it can point anywhere, including off the
/// grid. Checking legality is the job of the [`Maze`](super::Maze) it is used with.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Step one column, decrementing for a positive `direction` and incrementing otherwise
    ///
    /// Only the sign of `direction` matters. Note the inversion: a positive input moves
    /// towards column 0. Coordinates saturate at the `i32` limits.
    pub fn horizontal_move<D: PartialOrd + Default>(&self, direction: D) -> Self {
        Self::new(self.row, self.col.saturating_add(unit_step(direction)))
    }

    /// Step one row, decrementing for a positive `direction` and incrementing otherwise
    ///
    /// Same sign convention as [`horizontal_move`](Self::horizontal_move).
    pub fn vertical_move<D: PartialOrd + Default>(&self, direction: D) -> Self {
        Self::new(self.row.saturating_add(unit_step(direction)), self.col)
    }

    /// Apply a named [`Move`]
    pub fn step(&self, mv: Move) -> Self {
        match mv {
            Move::Left => self.horizontal_move(1),
            Move::Right => self.horizontal_move(-1),
            Move::Up => self.vertical_move(1),
            Move::Down => self.vertical_move(-1),
        }
    }
}

// Positive input steps towards the origin.
fn unit_step<D: PartialOrd + Default>(direction: D) -> i32 {
    if direction > D::default() {
        -1
    } else {
        1
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.col)
    }
}
