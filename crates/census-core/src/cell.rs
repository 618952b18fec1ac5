//! Cell state and coordinate aliases.

/// An absolute grid position `(x, y)`: `x` is the column, `y` the row.
pub type Coord = (i32, i32);

/// A position relative to an anchor cell, `(dx, dy)` on the same axes as [`Coord`].
pub type Offset = (i32, i32);

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Dead = 0,
    /// Occupied cell.
    Alive = 1,
}

impl Cell {
    /// Returns `true` for [`Cell::Alive`].
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
