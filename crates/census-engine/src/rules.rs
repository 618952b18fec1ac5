//! Birth/survival rule (B3/S23).

use census_core::{Cell, GridError};
use census_grid::{live_neighbours, Grid};

/// Successor state for a cell in state `current` with `live_neighbours`
/// live neighbours.
///
/// A live cell survives with 2 or 3 neighbours; a dead cell is born with
/// exactly 3. Everything else is dead.
pub fn apply_rule(current: Cell, live_neighbours: u8) -> Cell {
    match (current, live_neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Successor state of the cell at `(x, y)`, read from `grid` only.
///
/// `grid` must be the unmodified current generation; callers write the
/// result into a separate buffer.
///
/// # Errors
///
/// [`GridError::CoordOutOfBounds`] if `(x, y)` is outside the grid.
pub fn next_state(grid: &Grid, x: i32, y: i32) -> Result<Cell, GridError> {
    let current = grid.cell(x, y)?;
    Ok(apply_rule(current, live_neighbours(grid, x, y)))
}
