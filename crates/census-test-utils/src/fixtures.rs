//! Literal grid fixtures.
//!
//! Grids are written as ASCII art, one row per line: `#` (or `O`) is a live
//! cell, `.` a dead one. Leading/trailing whitespace and blank lines are
//! ignored, so fixtures can be indented inside raw string literals.

use census_core::{Cell, Coord, Offset};
use census_grid::Grid;

/// Build a grid from ASCII art.
///
/// # Panics
///
/// On ragged rows, unknown characters, or an empty picture.
pub fn grid_from_ascii(art: &str) -> Grid {
    let rows: Vec<&str> = art
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!rows.is_empty(), "empty grid picture");
    let cols = rows[0].chars().count();
    let mut grid = Grid::new(rows.len() as u32, cols as u32).expect("valid dimensions");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), cols, "ragged row {y}: {row:?}");
        for (x, ch) in row.chars().enumerate() {
            let cell = match ch {
                '#' | 'O' => Cell::Alive,
                '.' => Cell::Dead,
                other => panic!("unexpected character {other:?} in row {y}"),
            };
            grid.set(x as i32, y as i32, cell).expect("in bounds");
        }
    }
    grid
}

/// Render a grid back to ASCII art (`#` / `.`), one line per row.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.cell_count() + grid.rows() as usize);
    for y in 0..grid.rows() as i32 {
        for x in 0..grid.cols() as i32 {
            out.push(if grid.is_alive(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Set the cells `anchor + offset` alive for every offset.
///
/// # Panics
///
/// If any cell falls outside the grid.
pub fn place(grid: &mut Grid, anchor: Coord, offsets: &[Offset]) {
    for &(dx, dy) in offsets {
        let (x, y) = (anchor.0 + dx, anchor.1 + dy);
        grid.set(x, y, Cell::Alive)
            .unwrap_or_else(|e| panic!("cannot place ({x}, {y}): {e}"));
    }
}
