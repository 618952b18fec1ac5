//! Fixed-size two-dimensional cell buffer.

use census_core::{Cell, Coord, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default probability of a cell starting alive in a random grid.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.2;

/// A bounded grid of cells with fixed dimensions.
///
/// Cells are stored row-major: the cell at `(x, y)` lives at index
/// `y * cols + x`. Dimensions never change after construction; the driver
/// produces a new grid each generation rather than resizing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest accepted value for either dimension.
    ///
    /// Coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-dead grid with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows as usize * cols as usize],
        })
    }

    /// Create a grid whose listed cells are alive and all others dead.
    ///
    /// Every coordinate is validated; the first one outside the grid is
    /// reported as [`GridError::CoordOutOfBounds`]. Nothing is clamped or
    /// silently dropped. Repeated coordinates are harmless.
    pub fn from_live_cells<I>(rows: u32, cols: u32, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Self::new(rows, cols)?;
        for (x, y) in cells {
            grid.set(x, y, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Create a grid where each cell is alive with probability `live_probability`.
    ///
    /// Uses a ChaCha8 generator seeded with `seed`, filled in row-major
    /// order, so the same arguments always yield the same grid.
    pub fn random(
        rows: u32,
        cols: u32,
        live_probability: f64,
        seed: u64,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(GridError::InvalidLiveProbability {
                value: live_probability,
            });
        }
        let mut grid = Self::new(rows, cols)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for cell in grid.cells.iter_mut() {
            *cell = Cell::from(rng.random_bool(live_probability));
        }
        Ok(grid)
    }

    /// An all-dead grid with the same dimensions as `self`.
    pub fn dead_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![Cell::Dead; self.cells.len()],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.cols && (y as u32) < self.rows
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.cols as usize + x as usize)
        } else {
            None
        }
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Checked read of the cell at `(x, y)`.
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.get(x, y)
            .ok_or_else(|| GridError::out_of_bounds((x, y), self.rows, self.cols))
    }

    /// `true` if `(x, y)` is inside the grid and alive.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Checked write of the cell at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), GridError> {
        let i = self
            .index(x, y)
            .ok_or_else(|| GridError::out_of_bounds((x, y), self.rows, self.cols))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| ((i % cols) as i32, (i / cols) as i32))
    }

    /// Row-major cell buffer.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

pub(crate) fn check_dimensions(rows: u32, cols: u32) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid);
    }
    if rows > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: Grid::MAX_DIM,
        });
    }
    if cols > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_is_all_dead() {
        let g = Grid::new(4, 6).unwrap();
        assert_eq!(g.dimensions(), (4, 6));
        assert_eq!(g.cell_count(), 24);
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn new_zero_dimension_returns_error() {
        assert_eq!(Grid::new(0, 5), Err(GridError::EmptyGrid));
        assert_eq!(Grid::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Grid::new(5, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn from_live_cells_uses_x_as_column() {
        let g = Grid::from_live_cells(3, 5, [(4, 0), (0, 2)]).unwrap();
        assert!(g.is_alive(4, 0));
        assert!(g.is_alive(0, 2));
        assert_eq!(g.live_count(), 2);
        assert_eq!(g.cells()[4], Cell::Alive);
        assert_eq!(g.cells()[2 * 5], Cell::Alive);
    }

    #[test]
    fn from_live_cells_rejects_out_of_range() {
        let err = Grid::from_live_cells(3, 5, [(1, 1), (5, 0)]).unwrap_err();
        assert_eq!(
            err,
            GridError::CoordOutOfBounds {
                x: 5,
                y: 0,
                cols: 5,
                rows: 3
            }
        );
        assert!(Grid::from_live_cells(3, 5, [(0, -1)]).is_err());
    }

    #[test]
    fn get_outside_is_none() {
        let g = Grid::new(2, 2).unwrap();
        assert_eq!(g.get(-1, 0), None);
        assert_eq!(g.get(0, 2), None);
        assert_eq!(g.get(1, 1), Some(Cell::Dead));
        assert!(g.cell(2, 0).is_err());
        assert!(!g.is_alive(-1, -1));
    }

    #[test]
    fn set_outside_is_error() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(g.set(2, 2, Cell::Alive).is_err());
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn live_cells_row_major() {
        let g = Grid::from_live_cells(3, 3, [(2, 2), (0, 1), (1, 0)]).unwrap();
        let live: Vec<Coord> = g.live_cells().collect();
        assert_eq!(live, vec![(1, 0), (0, 1), (2, 2)]);
    }

    #[test]
    fn dead_like_keeps_dimensions() {
        let g = Grid::from_live_cells(3, 7, [(1, 1)]).unwrap();
        let d = g.dead_like();
        assert_eq!(d.dimensions(), (3, 7));
        assert_eq!(d.live_count(), 0);
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let a = Grid::random(20, 20, 0.3, 7).unwrap();
        let b = Grid::random(20, 20, 0.3, 7).unwrap();
        let c = Grid::random(20, 20, 0.3, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_extremes() {
        assert_eq!(Grid::random(5, 5, 0.0, 1).unwrap().live_count(), 0);
        assert_eq!(Grid::random(5, 5, 1.0, 1).unwrap().live_count(), 25);
    }

    #[test]
    fn random_rejects_bad_probability() {
        assert!(matches!(
            Grid::random(5, 5, 1.5, 0),
            Err(GridError::InvalidLiveProbability { .. })
        ));
        assert!(matches!(
            Grid::random(5, 5, f64::NAN, 0),
            Err(GridError::InvalidLiveProbability { .. })
        ));
    }

    proptest! {
        #[test]
        fn set_then_get_roundtrip(
            rows in 1u32..12,
            cols in 1u32..12,
            x in 0i32..12,
            y in 0i32..12,
        ) {
            let mut g = Grid::new(rows, cols).unwrap();
            let inside = (x as u32) < cols && (y as u32) < rows;
            prop_assert_eq!(g.set(x, y, Cell::Alive).is_ok(), inside);
            prop_assert_eq!(g.is_alive(x, y), inside);
            prop_assert_eq!(g.live_count(), usize::from(inside));
        }
    }
}
