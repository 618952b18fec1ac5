//! Per-generation visited mask for the classification pass.

use crate::grid::Grid;
use census_core::GridError;

/// Marks cells already attributed to a matched shape.
///
/// Same dimensions as the grid being classified. Reset to all-unmarked at
/// the start of every generation; a marked cell cannot be claimed by a
/// later match in the same generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedMask {
    rows: u32,
    cols: u32,
    marks: Vec<bool>,
}

impl VisitedMask {
    /// An unmarked mask of `rows * cols` cells.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        crate::grid::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            marks: vec![false; rows as usize * cols as usize],
        })
    }

    /// An unmarked mask sized to `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            marks: vec![false; grid.cell_count()],
        }
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Whether this mask can be used with `grid`.
    pub fn matches_dimensions(&self, grid: &Grid) -> bool {
        self.dimensions() == grid.dimensions()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.cols && (y as u32) < self.rows {
            Some(y as usize * self.cols as usize + x as usize)
        } else {
            None
        }
    }

    /// Whether `(x, y)` has been claimed. Coordinates outside the mask are
    /// never visited.
    pub fn is_visited(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.marks[i])
    }

    /// Claim `(x, y)`.
    ///
    /// Marking outside the mask is an invariant fault: matched cells are
    /// always in range.
    pub fn mark(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let i = self
            .index(x, y)
            .ok_or_else(|| GridError::out_of_bounds((x, y), self.rows, self.cols))?;
        self.marks[i] = true;
        Ok(())
    }

    /// Clear every mark.
    pub fn reset(&mut self) {
        self.marks.fill(false);
    }

    /// Number of claimed cells.
    pub fn marked_count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_reset() {
        let mut m = VisitedMask::new(3, 4).unwrap();
        assert!(!m.is_visited(3, 2));
        m.mark(3, 2).unwrap();
        m.mark(3, 2).unwrap();
        assert!(m.is_visited(3, 2));
        assert_eq!(m.marked_count(), 1);
        m.reset();
        assert_eq!(m.marked_count(), 0);
    }

    #[test]
    fn mark_outside_is_error() {
        let mut m = VisitedMask::new(3, 4).unwrap();
        assert_eq!(
            m.mark(4, 0),
            Err(GridError::CoordOutOfBounds {
                x: 4,
                y: 0,
                cols: 4,
                rows: 3
            })
        );
        assert!(!m.is_visited(4, 0));
    }

    #[test]
    fn for_grid_matches() {
        let g = Grid::new(5, 2).unwrap();
        let m = VisitedMask::for_grid(&g);
        assert!(m.matches_dimensions(&g));
        assert!(!VisitedMask::new(2, 5).unwrap().matches_dimensions(&g));
    }
}
