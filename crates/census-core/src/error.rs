//! Error type for grid construction and checked cell access.
//!
//! The same type serves two roles. At startup it reports configuration
//! problems (a seed coordinate outside the declared dimensions). During a
//! generation it reports invariant faults (an internal access that should
//! have been in range); the engine wraps those in its own step error.

use crate::cell::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or checked cell access.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// Column of the offending coordinate.
        x: i32,
        /// Row of the offending coordinate.
        y: i32,
        /// Number of columns in the grid.
        cols: u32,
        /// Number of rows in the grid.
        rows: u32,
    },
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A dimension does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// Two buffers that must share dimensions do not.
    DimensionMismatch {
        /// `(rows, cols)` that were expected.
        expected: (u32, u32),
        /// `(rows, cols)` that were found.
        found: (u32, u32),
    },
    /// Random fill probability is NaN or outside `[0, 1]`.
    InvalidLiveProbability {
        /// The rejected value.
        value: f64,
    },
}

impl GridError {
    /// Shorthand for [`GridError::CoordOutOfBounds`].
    pub fn out_of_bounds(coord: Coord, rows: u32, cols: u32) -> Self {
        Self::CoordOutOfBounds {
            x: coord.0,
            y: coord.1,
            cols,
            rows,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { x, y, cols, rows } => write!(
                f,
                "coordinate ({x}, {y}) out of bounds: x must be in [0, {cols}), y in [0, {rows})"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::InvalidLiveProbability { value } => {
                write!(f, "live probability must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for GridError {}
