//! Plain-text initial-state descriptions.
//!
//! The format is a header line `<rows> <cols> <generations>` followed by
//! one `<x> <y>` line per live cell. Blank lines are ignored.
//!
//! ```
//! use census_grid::SeedDescription;
//!
//! let seed = SeedDescription::parse("5 5 4\n1 2\n2 2\n3 2\n").unwrap();
//! assert_eq!(seed.generations, 4);
//! let grid = seed.to_grid().unwrap();
//! assert_eq!(grid.live_count(), 3);
//! ```

use crate::grid::Grid;
use census_core::{Coord, GridError};
use std::error::Error;
use std::fmt;

/// Errors from parsing a seed description. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// The text contains no header line.
    MissingHeader,
    /// The header is not three non-negative integers.
    MalformedHeader {
        /// Line the header was read from.
        line: usize,
        /// What went wrong.
        reason: String,
    },
    /// A cell line is not two integers.
    MalformedCell {
        /// Offending line.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "seed description has no header line"),
            Self::MalformedHeader { line, reason } => {
                write!(f, "line {line}: malformed header: {reason}")
            }
            Self::MalformedCell { line, reason } => {
                write!(f, "line {line}: malformed cell: {reason}")
            }
        }
    }
}

impl Error for SeedError {}

/// A parsed initial-state description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedDescription {
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
    /// Number of generations to run.
    pub generations: u64,
    /// Live cells as `(x, y)`, in file order. Not yet bounds-checked.
    pub cells: Vec<Coord>,
}

impl SeedDescription {
    /// Parse a description.
    ///
    /// Only syntax is checked here; coordinates are validated against the
    /// declared dimensions by [`to_grid`](Self::to_grid).
    pub fn parse(text: &str) -> Result<Self, SeedError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (header_line, header) = lines.next().ok_or(SeedError::MissingHeader)?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(SeedError::MalformedHeader {
                line: header_line,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        }
        let header_err = |what: &str, raw: &str| SeedError::MalformedHeader {
            line: header_line,
            reason: format!("{what} '{raw}' is not a non-negative integer"),
        };
        let rows: u32 = fields[0].parse().map_err(|_| header_err("rows", fields[0]))?;
        let cols: u32 = fields[1].parse().map_err(|_| header_err("cols", fields[1]))?;
        let generations: u64 = fields[2]
            .parse()
            .map_err(|_| header_err("generations", fields[2]))?;

        let mut cells = Vec::new();
        for (line, raw) in lines {
            cells.push(parse_cell(line, raw)?);
        }

        Ok(Self {
            rows,
            cols,
            generations,
            cells,
        })
    }

    /// Build the initial grid.
    ///
    /// Fails with [`GridError::CoordOutOfBounds`] on the first coordinate
    /// outside `[0, cols) x [0, rows)`, or with the usual dimension errors.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        Grid::from_live_cells(self.rows, self.cols, self.cells.iter().copied())
    }
}

fn parse_cell(line: usize, raw: &str) -> Result<Coord, SeedError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(SeedError::MalformedCell {
            line,
            reason: format!("expected 'x y', found {} fields", fields.len()),
        });
    }
    let axis = |name: &str, s: &str| {
        s.parse::<i32>().map_err(|_| SeedError::MalformedCell {
            line,
            reason: format!("{name} '{s}' is not an integer"),
        })
    };
    Ok((axis("x", fields[0])?, axis("y", fields[1])?))
}
