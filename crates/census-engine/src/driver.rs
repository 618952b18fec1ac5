//! Single-generation driver: classification and rule evaluation in one scan.

use crate::error::{Stage, StepError};
use crate::rules;
use crate::stats::StatsAggregator;
use census_grid::{Grid, VisitedMask};
use census_shapes::{Matcher, ShapeLibrary, ShapeMatch};

/// Output of one [`GenerationDriver::advance`] call.
#[derive(Clone, Debug)]
pub struct Advance {
    /// The successor grid.
    pub next: Grid,
    /// Shapes recognised in the scanned grid, in the order their anchors
    /// were reached (row-major). Their cell sets are pairwise disjoint.
    pub matches: Vec<ShapeMatch>,
    /// Live cells in the scanned grid.
    pub live_cells: usize,
}

/// Computes one generation at a time.
///
/// Owns the shape library and the visited-mask scratch buffer. The mask is
/// reset at the start of every call and never outlives the pass in any
/// observable way; the driver keeps no grid state between calls.
#[derive(Debug)]
pub struct GenerationDriver {
    library: ShapeLibrary,
    visited: Option<VisitedMask>,
}

impl GenerationDriver {
    /// A driver that classifies against `library`.
    pub fn new(library: ShapeLibrary) -> Self {
        Self {
            library,
            visited: None,
        }
    }

    /// The shape library in use.
    pub fn library(&self) -> &ShapeLibrary {
        &self.library
    }

    /// Scan `grid` once in row-major order.
    ///
    /// For every cell: if it is live and unclaimed, try to classify a shape
    /// anchored there, recording the kind in `stats` and claiming its cells;
    /// then evaluate the rule against `grid` and write the result into a
    /// fresh successor buffer. `grid` itself is never modified.
    ///
    /// # Errors
    ///
    /// [`StepError::InvariantViolation`] if any internal access goes out of
    /// range. `stats` may then hold partial counts for this generation.
    pub fn advance(
        &mut self,
        grid: &Grid,
        stats: &mut StatsAggregator,
    ) -> Result<Advance, StepError> {
        let mut visited = match self.visited.take() {
            Some(mut mask) if mask.matches_dimensions(grid) => {
                mask.reset();
                mask
            }
            _ => VisitedMask::for_grid(grid),
        };

        let matcher = Matcher::new(&self.library);
        let mut next = grid.dead_like();
        let mut matches = Vec::new();
        let mut live_cells = 0;

        for y in 0..grid.rows() as i32 {
            for x in 0..grid.cols() as i32 {
                let cell = grid.cell(x, y).map_err(StepError::invariant(Stage::Scan))?;

                if cell.is_alive() {
                    live_cells += 1;
                    if !visited.is_visited(x, y) {
                        let found = matcher
                            .classify(grid, &visited, x, y)
                            .map_err(StepError::invariant(Stage::Classify))?;
                        if let Some(m) = found {
                            stats.record(m.kind);
                            for &(cx, cy) in &m.cells {
                                visited
                                    .mark(cx, cy)
                                    .map_err(StepError::invariant(Stage::MarkVisited))?;
                            }
                            matches.push(m);
                        }
                    }
                }

                let state =
                    rules::next_state(grid, x, y).map_err(StepError::invariant(Stage::Rule))?;
                next.set(x, y, state)
                    .map_err(StepError::invariant(Stage::Commit))?;
            }
        }

        self.visited = Some(visited);
        Ok(Advance {
            next,
            matches,
            live_cells,
        })
    }
}

impl Default for GenerationDriver {
    fn default() -> Self {
        Self::new(ShapeLibrary::standard())
    }
}
