//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] is the builder-input for a [`Simulation`](crate::Simulation).
//! [`build()`](RunConfig::build) resolves the initial grid and surfaces every
//! input error before the first generation runs.

use std::error::Error;
use std::fmt;

use census_core::{Coord, GridError};
use census_grid::{Grid, SeedDescription, SeedError, DEFAULT_LIVE_PROBABILITY};

// ── GridSource ─────────────────────────────────────────────────────

/// Where the initial live cells come from.
#[derive(Clone, Debug, PartialEq)]
pub enum GridSource {
    /// Explicit `(x, y)` live cells on a `rows × cols` grid.
    Cells(Vec<Coord>),
    /// A seed description. Its header replaces the configured rows,
    /// columns and generation count.
    Description(String),
    /// Each cell alive with probability `live_probability`, from a ChaCha8
    /// stream seeded with `seed`.
    Random {
        /// Probability in `[0, 1]` that a cell starts alive.
        live_probability: f64,
        /// RNG seed.
        seed: u64,
    },
}

// ── RunConfig ──────────────────────────────────────────────────────

/// Everything needed to start a simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Grid rows. Ignored for [`GridSource::Description`].
    pub rows: u32,
    /// Grid columns. Ignored for [`GridSource::Description`].
    pub cols: u32,
    /// Generations to compute. Ignored for [`GridSource::Description`].
    pub generations: u64,
    /// Initial live cells.
    pub source: GridSource,
}

impl Default for RunConfig {
    /// 100 × 100 random grid, 200 generations.
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            generations: 200,
            source: GridSource::Random {
                live_probability: DEFAULT_LIVE_PROBABILITY,
                seed: 0,
            },
        }
    }
}

/// A validated starting point: the initial grid and the run length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialState {
    /// Generation-0 grid.
    pub grid: Grid,
    /// Generations to compute.
    pub generations: u64,
}

impl RunConfig {
    /// A configuration read from seed-description text.
    ///
    /// Parsing is deferred to [`build`](Self::build).
    pub fn from_description(text: impl Into<String>) -> Self {
        Self {
            source: GridSource::Description(text.into()),
            ..Self::default()
        }
    }

    /// Resolve the initial grid.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Seed`] if description text does not parse
    /// - [`ConfigError::Grid`] for zero or oversized dimensions, a seed
    ///   cell outside the grid, or a probability outside `[0, 1]`
    /// - [`ConfigError::ZeroGenerations`] if there is nothing to run
    pub fn build(&self) -> Result<InitialState, ConfigError> {
        let (grid, generations) = match &self.source {
            GridSource::Cells(cells) => (
                Grid::from_live_cells(self.rows, self.cols, cells.iter().copied())?,
                self.generations,
            ),
            GridSource::Description(text) => {
                let seed = SeedDescription::parse(text)?;
                (seed.to_grid()?, seed.generations)
            }
            GridSource::Random {
                live_probability,
                seed,
            } => (
                Grid::random(self.rows, self.cols, *live_probability, *seed)?,
                self.generations,
            ),
        };
        if generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        Ok(InitialState { grid, generations })
    }

    /// Check the configuration without keeping the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while resolving a [`RunConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid construction failed.
    Grid(GridError),
    /// The seed description is malformed.
    Seed(SeedError),
    /// The run would compute no generations.
    ZeroGenerations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Seed(e) => write!(f, "invalid seed description: {e}"),
            Self::ZeroGenerations => write!(f, "generation count must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Seed(e) => Some(e),
            Self::ZeroGenerations => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SeedError> for ConfigError {
    fn from(e: SeedError) -> Self {
        Self::Seed(e)
    }
}
