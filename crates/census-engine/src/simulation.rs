//! The simulation: owns the grid and drives generations into a sink.

use std::time::Instant;

use indexmap::IndexMap;
use log::{debug, error, info, warn};

use census_core::{GenerationId, GenerationStats, ShapeKind};
use census_grid::Grid;
use census_shapes::ShapeLibrary;

use crate::config::{ConfigError, RunConfig};
use crate::driver::GenerationDriver;
use crate::error::StepError;
use crate::metrics::StepMetrics;
use crate::sink::{Frame, FrameSink, RunInfo};
use crate::stats::StatsAggregator;

/// Result of a successful [`Simulation::step`].
#[derive(Clone, Debug)]
pub struct StepResult {
    /// Id of the generation just produced.
    pub generation: GenerationId,
    /// Shapes recognised in the grid the step scanned.
    pub stats: GenerationStats,
    /// Timing and size data for the step.
    pub metrics: StepMetrics,
}

/// Totals for a completed [`Simulation::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations computed by this run.
    pub generations_run: u64,
    /// Id of the last generation produced.
    pub final_generation: GenerationId,
    /// Per-kind occurrences summed over every generation, in listing order.
    pub totals: IndexMap<ShapeKind, u64>,
    /// Sum of `totals`.
    pub grand_total: u64,
}

/// A Game of Life run with per-generation shape census.
///
/// Generation 0 is the initial grid; each [`step`](Self::step) classifies
/// the current grid, replaces it with its successor, and reports the
/// classification under the new generation's id.
///
/// # Example
///
/// ```
/// use census_engine::{GridSource, NullSink, RunConfig, Simulation};
/// use census_core::ShapeKind;
///
/// let config = RunConfig {
///     rows: 10,
///     cols: 10,
///     generations: 3,
///     source: GridSource::Cells(vec![(4, 4), (5, 4), (4, 5), (5, 5)]),
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// let summary = sim.run(&mut NullSink).unwrap();
/// assert_eq!(summary.totals[&ShapeKind::Block], 3);
/// ```
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    driver: GenerationDriver,
    aggregator: StatsAggregator,
    generation: GenerationId,
    generations: u64,
    totals: [u64; ShapeKind::COUNT],
    halted: bool,
}

impl Simulation {
    /// Validate `config` and build the initial grid with the standard
    /// shape library.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        Self::with_library(config, ShapeLibrary::standard())
    }

    /// Like [`new`](Self::new) but classifying against `library`.
    pub fn with_library(config: RunConfig, library: ShapeLibrary) -> Result<Self, ConfigError> {
        let state = config.build()?;
        Self::from_grid_with_library(state.grid, state.generations, library)
    }

    /// Start from an existing grid.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroGenerations`] if `generations` is 0.
    pub fn from_grid(grid: Grid, generations: u64) -> Result<Self, ConfigError> {
        Self::from_grid_with_library(grid, generations, ShapeLibrary::standard())
    }

    /// Like [`from_grid`](Self::from_grid) but classifying against `library`.
    pub fn from_grid_with_library(
        grid: Grid,
        generations: u64,
        library: ShapeLibrary,
    ) -> Result<Self, ConfigError> {
        if generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        let sim = Self::assemble(grid, generations, library);
        info!(
            "simulation ready: {}x{} grid, {} live cells, {} generations",
            sim.grid.rows(),
            sim.grid.cols(),
            sim.grid.live_count(),
            sim.generations,
        );
        Ok(sim)
    }

    fn assemble(grid: Grid, generations: u64, library: ShapeLibrary) -> Self {
        Self {
            grid,
            driver: GenerationDriver::new(library),
            aggregator: StatsAggregator::new(),
            generation: GenerationId(0),
            generations,
            totals: [0; ShapeKind::COUNT],
            halted: false,
        }
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The shape library used for classification.
    pub fn library(&self) -> &ShapeLibrary {
        self.driver.library()
    }

    /// Id of the current grid's generation.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Generations a [`run`](Self::run) computes in total.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Whether an invariant violation has stopped the simulation.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Compute one generation and hand it to `sink`.
    ///
    /// # Errors
    ///
    /// - [`StepError::InvariantViolation`]: the grid is unchanged and the
    ///   simulation halts
    /// - [`StepError::Halted`]: a previous step failed
    /// - [`StepError::Sink`]: the generation was committed but the sink
    ///   refused it
    pub fn step(&mut self, sink: &mut dyn FrameSink) -> Result<StepResult, StepError> {
        if self.halted {
            return Err(StepError::Halted);
        }
        let start = Instant::now();

        let advance = match self.driver.advance(&self.grid, &mut self.aggregator) {
            Ok(a) => a,
            Err(e) => {
                self.aggregator.reset();
                if matches!(e, StepError::InvariantViolation { .. }) {
                    error!("generation {} aborted: {e}", self.generation.next());
                    self.halted = true;
                }
                return Err(e);
            }
        };

        let generation = self.generation.next();
        let stats = self.aggregator.snapshot(generation);
        self.aggregator.reset();
        for (slot, (_, n)) in self.totals.iter_mut().zip(stats.iter()) {
            *slot += n;
        }
        self.grid = advance.next;
        self.generation = generation;

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            live_cells: advance.live_cells,
            matches: advance.matches.len(),
        };
        debug!(
            "generation {generation}: {} shapes among {} live cells in {}us",
            stats.total(),
            metrics.live_cells,
            metrics.total_us,
        );

        let frame = Frame {
            generation,
            grid: &self.grid,
            stats: &stats,
        };
        if let Err(e) = sink.on_frame(&frame) {
            warn!("frame sink rejected generation {generation}: {e}");
            return Err(StepError::Sink(e));
        }

        Ok(StepResult {
            generation,
            stats,
            metrics,
        })
    }

    /// Compute the remaining generations, bracketed by the sink's
    /// [`begin`](FrameSink::begin) and [`finish`](FrameSink::finish).
    ///
    /// Stops at the first error.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> Result<RunSummary, StepError> {
        let remaining = self.generations.saturating_sub(self.generation.0);
        info!(
            "running {remaining} generations from generation {}",
            self.generation
        );
        sink.begin(&RunInfo {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            generations: self.generations,
        })?;

        let first = self.generation;
        for _ in 0..remaining {
            self.step(sink)?;
        }
        sink.finish()?;

        let summary = self.summary(self.generation.0 - first.0);
        info!(
            "run complete at generation {}: {} shapes recognised",
            summary.final_generation, summary.grand_total
        );
        Ok(summary)
    }

    fn summary(&self, generations_run: u64) -> RunSummary {
        RunSummary {
            generations_run,
            final_generation: self.generation,
            totals: ShapeKind::ALL
                .iter()
                .map(|&k| (k, self.totals[k.index()]))
                .collect(),
            grand_total: self.totals.iter().sum(),
        }
    }
}
