//! Per-generation metrics.

/// Timing and size data collected during a single generation.
///
/// The simulation populates these after each `step()`; consumers
/// (logging, benchmarks) read them from the returned step result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole generation pass, in microseconds.
    pub total_us: u64,
    /// Live cells in the grid that was scanned.
    pub live_cells: usize,
    /// Shapes recognised in the grid that was scanned.
    pub matches: usize,
}
