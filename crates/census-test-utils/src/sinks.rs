//! Mock frame sinks.
//!
//! - [`RecordingSink`]: keeps an owned copy of everything it is given.
//! - [`FailingSink`]: rejects one chosen generation.

use census_core::{GenerationId, GenerationStats};
use census_engine::{Frame, FrameSink, RunInfo, SinkError};
use census_grid::Grid;

/// One frame as seen by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedFrame {
    pub generation: GenerationId,
    pub grid: Grid,
    pub stats: GenerationStats,
}

/// Records the run announcement, every frame, and whether `finish` ran.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub began: Option<RunInfo>,
    pub frames: Vec<RecordedFrame>,
    pub finished: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-generation totals, in frame order.
    pub fn totals(&self) -> Vec<u64> {
        self.frames.iter().map(|f| f.stats.total()).collect()
    }
}

impl FrameSink for RecordingSink {
    fn begin(&mut self, run: &RunInfo) -> Result<(), SinkError> {
        self.began = Some(*run);
        Ok(())
    }

    fn on_frame(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        self.frames.push(RecordedFrame {
            generation: frame.generation,
            grid: frame.grid.clone(),
            stats: frame.stats.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }
}

/// Accepts frames until generation `fail_at`, which it rejects.
#[derive(Debug)]
pub struct FailingSink {
    fail_at: GenerationId,
    accepted: usize,
}

impl FailingSink {
    pub fn new(fail_at: u64) -> Self {
        Self {
            fail_at: GenerationId(fail_at),
            accepted: 0,
        }
    }

    /// Frames accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

impl FrameSink for FailingSink {
    fn on_frame(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        if frame.generation == self.fail_at {
            return Err(SinkError::Rejected {
                reason: format!("refusing generation {}", frame.generation),
            });
        }
        self.accepted += 1;
        Ok(())
    }
}
