//! Frame sinks: consumers of each completed generation.
//!
//! The engine hands every generation to a [`FrameSink`] as a borrowed
//! [`Frame`]. Display and persistence live entirely on the sink side.

use census_core::{GenerationId, GenerationStats};
use census_grid::Grid;
use crossbeam_channel::{Receiver, Sender};
use std::error::Error;
use std::fmt;
use std::io;

/// Shape of a run, announced to the sink before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunInfo {
    /// Grid rows.
    pub rows: u32,
    /// Grid columns.
    pub cols: u32,
    /// Generations the run will compute.
    pub generations: u64,
}

/// One completed generation, borrowed from the simulation.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Id of the new generation.
    pub generation: GenerationId,
    /// The new grid (read-only).
    pub grid: &'a Grid,
    /// Shapes recognised in the grid that produced this generation.
    pub stats: &'a GenerationStats,
}

impl Frame<'_> {
    /// Copy the frame out of the simulation's borrow.
    pub fn to_owned_frame(&self) -> OwnedFrame {
        OwnedFrame {
            generation: self.generation,
            grid: self.grid.clone(),
            stats: self.stats.clone(),
        }
    }
}

/// An owned copy of a [`Frame`], suitable for sending across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedFrame {
    /// Id of the new generation.
    pub generation: GenerationId,
    /// The new grid.
    pub grid: Grid,
    /// Shapes recognised in the grid that produced this generation.
    pub stats: GenerationStats,
}

/// Errors a sink may report back to the simulation.
#[derive(Debug)]
pub enum SinkError {
    /// Writing to the underlying output failed.
    Io(io::Error),
    /// The receiving end of a channel sink was dropped.
    Disconnected,
    /// The sink refused the frame for its own reasons.
    Rejected {
        /// Why the frame was refused.
        reason: String,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Disconnected => write!(f, "frame receiver disconnected"),
            Self::Rejected { reason } => write!(f, "frame rejected: {reason}"),
        }
    }
}

impl Error for SinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Consumer of completed generations.
pub trait FrameSink {
    /// Called once by [`Simulation::run`](crate::Simulation::run) before
    /// the first frame.
    fn begin(&mut self, _run: &RunInfo) -> Result<(), SinkError> {
        Ok(())
    }

    /// Called once per generation, after the new grid is committed.
    fn on_frame(&mut self, frame: &Frame<'_>) -> Result<(), SinkError>;

    /// Called once by [`Simulation::run`](crate::Simulation::run) after the
    /// last frame.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn begin(&mut self, run: &RunInfo) -> Result<(), SinkError> {
        (**self).begin(run)
    }

    fn on_frame(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        (**self).on_frame(frame)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        (**self).finish()
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn on_frame(&mut self, _frame: &Frame<'_>) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Keeps every generation's statistics, dropping the grids.
#[derive(Clone, Debug, Default)]
pub struct StatsLog {
    entries: Vec<GenerationStats>,
}

impl StatsLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots received so far, oldest first.
    pub fn entries(&self) -> &[GenerationStats] {
        &self.entries
    }

    /// Consume the log.
    pub fn into_entries(self) -> Vec<GenerationStats> {
        self.entries
    }
}

impl FrameSink for StatsLog {
    fn on_frame(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        self.entries.push(frame.stats.clone());
        Ok(())
    }
}

/// Forwards an owned copy of each frame over a crossbeam channel.
///
/// Lets a renderer or report writer run on another thread while the
/// simulation itself stays single-threaded.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: Sender<OwnedFrame>,
}

impl ChannelSink {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<OwnedFrame>) -> Self {
        Self { tx }
    }

    /// A sink and receiver over a channel holding at most `capacity`
    /// frames; the simulation blocks when the consumer falls behind.
    pub fn bounded(capacity: usize) -> (Self, Receiver<OwnedFrame>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self { tx }, rx)
    }

    /// A sink and receiver over an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<OwnedFrame>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl FrameSink for ChannelSink {
    fn on_frame(&mut self, frame: &Frame<'_>) -> Result<(), SinkError> {
        self.tx
            .send(frame.to_owned_frame())
            .map_err(|_| SinkError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_parts() -> (Grid, GenerationStats) {
        let grid = Grid::from_live_cells(3, 3, [(1, 1)]).unwrap();
        (grid, GenerationStats::empty(GenerationId(2)))
    }

    #[test]
    fn stats_log_keeps_snapshots() {
        let (grid, stats) = frame_parts();
        let mut log = StatsLog::new();
        let frame = Frame {
            generation: GenerationId(2),
            grid: &grid,
            stats: &stats,
        };
        log.on_frame(&frame).unwrap();
        log.on_frame(&frame).unwrap();
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[0].generation(), GenerationId(2));
    }

    #[test]
    fn channel_sink_forwards_owned_copy() {
        let (grid, stats) = frame_parts();
        let (mut sink, rx) = ChannelSink::unbounded();
        sink.on_frame(&Frame {
            generation: GenerationId(2),
            grid: &grid,
            stats: &stats,
        })
        .unwrap();
        let got = rx.try_recv().unwrap();
        assert_eq!(got.generation, GenerationId(2));
        assert_eq!(got.grid, grid);
        assert_eq!(got.stats, stats);
    }

    #[test]
    fn channel_sink_reports_disconnect() {
        let (grid, stats) = frame_parts();
        let (mut sink, rx) = ChannelSink::bounded(1);
        drop(rx);
        let err = sink
            .on_frame(&Frame {
                generation: GenerationId(1),
                grid: &grid,
                stats: &stats,
            })
            .unwrap_err();
        assert!(matches!(err, SinkError::Disconnected));
    }
}
