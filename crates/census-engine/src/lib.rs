//! Generation driver and simulation loop for Census.
//!
//! Each generation is one synchronous pass over the grid. Every live,
//! unclaimed cell is offered to the pattern matcher as an anchor, and
//! every cell's successor state is written into a separate buffer. The
//! buffer replaces the grid only after the full scan, so the rule always
//! reads one consistent generation.
//!
//! - [`GenerationDriver`]: one `advance` per generation
//! - [`StatsAggregator`]: per-kind counters, snapshotted and reset once per
//!   generation
//! - [`Simulation`]: owns the grid, drives N generations, feeds a
//!   [`FrameSink`]
//! - [`ReportSink`], [`ChannelSink`], [`StatsLog`], [`NullSink`]: sinks

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod metrics;
pub mod report;
pub mod rules;
pub mod simulation;
pub mod sink;
pub mod stats;

pub use config::{ConfigError, GridSource, InitialState, RunConfig};
pub use driver::{Advance, GenerationDriver};
pub use error::{Stage, StepError};
pub use metrics::StepMetrics;
pub use report::ReportSink;
pub use simulation::{RunSummary, Simulation, StepResult};
pub use sink::{ChannelSink, Frame, FrameSink, NullSink, OwnedFrame, RunInfo, SinkError, StatsLog};
pub use stats::StatsAggregator;
