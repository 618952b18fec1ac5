//! Errors raised while advancing a generation.

use crate::sink::SinkError;
use census_core::GridError;
use std::error::Error;
use std::fmt;

/// Part of the generation pass that detected an invariant fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Reading the cell under the scan cursor.
    Scan,
    /// Pattern matching at an anchor.
    Classify,
    /// Marking a matched cell as visited.
    MarkVisited,
    /// Evaluating the birth/survival rule.
    Rule,
    /// Writing into the successor buffer.
    Commit,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Scan => "scan",
            Self::Classify => "classify",
            Self::MarkVisited => "mark-visited",
            Self::Rule => "rule",
            Self::Commit => "commit",
        };
        f.write_str(s)
    }
}

/// Errors from [`GenerationDriver::advance`](crate::GenerationDriver::advance)
/// and [`Simulation::step`](crate::Simulation::step).
#[derive(Debug)]
pub enum StepError {
    /// An internal access went out of range. This is a bug in the engine,
    /// not bad input; the simulation halts.
    InvariantViolation {
        /// Where the fault was detected.
        stage: Stage,
        /// The failed access.
        source: GridError,
    },
    /// The frame sink rejected a frame. The generation itself was committed.
    Sink(SinkError),
    /// A previous step hit an invariant violation; no further generations
    /// are computed.
    Halted,
}

impl StepError {
    pub(crate) fn invariant(stage: Stage) -> impl FnOnce(GridError) -> Self {
        move |source| Self::InvariantViolation { stage, source }
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation { stage, source } => {
                write!(f, "invariant violation during {stage}: {source}")
            }
            Self::Sink(e) => write!(f, "frame sink failed: {e}"),
            Self::Halted => write!(f, "simulation halted after an invariant violation"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvariantViolation { source, .. } => Some(source),
            Self::Sink(e) => Some(e),
            Self::Halted => None,
        }
    }
}

impl From<SinkError> for StepError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}
