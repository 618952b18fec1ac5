//! Census: Conway's Game of Life with a per-generation shape census.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Census sub-crates. For most users, adding `census` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use census::prelude::*;
//!
//! // A 5x5 universe holding one vertical blinker.
//! let config = RunConfig::from_description("5 5 4\n2 1\n2 2\n2 3\n");
//! let mut sim = Simulation::new(config).unwrap();
//!
//! let mut log = StatsLog::new();
//! let summary = sim.run(&mut log).unwrap();
//!
//! assert_eq!(summary.final_generation, GenerationId(4));
//! assert!(log.entries().iter().all(|s| s.count(ShapeKind::Blinker) == 1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `census-core` | Cells, coordinates, shape kinds, statistics, errors |
//! | [`grid`] | `census-grid` | Grid storage, neighbour counting, visited mask, seeds |
//! | [`shapes`] | `census-shapes` | Shape library and the priority-ordered matcher |
//! | [`engine`] | `census-engine` | Generation driver, simulation loop, sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`census-core`).
///
/// Contains [`types::Cell`], [`types::ShapeKind`] and its priority order,
/// and the per-generation [`types::GenerationStats`] snapshot.
pub use census_core as types;

/// Grid storage and neighbourhood queries (`census-grid`).
pub use census_grid as grid;

/// Shape library and pattern matching (`census-shapes`).
///
/// [`shapes::ShapeLibrary::standard`] holds the ten built-in kinds;
/// [`shapes::Matcher`] classifies a shape at an anchor cell.
pub use census_shapes as shapes;

/// Generation driver and simulation loop (`census-engine`).
///
/// [`engine::Simulation`] for whole runs, [`engine::GenerationDriver`] for
/// single generations without the bookkeeping.
pub use census_engine as engine;

/// Common imports for typical Census usage.
///
/// ```rust
/// use census::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use census_core::{Cell, Coord, GenerationId, GenerationStats, ShapeKind};

    // Errors
    pub use census_core::GridError;
    pub use census_engine::{ConfigError, SinkError, StepError};

    // Grid
    pub use census_grid::{Grid, SeedDescription};

    // Shapes
    pub use census_shapes::{Matcher, ShapeLibrary, ShapeMatch};

    // Engine
    pub use census_engine::{
        ChannelSink, Frame, FrameSink, GridSource, NullSink, ReportSink, RunConfig, RunSummary,
        Simulation, StatsLog, StepResult,
    };
}
