//! Grid storage and grid sources for Census.
//!
//! - [`Grid`]: fixed-size, row-major buffer of [`Cell`](census_core::Cell)s
//! - [`VisitedMask`]: per-generation scratch marking cells already claimed
//!   by a matched shape
//! - [`neighbourhood`]: the bounded 8-neighbour counter (no wraparound)
//! - [`SeedDescription`]: parser for the plain-text initial-state format
//!
//! Random initial grids are built with [`Grid::random`] from a seeded
//! ChaCha8 generator, so a given seed always produces the same grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbourhood;
pub mod seed;
pub mod visited;

pub use grid::{Grid, DEFAULT_LIVE_PROBABILITY};
pub use neighbourhood::{live_neighbours, neighbours, OFFSETS_8};
pub use seed::{SeedDescription, SeedError};
pub use visited::VisitedMask;
