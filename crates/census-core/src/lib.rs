//! Core types for the Census simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: cell states,
//! shape kinds and their matching priority, generation identifiers, the
//! per-generation statistics snapshot, and the grid error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod shape;
pub mod stats;

pub use cell::{Cell, Coord, Offset};
pub use error::GridError;
pub use id::GenerationId;
pub use shape::{ShapeCategory, ShapeKind};
pub use stats::GenerationStats;
