//! Shape library and pattern matcher.
//!
//! A [`ShapeLibrary`] maps each [`ShapeKind`](census_core::ShapeKind) to an
//! ordered list of [`PhaseVariant`]s: sets of `(dx, dy)` offsets relative to
//! an anchor cell. The [`Matcher`] tries kinds in
//! [`ShapeKind::PRIORITY`](census_core::ShapeKind::PRIORITY) order at a
//! given anchor and reports the first variant whose every cell is live and
//! unclaimed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod library;
pub mod matcher;
mod standard;

pub use error::ShapeError;
pub use library::{PhaseVariant, ShapeLibrary, ShapeLibraryBuilder};
pub use matcher::{Matcher, ShapeMatch};
