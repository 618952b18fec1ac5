//! Errors from shape library construction.

use census_core::ShapeKind;
use std::fmt;

/// Errors arising from building a [`PhaseVariant`](crate::PhaseVariant) or
/// a [`ShapeLibrary`](crate::ShapeLibrary).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A variant has no offsets.
    EmptyVariant,
    /// A variant does not contain the anchor offset `(0, 0)`.
    MissingAnchor,
    /// A kind was declared but given no variants.
    NoVariants {
        /// The kind without variants.
        kind: ShapeKind,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVariant => write!(f, "phase variant has no offsets"),
            Self::MissingAnchor => write!(f, "phase variant does not contain anchor offset (0, 0)"),
            Self::NoVariants { kind } => write!(f, "shape kind {kind} has no phase variants"),
        }
    }
}

impl std::error::Error for ShapeError {}
