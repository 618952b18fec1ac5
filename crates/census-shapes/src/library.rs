//! Shape templates: phase variants grouped by shape kind.
//!
//! Still lifes own a single [`PhaseVariant`]; oscillators and travelling
//! shapes own one variant per phase of their cycle. The library is
//! read-only once built.
//!
//! Constructed either from the canonical table via
//! [`ShapeLibrary::standard`] or piecewise via [`ShapeLibrary::builder`].

use crate::error::ShapeError;
use crate::standard;
use census_core::{Offset, ShapeKind};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// One phase of a shape: offsets relative to the anchor cell `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseVariant {
    offsets: SmallVec<[Offset; 12]>,
}

impl PhaseVariant {
    /// Build a variant from `(dx, dy)` offsets, kept in the given order.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::EmptyVariant`] if `offsets` is empty
    /// - [`ShapeError::MissingAnchor`] if `(0, 0)` is not among them
    pub fn new(offsets: &[Offset]) -> Result<Self, ShapeError> {
        if offsets.is_empty() {
            return Err(ShapeError::EmptyVariant);
        }
        if !offsets.contains(&(0, 0)) {
            return Err(ShapeError::MissingAnchor);
        }
        Ok(Self {
            offsets: SmallVec::from_slice(offsets),
        })
    }

    /// Offsets in declaration order.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Number of offsets, duplicates included.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`: construction rejects empty variants.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Read-only mapping from shape kind to its ordered phase variants.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    entries: IndexMap<ShapeKind, Vec<PhaseVariant>>,
}

impl ShapeLibrary {
    /// The canonical library: all ten kinds with their phase offsets.
    pub fn standard() -> Self {
        let entries = standard::TABLE
            .iter()
            .map(|&(kind, phases)| {
                let variants = phases
                    .iter()
                    .map(|offsets| PhaseVariant {
                        offsets: SmallVec::from_slice(offsets),
                    })
                    .collect();
                (kind, variants)
            })
            .collect();
        Self { entries }
    }

    /// Start an empty library.
    pub fn builder() -> ShapeLibraryBuilder {
        ShapeLibraryBuilder {
            entries: IndexMap::new(),
        }
    }

    /// Variants of `kind` in the order they are tried. Empty if the library
    /// does not know `kind`.
    pub fn variants(&self, kind: ShapeKind) -> &[PhaseVariant] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Kinds present in the library, in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        self.entries.keys().copied()
    }

    /// Total number of variants across all kinds.
    pub fn variant_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl Default for ShapeLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`ShapeLibrary`].
pub struct ShapeLibraryBuilder {
    entries: IndexMap<ShapeKind, Vec<PhaseVariant>>,
}

impl ShapeLibraryBuilder {
    /// Declare `kind` without adding a variant yet.
    pub fn kind(mut self, kind: ShapeKind) -> Self {
        self.entries.entry(kind).or_default();
        self
    }

    /// Append a phase variant to `kind`.
    pub fn variant(mut self, kind: ShapeKind, variant: PhaseVariant) -> Self {
        self.entries.entry(kind).or_default().push(variant);
        self
    }

    /// Build the library.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NoVariants`] for the first declared kind that
    /// has no variants.
    pub fn build(self) -> Result<ShapeLibrary, ShapeError> {
        if let Some((&kind, _)) = self.entries.iter().find(|(_, v)| v.is_empty()) {
            return Err(ShapeError::NoVariants { kind });
        }
        Ok(ShapeLibrary {
            entries: self.entries,
        })
    }
}
