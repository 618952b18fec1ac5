//! Per-generation classification statistics.

use crate::id::GenerationId;
use crate::shape::ShapeKind;
use indexmap::IndexMap;

/// Occurrence counts for one generation's classification pass.
///
/// Counts are keyed in [`ShapeKind::ALL`] order, and every kind is present
/// (zero when nothing matched), so iteration order is stable for reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationStats {
    generation: GenerationId,
    counts: IndexMap<ShapeKind, u64>,
    total: u64,
}

impl GenerationStats {
    /// An all-zero snapshot for `generation`.
    pub fn empty(generation: GenerationId) -> Self {
        Self {
            generation,
            counts: ShapeKind::ALL.iter().map(|&k| (k, 0)).collect(),
            total: 0,
        }
    }

    /// Build a snapshot from per-kind counters indexed by [`ShapeKind::index`].
    ///
    /// The total is the sum of the counters.
    pub fn from_counts(generation: GenerationId, counts: &[u64; ShapeKind::COUNT]) -> Self {
        Self {
            generation,
            counts: ShapeKind::ALL
                .iter()
                .map(|&k| (k, counts[k.index()]))
                .collect(),
            total: counts.iter().sum(),
        }
    }

    /// Generation these counts belong to.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Occurrences of `kind`.
    pub fn count(&self, kind: ShapeKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Occurrences across all kinds.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Share of `kind` in the total, in percent.
    ///
    /// Returns `0.0` when nothing was recognised in this generation.
    pub fn percentage(&self, kind: ShapeKind) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(kind) as f64 / self.total as f64 * 100.0
    }

    /// `(kind, count)` pairs in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeKind, u64)> + '_ {
        self.counts.iter().map(|(&k, &n)| (k, n))
    }
}
