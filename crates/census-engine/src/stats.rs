//! Per-generation statistics aggregation.

use census_core::{GenerationId, GenerationStats, ShapeKind};

/// Running per-kind counters for the generation being classified.
///
/// The driver calls [`record`](Self::record) for every match; the
/// simulation takes one [`snapshot`](Self::snapshot) and then
/// [`reset`](Self::reset)s at the end of each generation, so counts never
/// carry across generations.
#[derive(Clone, Debug, Default)]
pub struct StatsAggregator {
    counts: [u64; ShapeKind::COUNT],
    total: u64,
}

impl StatsAggregator {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `kind`.
    pub fn record(&mut self, kind: ShapeKind) {
        self.counts[kind.index()] += 1;
        self.total += 1;
    }

    /// Occurrences of `kind` since the last reset.
    pub fn count(&self, kind: ShapeKind) -> u64 {
        self.counts[kind.index()]
    }

    /// Occurrences across all kinds since the last reset.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Raw counters indexed by [`ShapeKind::index`].
    pub fn counts(&self) -> &[u64; ShapeKind::COUNT] {
        &self.counts
    }

    /// Current counters labelled with `generation`. Does not reset.
    pub fn snapshot(&self, generation: GenerationId) -> GenerationStats {
        GenerationStats::from_counts(generation, &self.counts)
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.counts = [0; ShapeKind::COUNT];
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_kind_and_total() {
        let mut agg = StatsAggregator::new();
        agg.record(ShapeKind::Block);
        agg.record(ShapeKind::Block);
        agg.record(ShapeKind::Glider);
        assert_eq!(agg.count(ShapeKind::Block), 2);
        assert_eq!(agg.count(ShapeKind::Glider), 1);
        assert_eq!(agg.total(), 3);
    }

    #[test]
    fn snapshot_does_not_reset() {
        let mut agg = StatsAggregator::new();
        agg.record(ShapeKind::Toad);
        let s = agg.snapshot(GenerationId(4));
        assert_eq!(s.generation(), GenerationId(4));
        assert_eq!(s.count(ShapeKind::Toad), 1);
        assert_eq!(s.total(), 1);
        assert_eq!(agg.total(), 1);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut agg = StatsAggregator::new();
        for kind in ShapeKind::ALL {
            agg.record(kind);
        }
        agg.reset();
        assert_eq!(agg.total(), 0);
        assert!(agg.counts().iter().all(|&n| n == 0));
        assert_eq!(agg.snapshot(GenerationId(1)), GenerationStats::empty(GenerationId(1)));
    }
}
