//! Benchmark profiles for the Census engine.
//!
//! - [`reference_config`]: 100x100 grid (10K cells), the default run shape
//! - [`stress_config`]: 316x316 grid (~100K cells) for stress testing
//!
//! Both draw their initial population from a seeded ChaCha8 stream, so a
//! given seed always benchmarks the same grid.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use census_engine::{GridSource, RunConfig};
use census_grid::DEFAULT_LIVE_PROBABILITY;

/// Generations per benchmarked run.
pub const BENCH_GENERATIONS: u64 = 50;

/// 100x100 random grid at the default live probability.
pub fn reference_config(seed: u64) -> RunConfig {
    random_config(100, seed)
}

/// 316x316 random grid at the default live probability.
///
/// Same population density as [`reference_config`] at 10x the cell count.
pub fn stress_config(seed: u64) -> RunConfig {
    random_config(316, seed)
}

fn random_config(side: u32, seed: u64) -> RunConfig {
    RunConfig {
        rows: side,
        cols: side,
        generations: BENCH_GENERATIONS,
        source: GridSource::Random {
            live_probability: DEFAULT_LIVE_PROBABILITY,
            seed,
        },
    }
}
