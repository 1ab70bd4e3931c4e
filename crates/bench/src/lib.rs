//! Shared criterion presets and workload generators for the benchmarks.

use std::ops::{Range, RangeInclusive};
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const SMALL_INPUT_MAX: usize = 4_096;
const MEDIUM_INPUT_MAX: usize = 65_536;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the small, medium or large preset by number of elements.
pub fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= SMALL_INPUT_MAX {
        apply_small_runtime_config(group);
    } else if size <= MEDIUM_INPUT_MAX {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn generate_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// Uniform non-empty half-open range within `0..n`. `n` must be positive.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Range<usize> {
    debug_assert!(n > 0);
    let l = rng.random_range(0..n);
    let r = rng.random_range((l + 1)..=n);
    l..r
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeOp {
    Update { range: Range<usize>, value: i64 },
    Query(Range<usize>),
}

/// `count` operations over `0..n`, each an update with probability
/// `update_ratio`.
pub fn generate_ops<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    count: usize,
    update_ratio: f64,
    values: RangeInclusive<i64>,
) -> Vec<RangeOp> {
    (0..count)
        .map(|_| {
            let range = random_range(&mut *rng, n);
            if rng.random_bool(update_ratio) {
                RangeOp::Update {
                    range,
                    value: rng.random_range(values.clone()),
                }
            } else {
                RangeOp::Query(range)
            }
        })
        .collect()
}
