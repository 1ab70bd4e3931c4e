use bench::RangeOp;
use bench::apply_runtime_config_for_size;
use bench::default_rng;
use bench::generate_ops;
use bench::generate_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use lazy_segtree::{Add, Assign, Combiner, Max, Min, Offset, SegmentTree, Sum, Updater};
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 16_384, 262_144, 1_000_000];
const NAIVE_MAX_SIZE: usize = 16_384;
const VALUE_RANGE: std::ops::RangeInclusive<i64> = -1_000_000..=1_000_000;
const UPDATE_RANGE: std::ops::RangeInclusive<i64> = 0..=1_000;

#[derive(Clone, Copy, Debug)]
enum Workload {
    QueryHeavy,
    Mixed,
    UpdateHeavy,
}

impl Workload {
    fn label(self) -> &'static str {
        match self {
            Self::QueryHeavy => "query_heavy",
            Self::Mixed => "mixed",
            Self::UpdateHeavy => "update_heavy",
        }
    }

    fn update_ratio(self) -> f64 {
        match self {
            Self::QueryHeavy => 0.1,
            Self::Mixed => 0.5,
            Self::UpdateHeavy => 0.9,
        }
    }
}

fn bench_tree<M, C, U>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    values: &[i64],
    ops: &[RangeOp],
    combiner: C,
    updater: U,
) where
    M: Measurement,
    C: Combiner<i64> + Copy,
    U: Updater<i64> + Copy,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let mut seg = SegmentTree::new(black_box(values), combiner, updater).unwrap();
            let mut acc = 0_i64;
            for op in ops {
                match op {
                    RangeOp::Update { range, value } => {
                        seg.update(black_box(range.clone()), *value).unwrap();
                    }
                    RangeOp::Query(range) => {
                        acc ^= seg.query(black_box(range.clone())).unwrap();
                    }
                }
            }
            black_box(acc);
        })
    });
}

/// Linear-time reference: sum over the range, add to every element.
fn bench_naive_sum_add<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
    values: &[i64],
    ops: &[RangeOp],
) {
    group.bench_function(BenchmarkId::new("naive_sum_add", size), |bencher| {
        bencher.iter(|| {
            let mut xs = black_box(values).to_vec();
            let mut acc = 0_i64;
            for op in ops {
                match op {
                    RangeOp::Update { range, value } => {
                        for x in &mut xs[range.clone()] {
                            *x = x.wrapping_add(*value);
                        }
                    }
                    RangeOp::Query(range) => {
                        acc ^= xs[range.clone()]
                            .iter()
                            .fold(0_i64, |s, &x| s.wrapping_add(x));
                    }
                }
            }
            black_box(acc);
        })
    });
}

fn bench_lazy_segtree(c: &mut Criterion) {
    let workloads = [Workload::QueryHeavy, Workload::Mixed, Workload::UpdateHeavy];
    let mut rng = default_rng();

    for workload in workloads {
        let mut group = c.benchmark_group(format!("lazy_segtree/workload/{}", workload.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let values = generate_values(&mut rng, size, VALUE_RANGE);
            let ops = generate_ops(&mut rng, size, size, workload.update_ratio(), UPDATE_RANGE);

            bench_tree(&mut group, "sum_add", size, &values, &ops, Sum, Add);
            bench_tree(&mut group, "min_assign", size, &values, &ops, Min, Assign);
            bench_tree(&mut group, "max_offset", size, &values, &ops, Max, Offset);
            if size <= NAIVE_MAX_SIZE {
                bench_naive_sum_add(&mut group, size, &values, &ops);
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_lazy_segtree);
criterion_main!(benches);
