use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use rbrank::RedBlackTree;

use crate::{populated_tree, Lfsr};

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [100, 1_000, 10_000] {
        g.throughput(Throughput::Elements(n_values as _)); // Keys inserted per second

        // Unique keys in LFSR order.
        g.bench_function(BenchmarkId::new("random", n_values), |b| {
            b.iter(|| populated_tree(n_values))
        });

        bench_ascending(&mut g, n_values);
        bench_overwrite(&mut g, n_values);
    }
}

/// Ascending keys always link a red right child, so every insert rotates on
/// the way back up.
fn bench_ascending<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    g.bench_function(BenchmarkId::new("ascending", n_values), |b| {
        b.iter(|| {
            let mut t = RedBlackTree::default();
            for k in 0..n_values {
                t.insert(k, 42_usize);
            }
            t
        })
    });
}

/// Replace the value of every key in a populated tree. Overwrites return
/// before any rebalancing.
fn bench_overwrite<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let (t, _) = populated_tree(n_values);

    g.bench_function(BenchmarkId::new("overwrite", n_values), |b| {
        b.iter_batched(
            || (t.clone(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _i in 0..n_values {
                    assert_eq!(t.insert(rand.next(), 24), Some(42));
                }
                t
            },
            BatchSize::LargeInput,
        );
    });
}
