use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use rbrank::RedBlackTree;

use crate::populated_tree;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("order");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let (t, _) = populated_tree(n_values);

    // Every key in the tree, in sorted order.
    let keys = (0..n_values)
        .map(|i| *t.select(i).expect("rank within tree bounds"))
        .collect::<Vec<_>>();

    bench_select(n_values, g, &t);
    bench_rank(n_values, g, &t, &keys);
    bench_predecessor(n_values, g, &t, &keys);
    bench_successor(n_values, g, &t, &keys);
}

fn bench_select<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &RedBlackTree<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "select",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Queries per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for i in 0..n_values {
                let _ = black_box(t.select(i));
            }
        })
    });
}

macro_rules! key_query_bench {
    (
        $name:ident
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(
                n_values: usize,
                g: &mut BenchmarkGroup<M>,
                t: &RedBlackTree<u16, usize>,
                keys: &[u16],
            )
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Queries per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        for k in keys {
                            black_box(t.$name(k));
                        }
                    })
                });
            }
        }
    };
}

key_query_bench!(rank);
key_query_bench!(predecessor);
key_query_bench!(successor);
