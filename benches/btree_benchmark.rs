//! Criterion benchmarks for the B-tree public operations.
//!
//! Three measurements: random-key insertion into a growing tree, point
//! lookups against pre-built trees of increasing size, and draining a
//! pre-built tree in shuffled order.

use btree_index::BTree;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Wide nodes keep the tree shallow; matches a disk-page-sized fan-out.
const MIN_DEGREE: usize = 50;

fn bench_insertion(c: &mut Criterion) {
    c.bench_function("btree/insert_random", |b| {
        let mut rng = StdRng::seed_from_u64(0xB7EE);
        let mut tree = BTree::new(MIN_DEGREE).unwrap();
        b.iter(|| {
            let key: u32 = rng.gen_range(1..1_000_000);
            black_box(tree.insert(key));
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/search");
    for size in [1u32 << 10, 1 << 14, 1 << 17] {
        let mut tree = BTree::new(MIN_DEGREE).unwrap();
        for key in 0..size {
            tree.insert(key);
        }
        let mut rng = StdRng::seed_from_u64(0x5EA7C4);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| {
                let key = rng.gen_range(0..size);
                black_box(tree.get(&key));
            });
        });
    }
    group.finish();
}

fn bench_deletion(c: &mut Criterion) {
    let mut group = c.benchmark_group("btree/remove_all");
    for size in [1u32 << 10, 1 << 13] {
        let mut tree = BTree::new(MIN_DEGREE).unwrap();
        let mut keys: Vec<u32> = (0..size).collect();
        for &key in &keys {
            tree.insert(key);
        }
        keys.shuffle(&mut StdRng::seed_from_u64(0xDE1E7E));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || (tree.clone(), keys.clone()),
                |(mut tree, keys)| {
                    for key in keys {
                        black_box(tree.remove(&key));
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertion, bench_search, bench_deletion);
criterion_main!(benches);
