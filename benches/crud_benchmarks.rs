use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use frbtree::{RBTreeMap, RBTreeSet};
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;

const N: usize = 10_000;

// ─── Key sequences ──────────────────────────────────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Deterministic LCG so runs are comparable.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_orders() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

// ─── Set ────────────────────────────────────────────────────────────────────

fn bench_set_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("set_insert_{order}"));

        group.bench_function(BenchmarkId::new("RBTreeSet", N), |b| {
            b.iter(|| keys.iter().copied().collect::<RBTreeSet<i64>>());
        });
        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().copied().collect::<BTreeSet<i64>>());
        });

        group.finish();
    }
}

fn bench_set_find(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("set_find_{order}"));
        let rb_set: RBTreeSet<i64> = keys.iter().copied().collect();
        let bt_set: BTreeSet<i64> = keys.iter().copied().collect();

        group.bench_function(BenchmarkId::new("RBTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|k| rb_set.find(black_box(*k))).count());
        });
        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter(|| keys.iter().filter(|k| bt_set.contains(black_box(*k))).count());
        });

        group.finish();
    }
}

fn bench_set_erase(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("set_erase_{order}"));

        group.bench_function(BenchmarkId::new("RBTreeSet", N), |b| {
            b.iter_batched(
                || keys.iter().copied().collect::<RBTreeSet<i64>>(),
                |mut set| {
                    for k in &keys {
                        set.erase(k);
                    }
                    set
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
            b.iter_batched(
                || keys.iter().copied().collect::<BTreeSet<i64>>(),
                |mut set| {
                    for k in &keys {
                        set.remove(k);
                    }
                    set
                },
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

// ─── Map ────────────────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_insert_{order}"));

        group.bench_function(BenchmarkId::new("RBTreeMap", N), |b| {
            b.iter(|| {
                let mut map = RBTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });
        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                map
            });
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_get_{order}"));
        let rb_map: RBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
        let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_function(BenchmarkId::new("RBTreeMap", N), |b| {
            b.iter(|| keys.iter().filter_map(|k| rb_map.get(black_box(k))).sum::<i64>());
        });
        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| keys.iter().filter_map(|k| bt_map.get(black_box(k))).sum::<i64>());
        });

        group.finish();
    }
}

fn bench_map_remove(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_remove_{order}"));

        group.bench_function(BenchmarkId::new("RBTreeMap", N), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<RBTreeMap<i64, i64>>(),
                |mut map| {
                    for k in &keys {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
                |mut map| {
                    for k in &keys {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(set_benches, bench_set_insert, bench_set_find, bench_set_erase);

criterion_group!(map_benches, bench_map_insert, bench_map_get, bench_map_remove);

criterion_main!(set_benches, map_benches);
