//! Throughput benchmarks for the Life-like engine's serial and parallel
//! stepping paths, across the same grid-size spread a prior benchmark
//! binary swept: small grids, where per-tile overhead dominates, up to
//! grids large enough that the rayon fan-out pays for itself.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ca_engine::engines::LifeLikeEngine;
use ca_engine::grid::{BitPlane, TileMask};
use ca_engine::rules::{ConwayRule, Rule};

fn random_plane(size: usize, seed: u64) -> BitPlane {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut plane = BitPlane::new(size, size);
    for y in 0..size {
        for x in 0..size {
            if rng.random_bool(0.35) {
                plane.set(x as i64, y as i64, true);
            }
        }
    }
    plane
}

fn full_dirty(size: usize) -> TileMask {
    let mut mask = TileMask::for_colour_grid(size, size);
    let (tile_cols, tile_rows) = mask.tile_dimensions();
    for ty in 0..tile_rows {
        for tx in 0..tile_cols {
            mask.set(tx as i64, ty as i64);
        }
    }
    mask
}

fn bench_serial_vs_parallel(c: &mut Criterion) {
    let combo = ConwayRule.combo_list();
    let engine = LifeLikeEngine::new(&combo);

    let mut group = c.benchmark_group("life_like_step");
    for &size in &[128usize, 512, 1024, 4096] {
        group.throughput(Throughput::Elements((size * size) as u64));

        let current = random_plane(size, size as u64);
        let dirty = full_dirty(size);

        group.bench_with_input(BenchmarkId::new("serial", size), &size, |b, _| {
            b.iter(|| {
                let mut next = BitPlane::new(size, size);
                let mut next_dirty = TileMask::for_colour_grid(size, size);
                engine.step(&current, &mut next, &dirty, &mut next_dirty, false)
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |b, _| {
            b.iter(|| {
                let mut next = BitPlane::new(size, size);
                let mut next_dirty = TileMask::for_colour_grid(size, size);
                engine.step_parallel(&current, &mut next, &dirty, &mut next_dirty, false)
            });
        });
    }
    group.finish();
}

fn bench_sparse_dirty_tracking(c: &mut Criterion) {
    let combo = ConwayRule.combo_list();
    let engine = LifeLikeEngine::new(&combo);
    let size = 1024;

    let mut current = BitPlane::new(size, size);
    let mut dirty = TileMask::for_colour_grid(size, size);
    for &(x, y) in &[(10, 10), (11, 11), (12, 11), (10, 12), (11, 12)] {
        current.set(x, y, true);
        dirty.mark_with_neighbours((x / 16) as i64, (y / 16) as i64);
    }

    let mut group = c.benchmark_group("life_like_step_sparse");
    group.throughput(Throughput::Elements(1));
    group.bench_function("single_glider_tile_only", |b| {
        b.iter(|| {
            let mut next = BitPlane::new(size, size);
            let mut next_dirty = TileMask::for_colour_grid(size, size);
            engine.step(&current, &mut next, &dirty, &mut next_dirty, false)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_serial_vs_parallel, bench_sparse_dirty_tracking);
criterion_main!(benches);
