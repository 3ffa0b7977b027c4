// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crossroads_grid::{Category, CategorySet, OccupancyGrid, RectObject};

const WORLD: usize = 256;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> i64 {
        (self.next_u64() % n) as i64
    }
}

/// Non-overlapping cars on a regular lattice.
fn gen_parked_cars(n: usize, cell: i64) -> Vec<RectObject> {
    let mut out = Vec::with_capacity(n * n);
    for x in 0..n as i64 {
        for y in 0..n as i64 {
            let r = RectObject::from_origin_size(Category::Car, x * cell, y * cell, cell, cell)
                .expect("lattice cells are valid");
            out.push(r);
        }
    }
    out
}

/// Randomly placed cars of a fixed size; some overlap.
fn gen_random_cars(count: usize, length: i64, height: i64) -> Vec<RectObject> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let span_x = (WORLD as i64 - length) as u64;
    let span_y = (WORLD as i64 - height) as u64;
    for _ in 0..count {
        let x = rng.below(span_x);
        let y = rng.below(span_y);
        let category = if rng.next_u64() % 4 == 0 {
            Category::Lane
        } else {
            Category::Car
        };
        out.push(
            RectObject::from_origin_size(category, x, y, length, height)
                .expect("random cars stay inside the world"),
        );
    }
    out
}

fn filled(rects: &[RectObject]) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(WORLD, WORLD);
    for r in rects {
        grid.insert(*r).expect("benchmark rects fit the world");
    }
    grid
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[16usize, 32, 64] {
        let cell = (WORLD / n) as i64;
        let rects = gen_parked_cars(n, cell);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("parked_n{}", n), |b| {
            b.iter_batched(
                || OccupancyGrid::new(WORLD, WORLD),
                |mut grid| {
                    for r in &rects {
                        let _ = grid.insert(*r);
                    }
                    black_box(grid.count(Category::Car));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_clear(c: &mut Criterion) {
    let rects = gen_random_cars(200, 6, 3);
    c.bench_function("clear_256", |b| {
        b.iter_batched(
            || filled(&rects),
            |mut grid| {
                grid.clear();
                black_box(grid.len());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflicts");
    for &count in &[50usize, 100, 200, 400] {
        let grid = filled(&gen_random_cars(count, 6, 3));
        group.throughput(Throughput::Elements((count * count) as u64));
        group.bench_function(format!("all_n{}", count), |b| {
            b.iter(|| black_box(grid.conflicts().len()))
        });
        group.bench_function(format!("cars_only_n{}", count), |b| {
            b.iter(|| black_box(grid.conflicts_filtered(CategorySet::CAR).len()))
        });
        group.bench_function(format!("any_n{}", count), |b| {
            b.iter(|| black_box(grid.has_conflicts()))
        });
    }
    group.finish();
}

fn bench_dump(c: &mut Criterion) {
    let grid = filled(&gen_random_cars(200, 6, 3));
    c.bench_function("dump_256", |b| b.iter(|| black_box(grid.dump().len())));
}

criterion_group!(
    benches,
    bench_insert,
    bench_clear,
    bench_conflicts,
    bench_dump
);
criterion_main!(benches);
