// Copyright 2025 the Crossroads Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crossroads_grid::{Category, OccupancyGrid, RectObject};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

const WORLD: usize = 512;

type Entry = GeomWithData<Rectangle<[i64; 2]>, usize>;

fn gen_random_cars(count: usize, seed: u64) -> Vec<RectObject> {
    let mut out = Vec::with_capacity(count);
    let mut s = seed;
    for _ in 0..count {
        s ^= s << 13;
        s ^= s >> 7;
        s ^= s << 17;
        let x = (s % (WORLD as u64 - 8)) as i64;
        let y = ((s >> 32) % (WORLD as u64 - 4)) as i64;
        out.push(
            RectObject::from_origin_size(Category::Car, x, y, 8, 4)
                .expect("random cars stay inside the world"),
        );
    }
    out
}

/// Closed integer corners covering the same cells as the half-open footprint.
fn envelope(r: &RectObject) -> AABB<[i64; 2]> {
    AABB::from_corners([r.x1(), r.y1()], [r.x2() - 1, r.y2() - 1])
}

fn to_rstar_entries(v: &[RectObject]) -> Vec<Entry> {
    v.iter()
        .enumerate()
        .map(|(i, r)| {
            let e = envelope(r);
            GeomWithData::new(Rectangle::from_corners(e.lower(), e.upper()), i)
        })
        .collect()
}

/// Ordered conflicting pairs found through an R-tree broad phase.
fn rstar_pairs(tree: &RTree<Entry>, rects: &[RectObject]) -> usize {
    let mut pairs = 0;
    for (i, r) in rects.iter().enumerate() {
        pairs += tree
            .locate_in_envelope_intersecting(&envelope(r))
            .filter(|e| e.data != i)
            .count();
    }
    pairs
}

fn bench_conflicts_vs_rstar(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflicts_vs_rstar");
    for &count in &[100usize, 400, 1000] {
        let rects = gen_random_cars(count, 0x1234_5678_9ABC_DEF1);
        let mut grid = OccupancyGrid::new(WORLD, WORLD);
        for r in &rects {
            grid.insert(*r).expect("benchmark rects fit the world");
        }

        let tree = RTree::bulk_load(to_rstar_entries(&rects));
        assert_eq!(
            grid.conflicts().len(),
            rstar_pairs(&tree, &rects),
            "pairwise scan and R-tree broad phase must agree"
        );

        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("pairwise_scan_n{}", count), |b| {
            b.iter(|| black_box(grid.conflicts().len()))
        });
        group.bench_function(format!("rstar_build_query_n{}", count), |b| {
            b.iter_batched(
                || to_rstar_entries(&rects),
                |entries| {
                    let tree = RTree::bulk_load(entries);
                    black_box(rstar_pairs(&tree, &rects))
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_conflicts_vs_rstar);
criterion_main!(benches);
