// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use room_alloc_model::prelude::{Inventory, Room};
use room_alloc_solver::prelude::{min_cluster_cost, RoomAssignmentSolver};
use std::hint::black_box;

/// Occupancy snapshot with roughly the given fraction of rooms taken,
/// deterministic under the seed.
fn snapshot(probability: f64, seed: u64) -> Vec<Room> {
    let mut inventory = Inventory::new();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    inventory.set_random_occupancy(probability, &mut rng);
    inventory.snapshot()
}

fn bench_min_cluster_cost(c: &mut Criterion) {
    let rooms: Vec<Room> = vec![
        Room::new(1, 9).unwrap(),
        Room::new(2, 1).unwrap(),
        Room::new(2, 8).unwrap(),
        Room::new(3, 3).unwrap(),
        Room::new(10, 2).unwrap(),
    ];
    c.bench_function("min_cluster_cost/5_rooms", |b| {
        b.iter(|| min_cluster_cost(black_box(&rooms)))
    });
}

fn bench_assign(c: &mut Criterion) {
    let solver = RoomAssignmentSolver::new();
    let mut group = c.benchmark_group("assign");

    // Sparse occupancy keeps the same-floor pass sufficient.
    let sparse = snapshot(0.3, 1);
    group.bench_function("same_floor/k5", |b| {
        b.iter(|| solver.assign(black_box(&sparse), 5))
    });

    // Dense occupancy forces the cross-floor fallback most of the time.
    let dense = snapshot(0.9, 1);
    group.bench_function("cross_floor/k5", |b| {
        b.iter(|| solver.assign(black_box(&dense), 5))
    });

    group.finish();
}

criterion_group!(benches, bench_min_cluster_cost, bench_assign);
criterion_main!(benches);
