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

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use room_alloc_model::prelude::{Cost, Inventory};
use room_alloc_solver::prelude::{RoomAssignmentSolver, MAX_REQUEST_ROOMS, MIN_REQUEST_ROOMS};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const OCCUPANCY_SWEEP: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];
const RNG_SEED: u64 = 42;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    iteration: usize,
    occupancy_probability: f64,
    requested: usize,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    cost: Option<Cost>,
    rooms: Vec<u16>,
}

fn main() {
    enable_tracing();

    let solver = RoomAssignmentSolver::new();
    let mut inventory = Inventory::new();
    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);

    let mut results: Vec<RunRecord> = Vec::new();
    let mut iteration = 0usize;

    for &probability in &OCCUPANCY_SWEEP {
        for requested in MIN_REQUEST_ROOMS..=MAX_REQUEST_ROOMS {
            iteration += 1;
            inventory.set_random_occupancy(probability, &mut rng);
            let snapshot = inventory.snapshot();

            tracing::info!(
                "Solving [{}] occupancy {:.0}%, {} room(s) requested, {} free",
                iteration,
                probability * 100.0,
                requested,
                inventory.free_count()
            );

            let start_ts = Utc::now();
            let t0 = Instant::now();
            let outcome = solver.assign(&snapshot, requested);
            let runtime = t0.elapsed();
            let end_ts = Utc::now();

            let (cost_opt, rooms) = match &outcome {
                Ok(assignment) => {
                    tracing::info!(
                        "Finished [{}]: {}, runtime={:?}",
                        iteration,
                        assignment,
                        runtime
                    );
                    (
                        Some(assignment.total_travel_cost()),
                        assignment
                            .rooms()
                            .iter()
                            .map(|r| *r.number().value())
                            .collect(),
                    )
                }
                Err(err) => {
                    tracing::warn!("Failed [{}]: {}, runtime={:?}", iteration, err, runtime);
                    (None, Vec::new())
                }
            };

            results.push(RunRecord {
                iteration,
                occupancy_probability: probability,
                requested,
                start_ts,
                end_ts,
                runtime_ms: runtime.as_millis(),
                cost: cost_opt,
                rooms,
            });
        }
    }

    // Persist results
    let out_path = PathBuf::from("assignment_results.json");
    match File::create(&out_path).and_then(|mut f| {
        let json = serde_json::to_string_pretty(&results).expect("serialize results");
        f.write_all(json.as_bytes())
    }) {
        Ok(()) => {
            tracing::info!(
                "Wrote {} run record(s) to {}",
                results.len(),
                out_path.display()
            );
        }
        Err(e) => {
            tracing::error!("Failed to write results to {}: {}", out_path.display(), e);
        }
    }
}
