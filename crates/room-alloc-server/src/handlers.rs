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

use crate::models::{
    BookRequest, BookResponse, ErrorResponse, RandomizeRequest, RoomDto, RoomListResponse,
    StatusResponse,
};
use axum::{extract::State, http::StatusCode, response::Json};
use parking_lot::RwLock;
use room_alloc_model::prelude::Inventory;
use room_alloc_solver::prelude::{AssignmentError, RoomAssignmentSolver};
use std::sync::Arc;

/// Occupancy probability used by `/randomize` when the body names none.
pub const DEFAULT_OCCUPANCY_PROBABILITY: f64 = 0.3;

#[derive(Clone)]
pub struct AppState {
    inventory: Arc<RwLock<Inventory>>,
    solver: RoomAssignmentSolver,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            inventory: Arc::new(RwLock::new(Inventory::new())),
            solver: RoomAssignmentSolver::new(),
        }
    }

    #[inline]
    pub fn inventory(&self) -> &Arc<RwLock<Inventory>> {
        &self.inventory
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn internal_error(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
}

pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<RoomDto>> {
    let inventory = state.inventory.read();
    Json(inventory.rooms().iter().map(RoomDto::from).collect())
}

pub async fn reset(State(state): State<AppState>) -> Json<StatusResponse> {
    state.inventory.write().reset_all();
    tracing::info!("Inventory reset, all rooms free");
    Json(StatusResponse { success: true })
}

pub async fn randomize(
    State(state): State<AppState>,
    body: Option<Json<RandomizeRequest>>,
) -> Result<Json<RoomListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let probability = request
        .probability
        .unwrap_or(DEFAULT_OCCUPANCY_PROBABILITY);
    if !(0.0..=1.0).contains(&probability) {
        return Err(bad_request(format!(
            "Probability must lie in [0, 1], got {probability}"
        )));
    }

    let mut inventory = state.inventory.write();
    inventory.set_random_occupancy(probability, &mut rand::thread_rng());
    tracing::info!(
        probability,
        free = inventory.free_count(),
        "Randomized occupancy"
    );
    Ok(Json(RoomListResponse {
        success: true,
        rooms: inventory.rooms().iter().map(RoomDto::from).collect(),
    }))
}

/// Books the cheapest available cluster. The write lock spans
/// snapshot -> solve -> commit, so concurrent bookings can never
/// double-assign a room.
pub async fn book(
    State(state): State<AppState>,
    Json(request): Json<BookRequest>,
) -> Result<Json<BookResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut inventory = state.inventory.write();
    let snapshot = inventory.snapshot();

    let assignment = state
        .solver
        .assign(&snapshot, request.count)
        .map_err(|err| match err {
            AssignmentError::NoFeasibleAssignment(_) => internal_error(err.to_string()),
            _ => bad_request(err.to_string()),
        })?;

    inventory
        .mark_occupied(&assignment.room_numbers())
        .map_err(|err| internal_error(err.to_string()))?;

    tracing::info!(
        requested = request.count,
        cost = assignment.total_travel_cost(),
        "Booked {}",
        assignment
    );
    Ok(Json(BookResponse::from(&assignment)))
}
