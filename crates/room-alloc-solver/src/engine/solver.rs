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

use crate::engine::{MAX_REQUEST_ROOMS, MIN_REQUEST_ROOMS};
use crate::err::{
    AssignmentError, InsufficientAvailabilityError, InvalidRequestCountError,
    NoFeasibleAssignmentError,
};
use crate::search::{find_best_across_floors, find_best_same_floor};
use room_alloc_model::prelude::{Assignment, Room};

/// The assignment orchestrator: validates a booking request against an
/// occupancy snapshot and runs the same-floor search with the cross-floor
/// search as fallback.
///
/// Pure over its input; committing the returned rooms to the live
/// inventory is the caller's job, under whatever lock serializes bookings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomAssignmentSolver;

impl RoomAssignmentSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn assign(
        &self,
        snapshot: &[Room],
        requested: usize,
    ) -> Result<Assignment, AssignmentError> {
        if !(MIN_REQUEST_ROOMS..=MAX_REQUEST_ROOMS).contains(&requested) {
            return Err(InvalidRequestCountError::new(requested).into());
        }

        let free_rooms: Vec<Room> = snapshot.iter().copied().filter(Room::is_free).collect();
        if free_rooms.len() < requested {
            return Err(InsufficientAvailabilityError::new(requested, free_rooms.len()).into());
        }

        if let Some(assignment) = find_best_same_floor(&free_rooms, requested) {
            return Ok(assignment);
        }
        if let Some(assignment) = find_best_across_floors(&free_rooms, requested) {
            return Ok(assignment);
        }

        // Both searches are exhaustive within their bounds, so with enough
        // free rooms this is unreachable; it still surfaces as a typed
        // failure rather than a panic.
        Err(NoFeasibleAssignmentError::new(requested).into())
    }
}

impl std::fmt::Display for RoomAssignmentSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomAssignmentSolver")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_alloc_model::prelude::{Inventory, RoomNumber};
    use std::collections::BTreeSet;

    #[inline]
    fn rn(n: u16) -> RoomNumber {
        RoomNumber::new(n)
    }

    fn snapshot_with_free(free: &[u16]) -> Vec<Room> {
        let mut inv = Inventory::new();
        let all: BTreeSet<RoomNumber> = inv.rooms().iter().map(|r| r.number()).collect();
        let keep: BTreeSet<RoomNumber> = free.iter().map(|&n| rn(n)).collect();
        let occupy: BTreeSet<RoomNumber> = all.difference(&keep).copied().collect();
        inv.mark_occupied(&occupy).unwrap();
        inv.snapshot()
    }

    #[test]
    fn test_request_count_is_validated_first() {
        let solver = RoomAssignmentSolver::new();
        let snapshot = Inventory::new().snapshot();
        for requested in [0usize, 6, 42] {
            let err = solver.assign(&snapshot, requested).unwrap_err();
            assert!(matches!(err, AssignmentError::InvalidRequestCount(_)));
        }
        // Even an empty snapshot rejects on count before availability.
        let err = solver.assign(&[], 0).unwrap_err();
        assert!(matches!(err, AssignmentError::InvalidRequestCount(_)));
    }

    #[test]
    fn test_insufficient_availability() {
        let solver = RoomAssignmentSolver::new();
        let snapshot = snapshot_with_free(&[101, 205]);
        let err = solver.assign(&snapshot, 3).unwrap_err();
        match err {
            AssignmentError::InsufficientAvailability(e) => {
                assert_eq!(e.requested(), 3);
                assert_eq!(e.available(), 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_fresh_building_takes_a_same_floor_triple() {
        let solver = RoomAssignmentSolver::new();
        let snapshot = Inventory::new().snapshot();
        let assignment = solver.assign(&snapshot, 3).unwrap();
        assert_eq!(assignment.total_travel_cost(), 2);
        let floor = assignment.rooms()[0].floor();
        assert!(assignment.rooms().iter().all(|r| r.floor() == floor));
    }

    #[test]
    fn test_falls_back_across_floors() {
        let solver = RoomAssignmentSolver::new();
        let snapshot = snapshot_with_free(&[101, 205]);
        let assignment = solver.assign(&snapshot, 2).unwrap();
        let numbers: Vec<u16> = assignment
            .rooms()
            .iter()
            .map(|r| *r.number().value())
            .collect();
        assert_eq!(numbers, vec![101, 205]);
        assert_eq!(assignment.total_travel_cost(), 6);
    }

    #[test]
    fn test_one_free_room_per_floor_still_succeeds() {
        let solver = RoomAssignmentSolver::new();
        let snapshot = snapshot_with_free(&[101, 201, 301, 401, 501, 601, 701, 801, 901, 1001]);
        let assignment = solver.assign(&snapshot, 5).unwrap();
        assert_eq!(assignment.len(), 5);
        assert_eq!(assignment.total_travel_cost(), 8);
    }

    #[test]
    fn test_returns_exactly_k_distinct_free_rooms() {
        let solver = RoomAssignmentSolver::new();
        let mut inv = Inventory::new();
        // Occupy a scattered mix.
        let occupy: BTreeSet<RoomNumber> =
            [102, 104, 210, 309, 505, 506, 507, 1003, 1004, 1005, 1006, 1007]
                .into_iter()
                .map(rn)
                .collect();
        inv.mark_occupied(&occupy).unwrap();
        let snapshot = inv.snapshot();

        for requested in 1..=5usize {
            let assignment = solver.assign(&snapshot, requested).unwrap();
            assert_eq!(assignment.len(), requested);
            assert!(assignment.total_travel_cost() >= 0);
            let numbers = assignment.room_numbers();
            assert_eq!(numbers.len(), requested);
            for number in &numbers {
                assert!(inv.get(*number).unwrap().is_free());
            }
        }
    }

    #[test]
    fn test_cost_is_idempotent_on_an_unmutated_snapshot() {
        let solver = RoomAssignmentSolver::new();
        let snapshot = snapshot_with_free(&[103, 108, 402, 403, 707, 901, 902, 903]);
        for requested in 1..=5usize {
            let a = solver.assign(&snapshot, requested).unwrap();
            let b = solver.assign(&snapshot, requested).unwrap();
            assert_eq!(a.total_travel_cost(), b.total_travel_cost());
        }
    }
}
