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

use crate::search::eval::min_cluster_cost;
use room_alloc_model::prelude::{Assignment, Cost, Room};

/// Candidate prefix size is `POOL_BASE + POOL_PER_ROOM * k` free rooms,
/// taken in `(floor, position)` order. These bounds are hard constants of
/// the search, not tunables.
pub const POOL_BASE: usize = 22;
pub const POOL_PER_ROOM: usize = 6;

/// Hard cap on scored combinations; on hitting it, the best found so far
/// is returned.
pub const COMBINATION_CAP: usize = 35_000;

/// Best cluster of `k` free rooms anywhere in the building, from an
/// exhaustive-within-bounds enumeration of k-combinations of the candidate
/// prefix. `None` when fewer than `k` rooms are free.
///
/// The prefix favors rooms near the lower floors and the stairs, which is
/// a tractability trade-off: the result is optimal over the prefix, not
/// guaranteed optimal over every free room in the building.
pub fn find_best_across_floors(free_rooms: &[Room], k: usize) -> Option<Assignment> {
    if k == 0 || free_rooms.len() < k {
        return None;
    }

    let mut pool: Vec<Room> = free_rooms.to_vec();
    pool.sort_by_key(|r| (r.floor(), r.position()));
    pool.truncate(POOL_BASE + POOL_PER_ROOM * k);

    let mut best: Option<(Vec<Room>, Cost)> = None;
    let mut scored = 0usize;
    let mut current: Vec<Room> = Vec::with_capacity(k);
    choose(&pool, k, 0, &mut current, &mut scored, &mut best);

    best.map(|(rooms, cost)| Assignment::new(rooms, cost))
}

fn choose(
    pool: &[Room],
    k: usize,
    start: usize,
    current: &mut Vec<Room>,
    scored: &mut usize,
    best: &mut Option<(Vec<Room>, Cost)>,
) {
    if current.len() == k {
        *scored += 1;
        let cost = min_cluster_cost(current);
        if best.as_ref().map_or(true, |(_, c)| cost < *c) {
            *best = Some((current.clone(), cost));
        }
        return;
    }

    let remaining = k - current.len();
    let last_start = pool.len() - remaining;
    for i in start..=last_start {
        if *scored >= COMBINATION_CAP {
            return;
        }
        current.push(pool[i]);
        choose(pool, k, i + 1, current, scored, best);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn room(floor: u8, position: u8) -> Room {
        Room::new(floor, position).unwrap()
    }

    #[inline]
    fn numbers(a: &Assignment) -> Vec<u16> {
        a.rooms().iter().map(|r| *r.number().value()).collect()
    }

    #[test]
    fn test_two_rooms_on_neighboring_floors() {
        // Only 101 and 205 free: (1-1) + (5-1) + 2*1 = 6.
        let free = [room(1, 1), room(2, 5)];
        let best = find_best_across_floors(&free, 2).unwrap();
        assert_eq!(numbers(&best), vec![101, 205]);
        assert_eq!(best.total_travel_cost(), 6);
    }

    #[test]
    fn test_none_when_fewer_than_k_free() {
        let free = [room(1, 1), room(2, 5)];
        assert!(find_best_across_floors(&free, 3).is_none());
        assert!(find_best_across_floors(&[], 1).is_none());
    }

    #[test]
    fn test_one_free_room_per_floor_terminates_with_a_result() {
        // Ten candidates choose five is 252 combinations, far below the cap.
        let free: Vec<Room> = (1..=10u8).map(|f| room(f, 1)).collect();
        let best = find_best_across_floors(&free, 5).unwrap();
        assert_eq!(best.len(), 5);
        // Stair-adjacent rooms on five consecutive floors: four crossings.
        assert_eq!(best.total_travel_cost(), 8);
    }

    #[test]
    fn test_prefers_the_cheap_cluster_over_nearer_numbers() {
        // 110 and 201 are numerically close but cost (10-1)+(1-1)+2 = 11;
        // 110 and 109 sit next to each other.
        let free = [room(1, 9), room(1, 10), room(2, 1)];
        let best = find_best_across_floors(&free, 2).unwrap();
        assert_eq!(numbers(&best), vec![109, 110]);
        assert_eq!(best.total_travel_cost(), 1);
    }

    #[test]
    fn test_cap_stops_enumeration_and_keeps_the_best_so_far() {
        // Positions 1..=4 free on every floor: 40 candidates, and choosing
        // 5 of them spans 658,008 combinations, far past the cap. The
        // search must stop early and hand back the best cluster it saw.
        let mut free: Vec<Room> = Vec::new();
        for floor in 1..=10u8 {
            for position in 1..=4u8 {
                free.push(room(floor, position));
            }
        }
        let best = find_best_across_floors(&free, 5).unwrap();
        assert_eq!(best.len(), 5);
        // No floor offers five rooms, so every cluster crosses at least one
        // floor; a four-room run plus the stair-adjacent room one floor up
        // costs 3 + 2, and nothing beats it. That cluster sits at the front
        // of the (floor, position) enumeration, well inside the cap.
        assert_eq!(best.total_travel_cost(), 5);
    }

    #[test]
    fn test_pool_is_bounded_by_the_prefix_size() {
        // k=1: pool is 22 + 6 = 28 rooms in (floor, position) order, so a
        // lone free room far beyond the prefix is never considered while
        // closer rooms fill it.
        let mut free: Vec<Room> = Vec::new();
        for floor in 1..=4u8 {
            for position in 1..=10u8 {
                free.push(room(floor, position));
            }
        }
        let best = find_best_across_floors(&free, 1).unwrap();
        // Any single room costs zero; the search still returns one from
        // the prefix.
        assert_eq!(best.total_travel_cost(), 0);
        assert!(best.rooms()[0].floor() <= 3);
    }
}
