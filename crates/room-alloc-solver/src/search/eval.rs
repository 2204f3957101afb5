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

use num_traits::Zero;
use room_alloc_model::prelude::{travel_cost, Cost, Room};

/// Total travel cost along the given visiting order: the sum of
/// `travel_cost` over consecutive pairs. Empty and singleton sequences
/// cost nothing.
#[inline]
pub fn path_cost(rooms: &[Room]) -> Cost {
    rooms
        .windows(2)
        .fold(Cost::zero(), |acc, w| acc + travel_cost(&w[0], &w[1]))
}

/// Exact minimum of `path_cost` over every visiting order of the set: an
/// open path, not a tour. Callers keep clusters at five rooms or fewer, so
/// the permutation space stays at 120 orders at most.
pub fn min_cluster_cost(rooms: &[Room]) -> Cost {
    if rooms.len() < 2 {
        return Cost::zero();
    }
    // The identity order is a valid upper bound; the backtracking below
    // prunes any partial order that already reaches it.
    let mut best = path_cost(rooms);
    let mut used = vec![false; rooms.len()];
    for start in 0..rooms.len() {
        used[start] = true;
        extend_order(rooms, &mut used, start, 1, Cost::zero(), &mut best);
        used[start] = false;
    }
    best
}

fn extend_order(
    rooms: &[Room],
    used: &mut [bool],
    last: usize,
    placed: usize,
    acc: Cost,
    best: &mut Cost,
) {
    if acc >= *best {
        return;
    }
    if placed == rooms.len() {
        *best = acc;
        return;
    }
    for next in 0..rooms.len() {
        if used[next] {
            continue;
        }
        used[next] = true;
        let step = travel_cost(&rooms[last], &rooms[next]);
        extend_order(rooms, used, next, placed + 1, acc + step, best);
        used[next] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn room(floor: u8, position: u8) -> Room {
        Room::new(floor, position).unwrap()
    }

    #[test]
    fn test_path_cost_of_empty_and_singleton_is_zero() {
        assert_eq!(path_cost(&[]), 0);
        assert_eq!(path_cost(&[room(1, 1)]), 0);
    }

    #[test]
    fn test_path_cost_sums_consecutive_legs() {
        // 101 -> 103 -> 102: 2 + 1.
        let rooms = [room(1, 1), room(1, 3), room(1, 2)];
        assert_eq!(path_cost(&rooms), 3);
        // Cross-floor leg: 101 -> 205 costs 6, then 205 -> 201 costs 4.
        let rooms = [room(1, 1), room(2, 5), room(2, 1)];
        assert_eq!(path_cost(&rooms), 10);
    }

    #[test]
    fn test_min_cluster_cost_of_empty_and_singleton_is_zero() {
        assert_eq!(min_cluster_cost(&[]), 0);
        assert_eq!(min_cluster_cost(&[room(7, 4)]), 0);
    }

    #[test]
    fn test_min_cluster_cost_reorders_for_the_optimum() {
        // Given out of order, the best open path 101 -> 102 -> 103 costs 2.
        let rooms = [room(1, 2), room(1, 1), room(1, 3)];
        assert_eq!(min_cluster_cost(&rooms), 2);
        // A pair has a single undirected path.
        let rooms = [room(1, 1), room(2, 5)];
        assert_eq!(min_cluster_cost(&rooms), 6);
    }

    #[test]
    fn test_min_cluster_cost_matches_brute_force_on_five_rooms() {
        // Mixed floors: compare against an unpruned enumeration.
        let rooms = [room(1, 9), room(2, 1), room(2, 8), room(3, 3), room(10, 2)];

        fn brute(rooms: &[Room]) -> Cost {
            let mut idx: Vec<usize> = (0..rooms.len()).collect();
            let mut best = Cost::MAX;
            permute(&mut idx, 0, rooms, &mut best);
            best
        }
        fn permute(idx: &mut Vec<usize>, at: usize, rooms: &[Room], best: &mut Cost) {
            if at == idx.len() {
                let order: Vec<Room> = idx.iter().map(|&i| rooms[i]).collect();
                *best = (*best).min(path_cost(&order));
                return;
            }
            for i in at..idx.len() {
                idx.swap(at, i);
                permute(idx, at + 1, rooms, best);
                idx.swap(at, i);
            }
        }

        assert_eq!(min_cluster_cost(&rooms), brute(&rooms));
    }

    #[test]
    fn test_min_cluster_cost_never_exceeds_identity_order() {
        let rooms = [room(4, 1), room(4, 6), room(4, 2), room(4, 5)];
        assert!(min_cluster_cost(&rooms) <= path_cost(&rooms));
    }
}
