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
use room_alloc_model::prelude::{Assignment, Room};
use std::collections::BTreeMap;

/// Best cluster of `k` free rooms on a single floor, or `None` when no
/// floor holds `k` free rooms.
///
/// Free rooms on a floor are sorted by position and only contiguous
/// windows of length `k` are scored: for this metric the cost of a
/// same-floor cluster grows with its span, so a non-contiguous pick can
/// never beat the windows it straddles. Ties keep the first window found
/// (lowest floor, then leftmost).
pub fn find_best_same_floor(free_rooms: &[Room], k: usize) -> Option<Assignment> {
    if k == 0 {
        return None;
    }

    let mut by_floor: BTreeMap<u8, Vec<Room>> = BTreeMap::new();
    for room in free_rooms {
        by_floor.entry(room.floor()).or_default().push(*room);
    }

    let mut best: Option<Assignment> = None;
    for rooms in by_floor.values_mut() {
        if rooms.len() < k {
            continue;
        }
        rooms.sort_by_key(|r| r.position());
        for window in rooms.windows(k) {
            let cost = min_cluster_cost(window);
            if best
                .as_ref()
                .map_or(true, |b| cost < b.total_travel_cost())
            {
                best = Some(Assignment::new(window.to_vec(), cost));
            }
        }
    }
    best
}
