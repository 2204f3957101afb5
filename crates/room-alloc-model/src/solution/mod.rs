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

use crate::common::Cost;
use crate::plan::room::{Room, RoomNumber};
use std::collections::BTreeSet;

/// A proposed room cluster for one booking request, with its minimal total
/// travel cost. Transient: produced per request and discarded after the
/// caller commits (or abandons) it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    rooms: Vec<Room>,
    total_travel_cost: Cost,
}

impl Assignment {
    /// Rooms are kept sorted by number; the visiting order that realized
    /// the cost is not retained, only the cost itself.
    pub fn new(mut rooms: Vec<Room>, total_travel_cost: Cost) -> Self {
        rooms.sort_by_key(|r| *r.number().value());
        Self {
            rooms,
            total_travel_cost,
        }
    }

    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[inline]
    pub fn total_travel_cost(&self) -> Cost {
        self.total_travel_cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[inline]
    pub fn room_numbers(&self) -> BTreeSet<RoomNumber> {
        self.rooms.iter().map(|r| r.number()).collect()
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Assignment of {} room(s) [", self.rooms.len())?;
        for (i, room) in self.rooms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", room.number().value())?;
        }
        write!(f, "] costing {} minute(s)", self.total_travel_cost)
    }
}
