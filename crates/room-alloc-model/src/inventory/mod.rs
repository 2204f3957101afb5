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

pub mod err;

use crate::plan::{positions_on_floor, room::Room, room::RoomNumber, FLOOR_COUNT, TOTAL_ROOMS};
use err::{InventoryError, RoomAlreadyOccupiedError, UnknownRoomError};
use rand::Rng;
use std::collections::BTreeSet;

/// The live room inventory: all 97 rooms ordered by number.
///
/// The optimizer never sees this type; it receives an immutable snapshot
/// and returns a proposed room set. Callers serialize the
/// snapshot -> solve -> commit sequence around this store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    rooms: Vec<Room>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Builds the full building, every room vacant.
    pub fn new() -> Self {
        let mut rooms = Vec::with_capacity(TOTAL_ROOMS);
        for floor in 1..=FLOOR_COUNT {
            let max = positions_on_floor(floor).unwrap_or(0);
            for position in 1..=max {
                if let Ok(room) = Room::new(floor, position) {
                    rooms.push(room);
                }
            }
        }
        rooms.sort_by_key(|r| *r.number().value());
        Self { rooms }
    }

    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Immutable copy handed to the optimizer.
    #[inline]
    pub fn snapshot(&self) -> Vec<Room> {
        self.rooms.clone()
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
    pub fn get(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms
            .binary_search_by_key(number.value(), |r| *r.number().value())
            .ok()
            .map(|i| &self.rooms[i])
    }

    #[inline]
    fn get_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms
            .binary_search_by_key(number.value(), |r| *r.number().value())
            .ok()
            .map(move |i| &mut self.rooms[i])
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_free()).count()
    }

    /// Commits a booking: marks every listed room occupied. Fails without
    /// mutating anything if a number is unknown or a room is already taken.
    pub fn mark_occupied(&mut self, numbers: &BTreeSet<RoomNumber>) -> Result<(), InventoryError> {
        for &number in numbers {
            match self.get(number) {
                None => return Err(UnknownRoomError::new(number).into()),
                Some(room) if room.is_occupied() => {
                    return Err(RoomAlreadyOccupiedError::new(number).into());
                }
                Some(_) => {}
            }
        }
        for &number in numbers {
            if let Some(room) = self.get_mut(number) {
                room.set_occupied(true);
            }
        }
        Ok(())
    }

    /// Frees every room.
    pub fn reset_all(&mut self) {
        for room in &mut self.rooms {
            room.set_occupied(false);
        }
    }

    /// Re-rolls occupancy: each room is independently occupied with the
    /// given probability.
    pub fn set_random_occupancy<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) {
        for room in &mut self.rooms {
            room.set_occupied(rng.gen_bool(probability.clamp(0.0, 1.0)));
        }
    }

    /// Manual flip from the floor-plan view. Returns the new occupancy.
    pub fn toggle(&mut self, number: RoomNumber) -> Result<bool, UnknownRoomError> {
        match self.get_mut(number) {
            Some(room) => {
                room.set_occupied(!room.is_occupied());
                Ok(room.is_occupied())
            }
            None => Err(UnknownRoomError::new(number)),
        }
    }
}
