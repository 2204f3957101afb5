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

use crate::common::{Identifier, IdentifierMarkerName};
use crate::plan::{err::InvalidRoomCoordinateError, positions_on_floor, TOP_FLOOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomNumberMarker;

impl IdentifierMarkerName for RoomNumberMarker {
    const NAME: &'static str = "RoomNumber";
}

pub type RoomNumber = Identifier<u16, RoomNumberMarker>;

/// A room: immutable identity (`floor`, `position`, derived `number`) plus
/// a mutable occupancy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    number: RoomNumber,
    floor: u8,
    position: u8,
    occupied: bool,
}

impl Room {
    /// Builds the room at the given coordinates, vacant. Floor 10 numbers
    /// run 1001..=1007; all other floors use `floor*100 + position`.
    pub fn new(floor: u8, position: u8) -> Result<Self, InvalidRoomCoordinateError> {
        match positions_on_floor(floor) {
            Some(max) if (1..=max).contains(&position) => Ok(Self {
                number: RoomNumber::new(Self::number_for(floor, position)),
                floor,
                position,
                occupied: false,
            }),
            _ => Err(InvalidRoomCoordinateError::new(floor, position)),
        }
    }

    #[inline]
    fn number_for(floor: u8, position: u8) -> u16 {
        if floor == TOP_FLOOR {
            1000 + position as u16
        } else {
            floor as u16 * 100 + position as u16
        }
    }

    #[inline]
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    #[inline]
    pub fn floor(&self) -> u8 {
        self.floor
    }

    #[inline]
    pub fn position(&self) -> u8 {
        self.position
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        !self.occupied
    }

    #[inline]
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Room {} (floor {}, position {}, {})",
            self.number.value(),
            self.floor,
            self.position,
            if self.occupied { "occupied" } else { "free" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_on_regular_floors() {
        let r = Room::new(1, 1).unwrap();
        assert_eq!(*r.number().value(), 101);
        let r = Room::new(9, 10).unwrap();
        assert_eq!(*r.number().value(), 910);
        let r = Room::new(2, 5).unwrap();
        assert_eq!(*r.number().value(), 205);
    }

    #[test]
    fn test_numbering_on_top_floor() {
        let r = Room::new(10, 1).unwrap();
        assert_eq!(*r.number().value(), 1001);
        let r = Room::new(10, 7).unwrap();
        assert_eq!(*r.number().value(), 1007);
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        assert!(Room::new(0, 1).is_err());
        assert!(Room::new(11, 1).is_err());
        assert!(Room::new(1, 0).is_err());
        assert!(Room::new(1, 11).is_err());
        assert!(Room::new(10, 8).is_err());
    }

    #[test]
    fn test_new_room_starts_free_and_can_flip() {
        let mut r = Room::new(3, 4).unwrap();
        assert!(r.is_free());
        assert!(!r.is_occupied());
        r.set_occupied(true);
        assert!(r.is_occupied());
        r.set_occupied(false);
        assert!(r.is_free());
    }

    #[test]
    fn test_number_is_a_bijection_over_the_building() {
        use std::collections::BTreeSet;
        let mut seen = BTreeSet::new();
        for floor in 1..=10u8 {
            for position in 1..=crate::plan::positions_on_floor(floor).unwrap() {
                let r = Room::new(floor, position).unwrap();
                assert!(seen.insert(*r.number().value()), "duplicate {}", r);
            }
        }
        assert_eq!(seen.len(), crate::plan::TOTAL_ROOMS);
    }
}
