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

use room_alloc_model::prelude::{Assignment, Cost, Room};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomDto {
    pub floor: u8,
    pub pos: u8,
    pub number: u16,
    pub occupied: bool,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            floor: room.floor(),
            pos: room.position(),
            number: *room.number().value(),
            occupied: room.is_occupied(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BookRequest {
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RandomizeRequest {
    pub probability: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub booked: Vec<u16>,
    pub total_travel_cost: Cost,
}

impl From<&Assignment> for BookResponse {
    fn from(assignment: &Assignment) -> Self {
        Self {
            booked: assignment
                .rooms()
                .iter()
                .map(|r| *r.number().value())
                .collect(),
            total_travel_cost: assignment.total_travel_cost(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomListResponse {
    pub success: bool,
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_dto_mirrors_the_model() {
        let mut room = Room::new(2, 5).unwrap();
        room.set_occupied(true);
        let dto = RoomDto::from(&room);
        assert_eq!(dto.floor, 2);
        assert_eq!(dto.pos, 5);
        assert_eq!(dto.number, 205);
        assert!(dto.occupied);
    }

    #[test]
    fn test_book_response_lists_sorted_numbers() {
        let assignment = Assignment::new(
            vec![Room::new(2, 5).unwrap(), Room::new(1, 1).unwrap()],
            6,
        );
        let resp = BookResponse::from(&assignment);
        assert_eq!(resp.booked, vec![101, 205]);
        assert_eq!(resp.total_travel_cost, 6);
    }
}
