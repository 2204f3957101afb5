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

pub mod cost;
pub mod err;
pub mod room;

pub use cost::travel_cost;
pub use room::{Room, RoomNumber};

/// Floors are numbered 1 through 10; the stairs/lift sits at position 0 on
/// every floor, so position also measures walking distance to it.
pub const FLOOR_COUNT: u8 = 10;
pub const TOP_FLOOR: u8 = 10;
pub const ROOMS_PER_FLOOR: u8 = 10;
pub const TOP_FLOOR_ROOMS: u8 = 7;
pub const TOTAL_ROOMS: usize = 97;

/// Number of room positions on the given floor, or `None` for a floor that
/// does not exist in the building.
#[inline]
pub fn positions_on_floor(floor: u8) -> Option<u8> {
    match floor {
        1..=9 => Some(ROOMS_PER_FLOOR),
        10 => Some(TOP_FLOOR_ROOMS),
        _ => None,
    }
}
