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

use crate::plan::room::RoomNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownRoomError {
    number: RoomNumber,
}

impl UnknownRoomError {
    pub fn new(number: RoomNumber) -> Self {
        Self { number }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }
}

impl std::fmt::Display for UnknownRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room {} does not exist in the inventory", self.number)
    }
}

impl std::error::Error for UnknownRoomError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomAlreadyOccupiedError {
    number: RoomNumber,
}

impl RoomAlreadyOccupiedError {
    pub fn new(number: RoomNumber) -> Self {
        Self { number }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }
}

impl std::fmt::Display for RoomAlreadyOccupiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room {} is already occupied", self.number)
    }
}

impl std::error::Error for RoomAlreadyOccupiedError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryError {
    UnknownRoom(UnknownRoomError),
    RoomAlreadyOccupied(RoomAlreadyOccupiedError),
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::UnknownRoom(e) => write!(f, "{}", e),
            InventoryError::RoomAlreadyOccupied(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<UnknownRoomError> for InventoryError {
    fn from(err: UnknownRoomError) -> Self {
        InventoryError::UnknownRoom(err)
    }
}

impl From<RoomAlreadyOccupiedError> for InventoryError {
    fn from(err: RoomAlreadyOccupiedError) -> Self {
        InventoryError::RoomAlreadyOccupied(err)
    }
}
