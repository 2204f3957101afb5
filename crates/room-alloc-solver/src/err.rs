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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidRequestCountError {
    requested: usize,
}

impl InvalidRequestCountError {
    pub fn new(requested: usize) -> Self {
        Self { requested }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl std::fmt::Display for InvalidRequestCountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Requested {} rooms; a booking must ask for {} to {}",
            self.requested, MIN_REQUEST_ROOMS, MAX_REQUEST_ROOMS
        )
    }
}

impl std::error::Error for InvalidRequestCountError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsufficientAvailabilityError {
    requested: usize,
    available: usize,
}

impl InsufficientAvailabilityError {
    pub fn new(requested: usize, available: usize) -> Self {
        Self {
            requested,
            available,
        }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn available(&self) -> usize {
        self.available
    }
}

impl std::fmt::Display for InsufficientAvailabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Requested {} rooms but only {} are free",
            self.requested, self.available
        )
    }
}

impl std::error::Error for InsufficientAvailabilityError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoFeasibleAssignmentError {
    requested: usize,
}

impl NoFeasibleAssignmentError {
    pub fn new(requested: usize) -> Self {
        Self { requested }
    }

    pub fn requested(&self) -> usize {
        self.requested
    }
}

impl std::fmt::Display for NoFeasibleAssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No feasible assignment of {} rooms was found within the search bounds",
            self.requested
        )
    }
}

impl std::error::Error for NoFeasibleAssignmentError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentError {
    InvalidRequestCount(InvalidRequestCountError),
    InsufficientAvailability(InsufficientAvailabilityError),
    NoFeasibleAssignment(NoFeasibleAssignmentError),
}

impl std::fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentError::InvalidRequestCount(e) => write!(f, "{}", e),
            AssignmentError::InsufficientAvailability(e) => write!(f, "{}", e),
            AssignmentError::NoFeasibleAssignment(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for AssignmentError {}

impl From<InvalidRequestCountError> for AssignmentError {
    fn from(err: InvalidRequestCountError) -> Self {
        AssignmentError::InvalidRequestCount(err)
    }
}

impl From<InsufficientAvailabilityError> for AssignmentError {
    fn from(err: InsufficientAvailabilityError) -> Self {
        AssignmentError::InsufficientAvailability(err)
    }
}

impl From<NoFeasibleAssignmentError> for AssignmentError {
    fn from(err: NoFeasibleAssignmentError) -> Self {
        AssignmentError::NoFeasibleAssignment(err)
    }
}
