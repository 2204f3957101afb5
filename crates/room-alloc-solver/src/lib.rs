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

//! Room-assignment optimizer. Pure and synchronous: it reads an occupancy
//! snapshot and a requested room count, and returns the cheapest cluster
//! it can find under its bounds or a typed failure. Same-floor contiguous
//! windows are tried first; a bounded cross-floor combination search is
//! the fallback.

pub mod engine;
pub mod err;
pub mod search;

pub mod prelude {
    pub use crate::engine::{RoomAssignmentSolver, MAX_REQUEST_ROOMS, MIN_REQUEST_ROOMS};
    pub use crate::err::AssignmentError;
    pub use crate::search::{
        find_best_across_floors, find_best_same_floor, min_cluster_cost, path_cost,
    };
}
