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
use crate::plan::room::Room;

/// Walking minutes per floor crossed via the stairs/lift.
pub const MINUTES_PER_FLOOR: Cost = 2;

/// Travel time in minutes between two rooms.
///
/// Same floor: one minute per position of horizontal distance. Different
/// floors: each side walks to the stairs/lift at position 0, charged as
/// `position - 1` (the last horizontal unit is absorbed into the vertical
/// transition), plus two minutes per floor crossed. The `position - 1`
/// charge is the building's surveyed walking model and is intentionally not
/// the same as the same-floor metric.
#[inline]
pub fn travel_cost(a: &Room, b: &Room) -> Cost {
    let (pa, pb) = (a.position() as Cost, b.position() as Cost);
    if a.floor() == b.floor() {
        (pa - pb).abs()
    } else {
        let floors = (a.floor() as Cost - b.floor() as Cost).abs();
        (pa - 1) + (pb - 1) + MINUTES_PER_FLOOR * floors
    }
}
