// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The solution set gathers the points found by the workers. Points are only
//! ever appended during a run; the deduplication and ordering happen when the
//! set is reported.

use fxhash::FxHashSet;

use crate::{Point, SearchBox, Solution};

/// An append only collection of the solutions found so far
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    found: Vec<Solution>,
}
impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }
    /// Records a point that was found while solving `origin`
    pub fn push(&mut self, point: Point, origin: SearchBox) {
        self.found.push(Solution { point, origin });
    }
    /// The number of solutions that were recorded (duplicates included)
    pub fn len(&self) -> usize {
        self.found.len()
    }
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
    /// The recorded solutions in discovery order (duplicates included)
    pub fn raw(&self) -> &[Solution] {
        &self.found
    }
    /// Returns the distinct points of this set, sorted in reporting order.
    /// That is, by decreasing first coordinate and then by decreasing second
    /// coordinate. The third coordinate plays no role in that order: points
    /// that only differ by their third coordinate keep their discovery order.
    pub fn report(&self) -> Vec<Point> {
        let mut seen   = FxHashSet::default();
        let mut points = self.found.iter()
            .filter(|s| seen.insert(**s))
            .map(|s| s.point)
            .collect::<Vec<_>>();

        points.sort_by(|a, b| b[0].cmp(&a[0]).then_with(|| b[1].cmp(&a[1])));
        points
    }
}
