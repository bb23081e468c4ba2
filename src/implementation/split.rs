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

//! This module provides the implementation of the split/update protocol: the
//! purely geometric part of the box splitting algorithm of Klamroth and
//! Dächert. Given a freshly discovered point, it retires every box whose
//! goal corner is beaten by that point and replaces it with up to three
//! children (one per axis) whose reference corners are repaired so that the
//! children of each axis partition the remaining space.

use std::cmp::Ordering;

use tracing::debug;

use crate::{other_axes, Error, Point, SearchBox, Sense, NB_OBJECTIVES};

/// The children generated along each of the three axes
pub type Subsets = [Vec<SearchBox>; NB_OBJECTIVES];

/// The summary of one application of the protocol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOutcome {
    /// The number of boxes that have been retired
    pub retired: usize,
    /// The new boxes that must be explored
    pub children: Vec<SearchBox>,
}

/// The splitter applies the split/update protocol. It only needs to know the
/// (immutable) utopia point and the sense of the problem.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Splitter {
    utopia: Point,
    sense: Sense,
}
impl Splitter {
    pub fn new(utopia: Point, sense: Sense) -> Self {
        Splitter { utopia, sense }
    }
    pub fn utopia(&self) -> Point {
        self.utopia
    }
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Examines all `boxes` and splits those whose goal corner is beaten by
    /// `point`. The children are pushed in the subset of the axis along which
    /// they were created and the split boxes are marked as retired. It is up
    /// to the caller to sweep the retired boxes out of its collections once
    /// this method returns.
    ///
    /// A box is split along axis `i` iff its reference corner is at least as
    /// good as the point on that axis and the point is not already at the
    /// utopia value of that axis. A box is retired even when it yields no
    /// child at all.
    pub fn generate<'b, I>(&self, point: &Point, boxes: I, subsets: &mut Subsets) -> Result<usize, Error>
    where I: IntoIterator<Item = &'b mut SearchBox>
    {
        let sense = self.sense;
        let mut retired = 0;
        for region in boxes {
            if region.retired || !region.strictly_encloses(point, sense) {
                continue;
            }
            if region.inverted_axis(sense).is_some() {
                return Err(Error::InvariantViolation {
                    region: *region,
                    reason: "the reference corner is worse than the goal corner",
                });
            }
            for (axis, subset) in subsets.iter_mut().enumerate() {
                if sense.at_least_as_good(region.v[axis], point[axis]) && sense.better(self.utopia[axis], point[axis]) {
                    let child = region.child(axis, point[axis]);
                    debug!("split along {} to make {}", axis, child);
                    subset.push(child);
                }
            }
            region.retired = true;
            retired += 1;
        }
        Ok(retired)
    }

    /// Orders two children created along `axis`. Let `j` and `k` be the two
    /// other axes; when minimizing, the children are sorted by increasing
    /// `u[j]` then decreasing `u[k]`. Children sharing their goal corner are
    /// sorted by increasing `v[j]` then decreasing `v[k]`. The order is
    /// reversed when maximizing.
    ///
    /// # Note:
    /// This is a total order. Whenever the pairwise relation
    /// `a.u[j] <= b.u[j] && a.u[k] >= b.u[k]` holds, `a` comes first. Pairs
    /// for which it holds in neither direction fall back on the
    /// lexicographic order of the same keys.
    pub fn compare(&self, a: &SearchBox, b: &SearchBox, axis: usize) -> Ordering {
        let (j, k) = other_axes(axis);
        let ord = a.u[j].cmp(&b.u[j])
            .then_with(|| b.u[k].cmp(&a.u[k]))
            .then_with(|| a.v[j].cmp(&b.v[j]))
            .then_with(|| b.v[k].cmp(&a.v[k]));
        match self.sense {
            Sense::Minimize => ord,
            Sense::Maximize => ord.reverse(),
        }
    }

    /// Sorts the children created along `axis` and repairs their reference
    /// corners so that they partition the space that remains once the region
    /// dominated by `point` has been cut off.
    pub fn update_subset(&self, point: &Point, axis: usize, subset: &mut [SearchBox]) {
        if subset.is_empty() {
            return;
        }
        let (j, k) = other_axes(axis);
        subset.sort_by(|a, b| self.compare(a, b, axis));

        let last = subset.len() - 1;
        subset[0].v[j]    = point[j];
        subset[last].v[k] = point[k];
        for q in 1..subset.len() {
            subset[q].v[j]   = subset[q - 1].u[j];
            subset[q - 1].v[k] = subset[q].u[k];
        }
    }

    /// Applies `update_subset` to each non empty subset, and gathers all
    /// children in one single vector.
    pub fn update_individual_subsets(&self, point: &Point, subsets: &mut Subsets) -> Vec<SearchBox> {
        let mut children = vec![];
        for (axis, subset) in subsets.iter_mut().enumerate() {
            if subset.is_empty() {
                continue;
            }
            debug!("update subset {} which has {} elements", axis, subset.len());
            self.update_subset(point, axis, subset);
            children.append(subset);
        }
        children
    }

    /// Applies the whole protocol to one single collection of boxes: the
    /// retired boxes are swept out of `boxes` and the children are returned.
    pub fn split(&self, point: &Point, boxes: &mut Vec<SearchBox>) -> Result<SplitOutcome, Error> {
        let mut subsets = Subsets::default();
        let retired  = self.generate(point, boxes.iter_mut(), &mut subsets)?;
        boxes.retain(|b| !b.retired);
        let children = self.update_individual_subsets(point, &mut subsets);
        Ok(SplitOutcome { retired, children })
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
