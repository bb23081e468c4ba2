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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use std::{fmt, ops::{Index, IndexMut}};

/// The number of objective functions of the problems we know how to solve.
pub const NB_OBJECTIVES: usize = 3;

// ----------------------------------------------------------------------------
// --- SENSE ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The direction in which all three objectives are optimized. All objectives
/// of a problem must share the same sense.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sense {
    Minimize,
    Maximize,
}
impl Sense {
    /// Returns true iff `a` is strictly better than `b` in this sense.
    ///
    /// # Examples:
    /// ```
    /// # use boxsplit::Sense;
    /// assert!(Sense::Minimize.better(1, 2));
    /// assert!(Sense::Maximize.better(2, 1));
    /// assert!(!Sense::Minimize.better(2, 2));
    /// ```
    #[inline]
    pub fn better(self, a: i64, b: i64) -> bool {
        match self {
            Sense::Minimize => a < b,
            Sense::Maximize => a > b,
        }
    }
    /// Returns true iff `a` is at least as good as `b` in this sense.
    #[inline]
    pub fn at_least_as_good(self, a: i64, b: i64) -> bool {
        a == b || self.better(a, b)
    }
    /// Returns the value one step past `value` in the improving direction.
    #[inline]
    pub fn one_step_better(self, value: i64) -> i64 {
        match self {
            Sense::Minimize => value - 1,
            Sense::Maximize => value + 1,
        }
    }
    /// The bound used on the open side of the very first box. Objective
    /// values must lie strictly on the better side of it.
    pub fn default_unbounded(self) -> i64 {
        match self {
            Sense::Minimize => i32::MAX as i64,
            Sense::Maximize => i32::MIN as i64,
        }
    }
}
impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sense::Minimize => write!(f, "min"),
            Sense::Maximize => write!(f, "max"),
        }
    }
}

/// Returns the two axes `(j, k)` that remain when `axis` is taken out of
/// `{0, 1, 2}`. They are always returned in increasing order.
///
/// # Examples:
/// ```
/// # use boxsplit::other_axes;
/// assert_eq!((1, 2), other_axes(0));
/// assert_eq!((0, 2), other_axes(1));
/// assert_eq!((0, 1), other_axes(2));
/// ```
#[inline]
pub fn other_axes(axis: usize) -> (usize, usize) {
    match axis {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    }
}

// ----------------------------------------------------------------------------
// --- POINT ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A point of the objective space. That is, one integer value per objective.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point(pub [i64; NB_OBJECTIVES]);
impl Point {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Point([a, b, c])
    }
    /// Returns a point having the same value on all three axes
    pub fn splat(x: i64) -> Self {
        Point([x; NB_OBJECTIVES])
    }
    /// Returns true iff self is strictly better than `other` on every axis
    pub fn strictly_better(&self, other: &Point, sense: Sense) -> bool {
        (0..NB_OBJECTIVES).all(|i| sense.better(self[i], other[i]))
    }
    /// Returns true iff self (pareto) dominates `other`: it is at least as
    /// good on every axis and both points differ.
    ///
    /// # Examples:
    /// ```
    /// # use boxsplit::{Point, Sense};
    /// let a = Point::new(1, 2, 3);
    /// let b = Point::new(1, 4, 3);
    /// assert!(a.dominates(&b, Sense::Minimize));
    /// assert!(b.dominates(&a, Sense::Maximize));
    /// assert!(!a.dominates(&a, Sense::Minimize));
    /// ```
    pub fn dominates(&self, other: &Point, sense: Sense) -> bool {
        self != other && (0..NB_OBJECTIVES).all(|i| sense.at_least_as_good(self[i], other[i]))
    }
    pub fn iter(&self) -> impl Iterator<Item = &i64> {
        self.0.iter()
    }
}
impl Index<usize> for Point {
    type Output = i64;
    #[inline]
    fn index(&self, axis: usize) -> &i64 {
        &self.0[axis]
    }
}
impl IndexMut<usize> for Point {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut i64 {
        &mut self.0[axis]
    }
}
impl From<[i64; NB_OBJECTIVES]> for Point {
    fn from(values: [i64; NB_OBJECTIVES]) -> Self {
        Point(values)
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self[0], self[1], self[2])
    }
}

// ----------------------------------------------------------------------------
// --- SEARCH BOX -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An axis aligned region of the objective space in which the search for
/// nondominated points still needs to happen.
///
/// # Note:
/// The `u` corner is exclusive: only points that are strictly better than `u`
/// on every axis belong to the box. The `v` corner is the reference corner
/// which is maintained by the splitting protocol so that the children created
/// for one given point partition the remaining space without any overlap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SearchBox {
    /// The exclusive "goal" corner
    pub u: Point,
    /// The reference corner
    pub v: Point,
    /// Set when the box is retired by a splitting pass and must be swept
    /// out of the collection that holds it.
    pub(crate) retired: bool,
}
impl SearchBox {
    pub fn new(u: Point, v: Point) -> Self {
        SearchBox { u, v, retired: false }
    }
    /// Returns true iff `point` is strictly better than the `u` corner of this
    /// box on every axis. Only those boxes need to be reconsidered when a new
    /// point is discovered.
    ///
    /// # Examples:
    /// ```
    /// # use boxsplit::{Point, SearchBox, Sense};
    /// let b = SearchBox::new(Point::splat(100), Point::splat(-1));
    /// assert!(b.strictly_encloses(&Point::new(10, 20, 30), Sense::Minimize));
    /// assert!(!b.strictly_encloses(&Point::new(10, 100, 30), Sense::Minimize));
    /// ```
    #[inline]
    pub fn strictly_encloses(&self, point: &Point, sense: Sense) -> bool {
        point.strictly_better(&self.u, sense)
    }
    /// Returns a copy of this box whose `u` corner has been tightened to
    /// `value` along the given axis.
    pub fn child(&self, axis: usize, value: i64) -> Self {
        let mut child = SearchBox::new(self.u, self.v);
        child.u[axis] = value;
        child
    }
    /// Returns the first axis (if any) along which the reference corner is
    /// strictly worse than the goal corner. A well formed box has none.
    pub fn inverted_axis(&self, sense: Sense) -> Option<usize> {
        (0..NB_OBJECTIVES).find(|&i| sense.better(self.u[i], self.v[i]))
    }
    /// Returns true when this box has been retired by a splitting pass
    pub fn is_retired(&self) -> bool {
        self.retired
    }
}
impl fmt::Display for SearchBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box: [u: {}, v: {}]", self.u, self.v)
    }
}

// ----------------------------------------------------------------------------
// --- RESULTS ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of one single objective solve over a box
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolveOutcome {
    /// The box contains no feasible point: it can be discarded
    Infeasible,
    /// The solver found this point strictly inside the box
    Feasible(Point),
}

/// A point that has been found while solving some box.
///
/// # Note:
/// Two solutions are equal as soon as their points are equal. The box where
/// the point was found plays no part in that comparison.
#[derive(Debug, Copy, Clone)]
pub struct Solution {
    /// The achieved objective values
    pub point: Point,
    /// The box that was being solved when the point was found
    pub origin: SearchBox,
}
impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}
impl Eq for Solution {}
impl std::hash::Hash for Solution {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.point.hash(state)
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The error a solver reports when it cannot tell whether a box is feasible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("solver failure: {0}")]
pub struct SolverError(pub String);

/// The errors that bring a search to a halt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A solver could not give a definitive answer for some box. The status
    /// of that box is unknown, hence the frontier cannot be trusted anymore.
    #[error("{source} (while solving {region})")]
    Solver { region: SearchBox, source: SolverError },
    /// The best value of some objective could not be computed
    #[error("cannot compute the utopia point: {0}")]
    Utopia(#[source] SolverError),
    /// Someone tried to submit work to a scheduler that is shutting down
    #[error("submit on a scheduler that has been shut down")]
    SubmitAfterShutdown,
    /// A box reached a state that must never happen
    #[error("invariant violation on {region}: {reason}")]
    InvariantViolation { region: SearchBox, reason: &'static str },
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
