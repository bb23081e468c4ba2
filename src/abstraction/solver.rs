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

//! This module defines the `Solver` trait: the single objective oracle that
//! the box splitting search consults for each box.

use crate::{Point, SearchBox, Sense, SolveOutcome, SolverError, NB_OBJECTIVES};

/// This is the abstraction of the single objective oracle. Given a box, it
/// either proves that no feasible point lies strictly inside the box `u`
/// corner or it produces such a point.
///
/// # Note:
/// The scheduler invokes a solver concurrently from many worker threads.
/// Hence, any implementation must be self contained: each call to `solve`
/// should work on its own model rather than on some state shared with other
/// calls.
pub trait Solver {
    /// The sense (minimize or maximize) shared by all three objectives
    fn sense(&self) -> Sense;

    /// Searches the given `region` for a feasible point that is strictly
    /// better than `region.u` on every axis. The returned point should be
    /// optimal for a scalarization which favors the points lying close to
    /// the `utopia` point.
    ///
    /// An `Err` must only be returned when the solver fails to tell whether
    /// the box is feasible or not. Proving that a box holds no feasible point
    /// is a regular outcome (`SolveOutcome::Infeasible`).
    fn solve(&self, region: &SearchBox, utopia: &Point, sense: Sense) -> Result<SolveOutcome, SolverError>;

    /// Optimizes the single objective identified by `axis`, disregarding the
    /// two others. It returns the best value that objective can achieve, or
    /// `None` when the problem admits no feasible solution at all.
    fn optimize_objective(&self, axis: usize, sense: Sense) -> Result<Option<i64>, SolverError>;
}

/// Computes the utopia (ideal) point of the problem. That is, the point whose
/// coordinates are the best values each objective can achieve when the other
/// objectives are disregarded. This requires one single objective solve per
/// axis. It returns `None` when the problem admits no feasible solution.
pub fn compute_utopia(solver: &dyn Solver, sense: Sense) -> Result<Option<Point>, SolverError> {
    let mut utopia = Point::default();
    for axis in 0..NB_OBJECTIVES {
        match solver.optimize_objective(axis, sense)? {
            Some(value) => utopia[axis] = value,
            None        => return Ok(None),
        }
    }
    Ok(Some(utopia))
}
