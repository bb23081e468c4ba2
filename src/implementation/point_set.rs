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

//! This module provides a reference `Solver` for problems that are given as
//! an explicit (finite) set of achievable objective vectors. Such a solver is
//! mostly useful to test the search and to run it on small discrete problems
//! without any MIP solver at hand.

use std::cmp::Ordering;

use crate::{Point, SearchBox, Sense, SolveOutcome, Solver, SolverError, NB_OBJECTIVES};

/// The augmented weighted Chebyshev scalarization which is used to pick one
/// point out of a box. Its weights are derived from the utopia point so that
/// the points close to the utopia are favored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scalarization {
    sense: Sense,
    utopia: Point,
    weights: [f64; NB_OBJECTIVES],
    rho: f64,
}
impl Scalarization {
    /// The perturbation applied to the utopia point
    pub const ETA: f64 = 0.01;

    pub fn new(utopia: Point, sense: Sense) -> Self {
        let eta = Self::ETA;
        let mut order = [0, 1, 2];
        match sense {
            Sense::Minimize => order.sort_by_key(|&i| utopia[i]),
            Sense::Maximize => order.sort_by_key(|&i| std::cmp::Reverse(utopia[i])),
        }

        let sorted = order.map(|i| utopia[i] as f64);
        let u_eta  = sorted.map(|x| match sense {
            Sense::Minimize => x - eta,
            Sense::Maximize => x + eta,
        });
        let sigma: f64 = sorted.iter().sum();
        let cap_u: f64 = u_eta.iter().map(|x| 1.0 / x).sum();
        let spread     = u_eta[0] * (sigma - sorted[0]);
        let denom      = spread * cap_u - NB_OBJECTIVES as f64 * (1.0 - eta);

        let mut weights = [0.0; NB_OBJECTIVES];
        for (rank, &axis) in order.iter().enumerate() {
            weights[axis] = (spread - u_eta[rank] * (1.0 - eta)) / (u_eta[rank] * denom);
        }
        let rho = (1.0 - eta) / denom;

        Scalarization { sense, utopia, weights, rho }
    }
    pub fn weights(&self) -> [f64; NB_OBJECTIVES] {
        self.weights
    }
    pub fn rho(&self) -> f64 {
        self.rho
    }
    /// The scalarized value of `f`. The lower, the better (regardless of the
    /// sense of the problem).
    pub fn value(&self, f: &Point) -> f64 {
        let mut max_diff = f64::NEG_INFINITY;
        let mut total    = 0.0;
        for i in 0..NB_OBJECTIVES {
            let diff = match self.sense {
                Sense::Minimize => self.weights[i] * (f[i] - self.utopia[i]) as f64,
                Sense::Maximize => self.weights[i] * (self.utopia[i] - f[i]) as f64,
            };
            max_diff = max_diff.max(diff);
            total   += f[i] as f64;
        }
        match self.sense {
            Sense::Minimize => max_diff + self.rho * total,
            Sense::Maximize => max_diff - self.rho * total,
        }
    }
    /// Compares two points by scalarized value. Ties are broken by the
    /// lexicographic order of the points themselves.
    pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
        self.value(a).total_cmp(&self.value(b)).then_with(|| a.cmp(b))
    }
}

/// A solver for the problems whose feasible objective vectors are listed
/// explicitly.
#[derive(Debug, Clone)]
pub struct PointSetSolver {
    sense: Sense,
    points: Vec<Point>,
}
impl PointSetSolver {
    pub fn new(sense: Sense, points: Vec<Point>) -> Self {
        PointSetSolver { sense, points }
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces `best` with a point of the box that dominates it for as long
    /// as there is one. The smallest dominating point is always chosen so
    /// that the outcome does not depend on the order of the points.
    fn polish(&self, mut best: Point, candidates: &[&Point], sense: Sense) -> Point {
        loop {
            let better = candidates.iter()
                .filter(|c| c.dominates(&best, sense))
                .min()
                .copied();
            match better {
                Some(p) => best = *p,
                None => return best,
            }
        }
    }
}
impl Solver for PointSetSolver {
    fn sense(&self) -> Sense {
        self.sense
    }

    fn solve(&self, region: &SearchBox, utopia: &Point, sense: Sense) -> Result<SolveOutcome, SolverError> {
        let candidates = self.points.iter()
            .filter(|p| region.strictly_encloses(p, sense))
            .collect::<Vec<_>>();

        let scalar = Scalarization::new(*utopia, sense);
        let best   = candidates.iter().min_by(|a, b| scalar.compare(a, b));
        match best {
            None => Ok(SolveOutcome::Infeasible),
            Some(best) => Ok(SolveOutcome::Feasible(self.polish(**best, &candidates, sense))),
        }
    }

    fn optimize_objective(&self, axis: usize, sense: Sense) -> Result<Option<i64>, SolverError> {
        let values = self.points.iter().map(|p| p[axis]);
        Ok(match sense {
            Sense::Minimize => values.min(),
            Sense::Maximize => values.max(),
        })
    }
}
