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

//! This module provides the entry point of the library: the `ParetoSearch`
//! which enumerates all the nondominated points of a problem, along with the
//! configuration of such a search.

use std::{fmt, sync::Arc, time::Instant};

use derive_builder::Builder;
use tracing::info;

use crate::{compute_utopia, BoxScheduler, Counters, Error, Point, Scheduler, SearchBox, Solver, Statistics, NB_OBJECTIVES};

/// This is how you configure a search.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct SearchConfig {
    /// The number of worker threads. Defaults to the number of hardware
    /// threads available on the machine.
    #[builder(default="num_cpus::get()")]
    nb_threads: usize,
    /// The value used on every axis of the goal corner of the initial box.
    /// When it is not set, `i32::MAX` is used for minimization problems and
    /// `i32::MIN` for maximization problems.
    #[builder(default, setter(strip_option))]
    unbounded: Option<i64>,
}
impl SearchConfig {
    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }
    pub fn unbounded(&self) -> Option<i64> {
        self.unbounded
    }
}
impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { nb_threads: num_cpus::get(), unbounded: None }
    }
}

/// The outcome of a complete search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    /// The nondominated points, by decreasing first then second coordinate
    pub points: Vec<Point>,
    /// The utopia point of the problem (none when it is infeasible)
    pub utopia: Option<Point>,
    /// What was counted during the search
    pub statistics: Statistics,
}
impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.points.iter() {
            writeln!(f, "{}\t{}\t{}", p[0], p[1], p[2])?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "{}", self.statistics)?;
        writeln!(f, "{} Solutions found", self.points.len())
    }
}

/// The box splitting search. It computes the utopia point of the problem,
/// then hands one box enclosing the whole objective space to a pool of
/// workers and waits until they have explored all of it.
///
/// # Example Usage
/// ```
/// # use boxsplit::*;
/// let solver = PointSetSolver::new(Sense::Maximize, vec![
///     Point::new(3, 1, 1),
///     Point::new(1, 3, 1),
///     Point::new(1, 1, 3),
///     Point::new(1, 1, 1),
/// ]);
/// let config = SearchConfigBuilder::default().nb_threads(2).build().unwrap();
/// let search = ParetoSearch::new(solver, config);
///
/// let frontier = search.run().unwrap();
/// assert_eq!(Some(Point::new(3, 3, 3)), frontier.utopia);
/// assert_eq!(frontier.points, vec![
///     Point::new(3, 1, 1),
///     Point::new(1, 3, 1),
///     Point::new(1, 1, 3),
/// ]);
/// ```
pub struct ParetoSearch<S> {
    solver: Arc<S>,
    config: SearchConfig,
}
impl<S> ParetoSearch<S>
where S: Solver + Send + Sync + 'static
{
    pub fn new(solver: S, config: SearchConfig) -> Self {
        ParetoSearch { solver: Arc::new(solver), config }
    }
    pub fn solver(&self) -> &S {
        &self.solver
    }
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The box enclosing the whole objective space of a problem having the
    /// given utopia point.
    pub fn initial_box(&self, utopia: &Point) -> SearchBox {
        let sense     = self.solver.sense();
        let unbounded = self.config.unbounded.unwrap_or_else(|| sense.default_unbounded());

        let mut v = *utopia;
        for i in 0..NB_OBJECTIVES {
            v[i] = sense.one_step_better(utopia[i]);
        }
        SearchBox::new(Point::splat(unbounded), v)
    }

    /// Enumerates all the nondominated points of the problem.
    pub fn run(&self) -> Result<Frontier, Error> {
        let start    = Instant::now();
        let sense    = self.solver.sense();
        let counters = Arc::new(Counters::new());

        let utopia = compute_utopia(self.solver.as_ref(), sense).map_err(Error::Utopia)?;
        let Some(utopia) = utopia else {
            info!("the problem is infeasible");
            counters.record_solve();
            return Ok(Frontier { points: vec![], utopia: None, statistics: counters.snapshot(start.elapsed()) });
        };
        counters.record_solves(NB_OBJECTIVES);
        info!("utopia point is {}", utopia);

        let scheduler = BoxScheduler::new(Arc::clone(&self.solver), utopia, self.config.nb_threads, Arc::clone(&counters));
        scheduler.submit(self.initial_box(&utopia))?;
        scheduler.wait()?;
        let points = scheduler.solutions();
        drop(scheduler);

        let statistics = counters.snapshot(start.elapsed());
        info!("found {} nondominated points with {} solves", points.len(), statistics.solves);
        Ok(Frontier { points, utopia: Some(utopia), statistics })
    }
}
