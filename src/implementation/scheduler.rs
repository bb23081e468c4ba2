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

//! This module provides the implementation of the box scheduler: a pool of
//! worker threads that keep solving boxes until no box remains to be
//! explored. Each time a worker finds a point, it applies the splitting
//! protocol to the collection of all live (pending and in-flight) boxes in
//! one single critical section.
use std::{any::Any, collections::VecDeque, panic::{self, AssertUnwindSafe}, sync::Arc, thread::{self, JoinHandle}};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, error};

use crate::{Counters, Error, Point, Scheduler, SearchBox, SolutionSet, SolveOutcome, Solver, SolverError, Splitter, Subsets};

/// The shared data that may only be manipulated within critical sections
struct Critical {
    /// The boxes that have not been dispatched to any worker yet
    pending: VecDeque<SearchBox>,
    /// The box each worker is currently solving (if any).
    ///
    /// # Note
    /// A box that is being solved may well be retired by the point another
    /// worker has found. In that case, the slot is emptied right away while
    /// the worker keeps on solving its (now stale) box.
    in_flight: Vec<Option<SearchBox>>,
    /// This is the number of boxes that are currently being solved.
    ///
    /// # Note
    /// This is the piece of information that lets us distinguish between a
    /// box-starvation and the completion of the search. Only when it is zero
    /// and there is no pending box is the scheduler quiescent.
    ongoing: usize,
    /// All the points found so far
    solutions: SolutionSet,
    /// Set as soon as the scheduler begins its shutdown
    shutdown: bool,
    /// The first error that brought the search to a halt
    failure: Option<Error>,
}
impl Critical {
    fn is_quiescent(&self) -> bool {
        self.ongoing == 0 && (self.pending.is_empty() || self.shutdown)
    }
    /// Records a fatal error. Only the first error is kept and none of the
    /// pending boxes will ever be dispatched.
    fn fail(&mut self, err: Error) {
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.pending.clear();
    }
}

/// The state which is shared among the many running threads: it provides an
/// access to the critical data (protected by a mutex) as well as the monitors
/// (condvars) to park threads in case of box-starvation or while waiting for
/// the search to complete.
struct Shared<S> {
    /// The single objective oracle
    solver: Arc<S>,
    /// The component applying the splitting protocol (knows the utopia)
    splitter: Splitter,
    /// The run statistics
    counters: Arc<Counters>,
    /// This is the shared state data which can only be accessed within
    /// critical sections.
    critical: Mutex<Critical>,
    /// This is the monitor on which workers wait when facing an empty set of
    /// pending boxes. It is notified whenever a box is enqueued.
    monitor: Condvar,
    /// This is the monitor on which `wait` blocks until the scheduler
    /// becomes quiescent.
    quiescence: Condvar,
}
impl<S> Shared<S> {
    fn new(solver: Arc<S>, splitter: Splitter, counters: Arc<Counters>, nb_workers: usize) -> Self {
        Shared {
            solver,
            splitter,
            counters,
            critical: Mutex::new(Critical {
                pending: VecDeque::new(),
                in_flight: vec![None; nb_workers],
                ongoing: 0,
                solutions: SolutionSet::new(),
                shutdown: false,
                failure: None,
            }),
            monitor: Condvar::new(),
            quiescence: Condvar::new(),
        }
    }
}

/// The workload a thread can get from the shared state
#[derive(Debug, PartialEq, Eq)]
enum WorkLoad {
    /// The scheduler is shutting down: you can safely terminate
    Complete,
    /// There is nothing you can do right now. Check again when you wake up
    Starvation,
    /// The box to solve
    WorkItem { region: SearchBox },
}

/// Consults the shared state to fetch a workload. Depending on the current
/// state, the workload can either be:
///
///   + Complete, when the scheduler is shutting down
///   + Starvation, when there is no pending box at the time being
///   + WorkItem, when the thread successfully obtained a box to solve.
fn get_workload<S>(shared: &Shared<S>, worker: usize) -> WorkLoad {
    let mut critical = shared.critical.lock();

    if critical.shutdown {
        return WorkLoad::Complete;
    }

    match critical.pending.pop_front() {
        None => {
            shared.monitor.wait(&mut critical);
            WorkLoad::Starvation
        }
        Some(region) => {
            critical.ongoing += 1;
            critical.in_flight[worker] = Some(region);
            debug!("worker {} dispatched {}", worker, region);
            WorkLoad::WorkItem { region }
        }
    }
}

/// Acknowledges that a worker finished solving its box. This is where the
/// outcome of the solver is integrated: a feasible point triggers the
/// splitting protocol over all live boxes and is recorded in the solution
/// set; an infeasible box is simply discarded.
fn notify_box_finished<S>(shared: &Shared<S>, worker: usize, region: SearchBox, outcome: Result<SolveOutcome, SolverError>) {
    shared.counters.record_solve();

    let mut critical = shared.critical.lock();
    let backlog = critical.pending.len();
    match outcome {
        Ok(SolveOutcome::Infeasible) => {
            debug!("discard {}", region);
            shared.counters.record_infeasible();
        }
        Ok(SolveOutcome::Feasible(point)) => {
            if critical.failure.is_none() {
                if let Err(e) = integrate(shared, &mut critical, &point, region) {
                    error!("{}", e);
                    critical.fail(e);
                }
            }
        }
        Err(source) => {
            let e = Error::Solver { region, source };
            error!("{}", e);
            critical.fail(e);
        }
    }

    critical.in_flight[worker] = None;
    critical.ongoing -= 1;
    if critical.is_quiescent() {
        shared.quiescence.notify_all();
    }
    if critical.pending.len() > backlog {
        shared.monitor.notify_all();
    }
}

/// Runs the splitting protocol for `point` over the pending and in-flight
/// boxes, then records the point.
fn integrate<S>(shared: &Shared<S>, critical: &mut Critical, point: &Point, region: SearchBox) -> Result<(), Error> {
    let sense = shared.splitter.sense();
    if !region.strictly_encloses(point, sense) {
        return Err(Error::InvariantViolation {
            region,
            reason: "the solver returned a point outside of the box",
        });
    }

    let mut subsets  = Subsets::default();
    let Critical { pending, in_flight, solutions, .. } = critical;
    let live = pending.iter_mut().chain(in_flight.iter_mut().flatten());
    let retired = shared.splitter.generate(point, live, &mut subsets)?;

    pending.retain(|b| !b.is_retired());
    in_flight.iter_mut()
        .filter(|slot| slot.map_or(false, |b| b.is_retired()))
        .for_each(|slot| *slot = None);

    let children = shared.splitter.update_individual_subsets(point, &mut subsets);
    debug!("point {} retired {} boxes and created {} children", point, retired, children.len());

    shared.counters.record_splits(retired);
    shared.counters.record_boxes(children.len());
    pending.extend(children);
    solutions.push(*point, region);
    Ok(())
}

/// The loop each worker thread runs until the scheduler shuts down
fn work<S: Solver>(shared: &Shared<S>, worker: usize) {
    let sense  = shared.splitter.sense();
    let utopia = shared.splitter.utopia();
    loop {
        match get_workload(shared, worker) {
            WorkLoad::Complete   => break,
            WorkLoad::Starvation => continue,
            WorkLoad::WorkItem { region } => {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| shared.solver.solve(&region, &utopia, sense)))
                    .unwrap_or_else(|payload| Err(panic_to_error(payload)));
                notify_box_finished(shared, worker, region, outcome);
            }
        }
    }
}

/// Turns the payload of a solver panic into a solver failure
fn panic_to_error(payload: Box<dyn Any + Send>) -> SolverError {
    let message = if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown cause".to_string()
    };
    SolverError(format!("solver panicked: {}", message))
}

/// This is the structure implementing the box scheduler: a fixed size pool
/// of long running workers sharing one collection of boxes.
///
/// The workers are spawned when the scheduler is created and they are joined
/// when it is dropped.
///
/// # Example Usage
/// ```
/// # use std::sync::Arc;
/// # use boxsplit::*;
/// let solver  = Arc::new(PointSetSolver::new(Sense::Minimize, vec![
///     Point::new(1, 5, 5),
///     Point::new(5, 1, 5),
///     Point::new(5, 5, 1),
///     Point::new(6, 6, 6),
/// ]));
/// let utopia  = Point::new(1, 1, 1);
/// let sched   = BoxScheduler::new(solver, utopia, 2, Arc::new(Counters::new()));
///
/// sched.submit(SearchBox::new(Point::splat(100), Point::splat(0))).unwrap();
/// sched.wait().unwrap();
///
/// assert_eq!(sched.solutions(), vec![
///     Point::new(5, 5, 1),
///     Point::new(5, 1, 5),
///     Point::new(1, 5, 5),
/// ]);
/// ```
pub struct BoxScheduler<S> {
    shared: Arc<Shared<S>>,
    workers: Vec<JoinHandle<()>>,
}
impl<S> BoxScheduler<S>
where S: Solver + Send + Sync + 'static
{
    /// Creates a scheduler and spawns its `nb_threads` workers (at least
    /// one). The workers solve the boxes with the given `solver`, and the
    /// points they find are split around the `utopia` point.
    pub fn new(solver: Arc<S>, utopia: Point, nb_threads: usize, counters: Arc<Counters>) -> Self {
        let nb_threads = nb_threads.max(1);
        let splitter   = Splitter::new(utopia, solver.sense());
        let shared     = Arc::new(Shared::new(solver, splitter, counters, nb_threads));

        let workers = (0..nb_threads)
            .map(|i| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || work(&shared, i))
            })
            .collect();

        BoxScheduler { shared, workers }
    }
}
impl<S> BoxScheduler<S> {
    /// The counters updated by this scheduler
    pub fn counters(&self) -> &Counters {
        &self.shared.counters
    }
    pub fn nb_threads(&self) -> usize {
        self.workers.len()
    }
}
impl<S> Scheduler for BoxScheduler<S> {
    fn submit(&self, region: SearchBox) -> Result<(), Error> {
        let mut critical = self.shared.critical.lock();
        if critical.shutdown {
            return Err(Error::SubmitAfterShutdown);
        }
        if let Some(e) = critical.failure.as_ref() {
            return Err(e.clone());
        }
        if region.inverted_axis(self.shared.splitter.sense()).is_some() {
            return Err(Error::InvariantViolation {
                region,
                reason: "the reference corner is worse than the goal corner",
            });
        }
        debug!("submit {}", region);
        critical.pending.push_back(region);
        self.shared.counters.record_boxes(1);
        self.shared.monitor.notify_one();
        Ok(())
    }

    fn wait(&self) -> Result<(), Error> {
        let mut critical = self.shared.critical.lock();
        while !critical.is_quiescent() {
            self.shared.quiescence.wait(&mut critical);
        }
        match critical.failure.as_ref() {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn solutions(&self) -> Vec<Point> {
        self.shared.critical.lock().solutions.report()
    }

    fn shutdown(&self) {
        let mut critical = self.shared.critical.lock();
        critical.shutdown = true;
        self.shared.monitor.notify_all();
        self.shared.quiescence.notify_all();
    }
}
impl<S> Drop for BoxScheduler<S> {
    fn drop(&mut self) {
        self.shutdown();
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                error!("a worker thread panicked");
            }
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_scheduler {
    use std::{sync::{Arc, atomic::{AtomicUsize, Ordering}}, thread, time::Duration};

    use crate::*;
    use super::{get_workload, notify_box_finished, Shared, WorkLoad};

    /// A solver whose behavior is entirely described by a closure
    struct FnSolver<F>(Sense, F);
    impl<F> Solver for FnSolver<F>
    where F: Fn(&SearchBox) -> Result<SolveOutcome, SolverError>
    {
        fn sense(&self) -> Sense {
            self.0
        }
        fn solve(&self, region: &SearchBox, _: &Point, _: Sense) -> Result<SolveOutcome, SolverError> {
            (self.1)(region)
        }
        fn optimize_objective(&self, _: usize, _: Sense) -> Result<Option<i64>, SolverError> {
            Ok(Some(0))
        }
    }

    /// A solver that takes its time before answering like the wrapped one
    struct Sleepy {
        inner: PointSetSolver,
        delay: Duration,
        calls: AtomicUsize,
    }
    impl Solver for Sleepy {
        fn sense(&self) -> Sense {
            self.inner.sense()
        }
        fn solve(&self, region: &SearchBox, utopia: &Point, sense: Sense) -> Result<SolveOutcome, SolverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.delay);
            self.inner.solve(region, utopia, sense)
        }
        fn optimize_objective(&self, axis: usize, sense: Sense) -> Result<Option<i64>, SolverError> {
            self.inner.optimize_objective(axis, sense)
        }
    }

    fn initial_box() -> SearchBox {
        SearchBox::new(Point::splat(100), Point::splat(-1))
    }
    fn first_point_then_infeasible(region: &SearchBox) -> Result<SolveOutcome, SolverError> {
        if region.u == Point::splat(100) {
            Ok(SolveOutcome::Feasible(Point::new(10, 20, 30)))
        } else {
            Ok(SolveOutcome::Infeasible)
        }
    }
    fn shared_state<F>(f: F) -> Shared<FnSolver<F>>
    where F: Fn(&SearchBox) -> Result<SolveOutcome, SolverError>
    {
        let splitter = Splitter::new(Point::splat(0), Sense::Minimize);
        Shared::new(Arc::new(FnSolver(Sense::Minimize, f)), splitter, Arc::new(Counters::new()), 1)
    }
    fn solve_next<F>(shared: &Shared<FnSolver<F>>) -> SearchBox
    where F: Fn(&SearchBox) -> Result<SolveOutcome, SolverError>
    {
        match get_workload(shared, 0) {
            WorkLoad::WorkItem { region } => {
                let outcome = (shared.solver.1)(&region);
                notify_box_finished(shared, 0, region, outcome);
                region
            }
            other => panic!("expected a box, got {:?}", other),
        }
    }

    #[test]
    fn a_found_point_splits_the_box_it_was_found_in() {
        let shared = shared_state(first_point_then_infeasible);
        shared.critical.lock().pending.push_back(initial_box());

        solve_next(&shared);

        let critical = shared.critical.lock();
        assert_eq!(0, critical.ongoing);
        assert_eq!(vec![None], critical.in_flight);
        assert_eq!(vec![Point::new(10, 20, 30)], critical.solutions.report());
        assert_eq!(critical.pending.iter().copied().collect::<Vec<_>>(), vec![
            SearchBox::new(Point::new( 10, 100, 100), Point::new(-1, 20, 30)),
            SearchBox::new(Point::new(100,  20, 100), Point::new(10, -1, 30)),
            SearchBox::new(Point::new(100, 100,  30), Point::new(10, 20, -1)),
        ]);
    }
    #[test]
    fn an_infeasible_box_is_discarded() {
        let shared = shared_state(first_point_then_infeasible);
        shared.critical.lock().pending.push_back(initial_box());

        solve_next(&shared);
        let discarded = solve_next(&shared);

        assert_eq!(SearchBox::new(Point::new(10, 100, 100), Point::new(-1, 20, 30)), discarded);
        let critical = shared.critical.lock();
        assert_eq!(2, critical.pending.len());
        assert_eq!(vec![Point::new(10, 20, 30)], critical.solutions.report());
        assert_eq!(2, shared.counters.solves());
        assert_eq!(1, shared.counters.infeasible());
        assert_eq!(1, shared.counters.splits());
    }
    #[test]
    fn a_stale_in_flight_box_is_retired_but_its_result_is_kept() {
        let splitter = Splitter::new(Point::splat(0), Sense::Minimize);
        let solver   = FnSolver(Sense::Minimize, |_: &SearchBox| -> Result<SolveOutcome, SolverError> {
            Ok(SolveOutcome::Infeasible)
        });
        let shared   = Shared::new(Arc::new(solver), splitter, Arc::new(Counters::new()), 2);

        let a = SearchBox::new(Point::splat(100), Point::splat(-1));
        let b = SearchBox::new(Point::new(100, 100, 50), Point::splat(-1));
        shared.critical.lock().pending.extend([a, b]);

        assert_eq!(WorkLoad::WorkItem { region: a }, get_workload(&shared, 0));
        assert_eq!(WorkLoad::WorkItem { region: b }, get_workload(&shared, 1));

        // worker 0 finds a point that also lies in the box of worker 1
        notify_box_finished(&shared, 0, a, Ok(SolveOutcome::Feasible(Point::new(10, 20, 30))));
        {
            let critical = shared.critical.lock();
            assert_eq!(vec![None, None], critical.in_flight);
            assert_eq!(1, critical.ongoing);
            assert_eq!(6, critical.pending.len());
        }
        // worker 1 eventually finds the same point in its stale box
        notify_box_finished(&shared, 1, b, Ok(SolveOutcome::Feasible(Point::new(10, 20, 30))));
        let critical = shared.critical.lock();
        assert_eq!(0, critical.ongoing);
        assert_eq!(6, critical.pending.len());
        assert_eq!(2, critical.solutions.len());
        assert_eq!(vec![Point::new(10, 20, 30)], critical.solutions.report());
    }
    #[test]
    fn a_point_outside_of_its_box_halts_the_search() {
        let shared = shared_state(|_: &SearchBox| Ok(SolveOutcome::Feasible(Point::new(10, 200, 30))));
        shared.critical.lock().pending.push_back(initial_box());

        solve_next(&shared);
        let critical = shared.critical.lock();
        assert!(matches!(critical.failure, Some(Error::InvariantViolation { .. })));
        assert!(critical.pending.is_empty());
        assert!(critical.solutions.is_empty());
    }

    #[test]
    fn end_to_end_with_a_single_worker() {
        let solver = Arc::new(FnSolver(Sense::Minimize, first_point_then_infeasible));
        let sched  = BoxScheduler::new(solver, Point::splat(0), 1, Arc::new(Counters::new()));

        sched.submit(initial_box()).unwrap();
        sched.wait().unwrap();

        assert_eq!(vec![Point::new(10, 20, 30)], sched.solutions());
        assert_eq!(4, sched.counters().solves());
        assert_eq!(3, sched.counters().infeasible());
        assert_eq!(4, sched.counters().boxes());
    }
    #[test]
    fn wait_returns_immediately_when_nothing_was_submitted() {
        let solver = Arc::new(FnSolver(Sense::Minimize, first_point_then_infeasible));
        let sched  = BoxScheduler::new(solver, Point::splat(0), 3, Arc::new(Counters::new()));
        assert_eq!(Ok(()), sched.wait());
        assert!(sched.solutions().is_empty());
        assert_eq!(3, sched.nb_threads());
    }
    #[test]
    fn zero_threads_means_one_worker() {
        let solver = Arc::new(FnSolver(Sense::Minimize, first_point_then_infeasible));
        let sched  = BoxScheduler::new(solver, Point::splat(0), 0, Arc::new(Counters::new()));
        sched.submit(initial_box()).unwrap();
        sched.wait().unwrap();
        assert_eq!(1, sched.nb_threads());
        assert_eq!(vec![Point::new(10, 20, 30)], sched.solutions());
    }
    #[test]
    fn submit_after_shutdown_fails() {
        let solver = Arc::new(FnSolver(Sense::Minimize, first_point_then_infeasible));
        let sched  = BoxScheduler::new(solver, Point::splat(0), 2, Arc::new(Counters::new()));
        sched.shutdown();
        assert_eq!(Err(Error::SubmitAfterShutdown), sched.submit(initial_box()));
    }
    #[test]
    fn submit_rejects_an_inverted_box() {
        let solver = Arc::new(FnSolver(Sense::Minimize, first_point_then_infeasible));
        let sched  = BoxScheduler::new(solver, Point::splat(0), 1, Arc::new(Counters::new()));
        let broken = SearchBox::new(Point::splat(10), Point::new(0, 0, 11));
        assert!(matches!(sched.submit(broken), Err(Error::InvariantViolation { region, .. }) if region == broken));
        assert_eq!(Ok(()), sched.wait());
    }
    #[test]
    fn a_solver_failure_is_reported_by_wait() {
        let solver = Arc::new(FnSolver(Sense::Minimize, |region: &SearchBox| -> Result<SolveOutcome, SolverError> {
            if region.u == Point::splat(100) {
                Ok(SolveOutcome::Feasible(Point::new(10, 20, 30)))
            } else {
                Err(SolverError("numerical trouble".to_string()))
            }
        }));
        let sched = BoxScheduler::new(solver, Point::splat(0), 4, Arc::new(Counters::new()));

        sched.submit(initial_box()).unwrap();
        let outcome = sched.wait();

        match outcome {
            Err(Error::Solver { source, .. }) => assert_eq!("numerical trouble", source.0),
            other => panic!("unexpected outcome {:?}", other),
        }
        // no new box is accepted once the search has failed
        assert!(sched.submit(initial_box()).is_err());
    }
    #[test]
    fn a_panicking_solver_is_reported_by_wait() {
        let solver = Arc::new(FnSolver(Sense::Minimize, |region: &SearchBox| -> Result<SolveOutcome, SolverError> {
            if region.u == Point::splat(100) {
                Ok(SolveOutcome::Feasible(Point::new(10, 20, 30)))
            } else {
                panic!("lost the model")
            }
        }));
        let sched = BoxScheduler::new(solver, Point::splat(0), 2, Arc::new(Counters::new()));

        sched.submit(initial_box()).unwrap();
        match sched.wait() {
            Err(Error::Solver { source, .. }) => {
                assert!(source.0.contains("panicked"));
                assert!(source.0.contains("lost the model"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        // the workers survived the panic and still honor the shutdown
        sched.shutdown();
        assert_eq!(2, sched.nb_threads());
    }
    #[test]
    fn a_panic_with_a_formatted_message_keeps_its_message() {
        let solver = Arc::new(FnSolver(Sense::Minimize, |region: &SearchBox| -> Result<SolveOutcome, SolverError> {
            panic!("cannot solve {}", region)
        }));
        let sched = BoxScheduler::new(solver, Point::splat(0), 1, Arc::new(Counters::new()));

        sched.submit(initial_box()).unwrap();
        match sched.wait() {
            Err(Error::Solver { region, source }) => {
                assert_eq!(initial_box(), region);
                assert_eq!(format!("solver panicked: cannot solve {}", initial_box()), source.0);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    #[test]
    fn idle_workers_wake_up_when_a_split_creates_boxes() {
        let solver = Arc::new(FnSolver(Sense::Minimize, |region: &SearchBox| -> Result<SolveOutcome, SolverError> {
            thread::sleep(Duration::from_millis(10));
            first_point_then_infeasible(region)
        }));
        let sched = BoxScheduler::new(solver, Point::splat(0), 4, Arc::new(Counters::new()));

        sched.submit(initial_box()).unwrap();
        sched.wait().unwrap();

        assert_eq!(4, sched.counters().solves());
        assert_eq!(3, sched.counters().infeasible());
        assert_eq!(vec![Point::new(10, 20, 30)], sched.solutions());
        let critical = sched.shared.critical.lock();
        assert!(critical.pending.is_empty());
        assert!(critical.in_flight.iter().all(Option::is_none));
    }
    #[test]
    fn wait_blocks_until_slow_workers_are_done() {
        let points = vec![
            Point::new(1, 8, 8), Point::new(8, 1, 8), Point::new(8, 8, 1),
            Point::new(3, 3, 6), Point::new(3, 6, 3), Point::new(6, 3, 3),
            Point::new(9, 9, 9),
        ];
        let solver = Arc::new(Sleepy {
            inner: PointSetSolver::new(Sense::Minimize, points),
            delay: Duration::from_millis(20),
            calls: AtomicUsize::new(0),
        });
        let sched = BoxScheduler::new(Arc::clone(&solver), Point::splat(1), 4, Arc::new(Counters::new()));

        sched.submit(SearchBox::new(Point::splat(100), Point::splat(0))).unwrap();
        sched.wait().unwrap();

        let critical = sched.shared.critical.lock();
        assert_eq!(0, critical.ongoing);
        assert!(critical.pending.is_empty());
        assert!(critical.in_flight.iter().all(Option::is_none));
        assert_eq!(solver.calls.load(Ordering::SeqCst), sched.counters().solves());
        drop(critical);

        assert_eq!(sched.solutions(), vec![
            Point::new(8, 8, 1),
            Point::new(8, 1, 8),
            Point::new(6, 3, 3),
            Point::new(3, 6, 3),
            Point::new(3, 3, 6),
            Point::new(1, 8, 8),
        ]);
    }
    #[test]
    fn dropping_a_busy_scheduler_joins_its_workers() {
        let solver = Arc::new(Sleepy {
            inner: PointSetSolver::new(Sense::Minimize, vec![Point::new(1, 2, 3)]),
            delay: Duration::from_millis(50),
            calls: AtomicUsize::new(0),
        });
        let sched = BoxScheduler::new(Arc::clone(&solver), Point::new(1, 2, 3), 2, Arc::new(Counters::new()));
        sched.submit(SearchBox::new(Point::splat(100), Point::splat(0))).unwrap();
        drop(sched);
        assert!(solver.calls.load(Ordering::SeqCst) <= 1);
        assert_eq!(1, Arc::strong_count(&solver));
    }
}
