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

//! Run statistics. The counters are shared by all the workers of a pool and
//! updated without taking any lock; a `Statistics` is a plain snapshot of
//! these counters.

use std::{fmt, sync::atomic::{AtomicUsize, Ordering}, time::Duration};

/// The counters that are incremented while a search is running
#[derive(Debug, Default)]
pub struct Counters {
    solves: AtomicUsize,
    infeasible: AtomicUsize,
    splits: AtomicUsize,
    boxes: AtomicUsize,
}
impl Counters {
    pub fn new() -> Self {
        Self::default()
    }
    /// Counts one single objective (scalarized) solve
    pub fn record_solve(&self) {
        self.record_solves(1);
    }
    /// Counts `n` single objective solves
    pub fn record_solves(&self, n: usize) {
        self.solves.fetch_add(n, Ordering::Relaxed);
    }
    /// Counts one box that was proven infeasible
    pub fn record_infeasible(&self) {
        self.infeasible.fetch_add(1, Ordering::Relaxed);
    }
    /// Counts `n` boxes retired by the splitting protocol
    pub fn record_splits(&self, n: usize) {
        self.splits.fetch_add(n, Ordering::Relaxed);
    }
    /// Counts `n` boxes that have been submitted to the scheduler
    pub fn record_boxes(&self, n: usize) {
        self.boxes.fetch_add(n, Ordering::Relaxed);
    }
    pub fn solves(&self) -> usize {
        self.solves.load(Ordering::Relaxed)
    }
    pub fn infeasible(&self) -> usize {
        self.infeasible.load(Ordering::Relaxed)
    }
    pub fn splits(&self) -> usize {
        self.splits.load(Ordering::Relaxed)
    }
    pub fn boxes(&self) -> usize {
        self.boxes.load(Ordering::Relaxed)
    }
    /// Takes a snapshot of the counters
    pub fn snapshot(&self, elapsed: Duration) -> Statistics {
        Statistics {
            elapsed,
            solves: self.solves(),
            infeasible: self.infeasible(),
            splits: self.splits(),
            boxes: self.boxes(),
        }
    }
}

/// What has been counted during a run
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// The wall clock time of the run
    pub elapsed: Duration,
    /// The number of solves (including the utopia computation)
    pub solves: usize,
    /// The number of boxes that were proven infeasible
    pub infeasible: usize,
    /// The number of boxes retired by the splitting protocol
    pub splits: usize,
    /// The number of boxes that were submitted
    pub boxes: usize,
}
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:.3} elapsed seconds", self.elapsed.as_secs_f64())?;
        write!(f, "{} IPs solved", self.solves)
    }
}
