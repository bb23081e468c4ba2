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

//! This module defines the `Scheduler` trait.

use crate::{Error, Point, SearchBox};

/// This is the abstraction of the component which dispatches boxes to the
/// workers of a pool and keeps track of the boxes that remain to be explored.
///
/// Because new boxes are created as the search goes (each time a point is
/// found), there is no token telling that the work is done. Instead, the
/// completion of the search is detected with `wait` which blocks until the
/// scheduler is quiescent: no box is pending and no box is being solved.
pub trait Scheduler {
    /// Enqueues a box to be explored. This fails when the scheduler has
    /// already begun its shutdown or when the box is ill-formed.
    fn submit(&self, region: SearchBox) -> Result<(), Error>;
    /// Blocks the caller until no box is pending and no worker is busy. It
    /// returns the error that halted the search, if there is one.
    fn wait(&self) -> Result<(), Error>;
    /// Returns the deduplicated points found so far, in reporting order
    /// (decreasing first coordinate then decreasing second coordinate).
    fn solutions(&self) -> Vec<Point>;
    /// Stops the dispatch of new boxes. The boxes being solved when this
    /// is called are still brought to completion.
    fn shutdown(&self);
}
