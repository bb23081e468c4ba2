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

//! # Boxsplit
//! Boxsplit enumerates all the nondominated points of an integer optimization
//! problem having three objectives (either all minimized or all maximized).
//! It does so with the box splitting algorithm of Klamroth and Dächert: the
//! objective space is covered by boxes; each box is handed to a single
//! objective solver which either proves the box empty or finds a point in it.
//! Every point that is found cuts the boxes it lies in into smaller ones, and
//! the search goes on until no box remains.
//!
//! ## Side benefit
//! Boxes are solved in parallel by a pool of worker threads. So you will be
//! able to exploit all of your hardware while enumerating the frontier.
//!
//! ## Quick Example
//! All it takes to use the library is an implementation of the `Solver`
//! trait. The `PointSetSolver` is one such implementation for problems whose
//! achievable objective vectors are listed explicitly.
//!
//! ```
//! # use boxsplit::*;
//! let solver = PointSetSolver::new(Sense::Minimize, vec![
//!     Point::new(1, 4, 4),
//!     Point::new(4, 1, 4),
//!     Point::new(4, 4, 1),
//!     Point::new(2, 2, 2),
//!     Point::new(5, 5, 5),
//! ]);
//! let config   = SearchConfig::default();
//! let frontier = ParetoSearch::new(solver, config).run().unwrap();
//!
//! assert_eq!(frontier.points, vec![
//!     Point::new(4, 4, 1),
//!     Point::new(4, 1, 4),
//!     Point::new(2, 2, 2),
//!     Point::new(1, 4, 4),
//! ]);
//! ```

mod common;
mod abstraction;
mod implementation;
pub mod instance;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
