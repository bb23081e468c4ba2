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

//! This module provides the reader of problem instance files. An instance is
//! a discrete tri-objective problem given by the explicit list of its
//! achievable objective vectors:
//!
//! ```plain
//! # comments and blank lines are ignored
//! min
//! 10 20 30
//! 20 10 40
//! 30 30 10
//! ```
//!
//! The first meaningful line gives the sense of the problem (`min` or `max`),
//! every other line holds exactly three integers.

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use crate::{Point, PointSetSolver, Sense, NB_OBJECTIVES};

/// This enumeration simply groups the kind of errors that might occur when
/// parsing an instance from file. There can be io errors (file unavailable ?),
/// format errors (e.g. the file is not an instance but contains the text of
/// your next paper), or parse int errors (which are actually a variant of the
/// format error since it tells you that the parser expected an integer number
/// but got ... something else).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The file was not properly formatted.
    #[error("ill formed instance (line {line}): {reason}")]
    Format { line: usize, reason: &'static str },
}

/// A discrete tri-objective problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub sense: Sense,
    pub points: Vec<Point>,
}
impl Instance {
    pub fn into_solver(self) -> PointSetSolver {
        PointSetSolver::new(self.sense, self.points)
    }
}

/// This function is used to read an instance from file. It returns either an
/// instance if everything went on well or an error describing the problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<Instance, Error> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Parses an instance from any buffered source
pub fn parse_instance<R: BufRead>(source: R) -> Result<Instance, Error> {
    let mut sense  = None;
    let mut points = vec![];

    for (n, line) in source.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let lineno = n + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if sense.is_none() {
            sense = Some(match line {
                "min" => Sense::Minimize,
                "max" => Sense::Maximize,
                _     => return Err(Error::Format { line: lineno, reason: "expected 'min' or 'max'" }),
            });
            continue;
        }

        let values = line.split_whitespace()
            .map(|x| x.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != NB_OBJECTIVES {
            return Err(Error::Format { line: lineno, reason: "expected exactly three values" });
        }
        points.push(Point::new(values[0], values[1], values[2]));
    }

    match sense {
        Some(sense) => Ok(Instance { sense, points }),
        None        => Err(Error::Format { line: 0, reason: "missing sense declaration" }),
    }
}
