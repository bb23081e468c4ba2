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

//! The command line front end: it enumerates the frontier of an instance file
//! and prints a report of the search.

use std::{fs::File, io::Write};

use anyhow::Context;
use boxsplit::{instance::read_instance, ParetoSearch, SearchConfigBuilder};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Enumerates all the nondominated points of a tri-objective integer problem
/// with the parallel box splitting algorithm
struct Args {
    /// The path to the instance file
    fname: String,
    /// The number of concurrent threads (defaults to the number of cpus)
    #[clap(short, long)]
    threads: Option<usize>,
    /// Where to write the report (defaults to the standard output)
    #[clap(short, long)]
    output: Option<String>,
    /// The value used on the open side of the initial box (defaults to
    /// i32::MAX when minimizing and i32::MIN when maximizing)
    #[clap(short, long)]
    unbounded: Option<i64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args     = Args::parse();
    let instance = read_instance(&args.fname)
        .with_context(|| format!("cannot read instance {}", args.fname))?;

    let mut config = SearchConfigBuilder::default();
    if let Some(threads) = args.threads {
        config.nb_threads(threads);
    }
    if let Some(unbounded) = args.unbounded {
        config.unbounded(unbounded);
    }
    let config = config.build()?;

    let search   = ParetoSearch::new(instance.into_solver(), config);
    let frontier = search.run()?;

    match args.output {
        Some(path) => {
            let mut out = File::create(&path).with_context(|| format!("cannot create {}", path))?;
            write!(out, "{}", frontier)?;
        }
        None => print!("{}", frontier),
    }
    Ok(())
}
