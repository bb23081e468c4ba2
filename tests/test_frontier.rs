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

use std::path::PathBuf;

use boxsplit::{instance::{read_instance, Instance}, *};

fn instance(id: &str) -> Instance {
    let location = PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/instances/")
        .join(id);

    read_instance(location).expect("cannot read instance")
}

/// The nondominated points of `points`, computed the naive way
fn brute_force(sense: Sense, points: &[Point]) -> Vec<Point> {
    let mut frontier = points.iter()
        .filter(|p| points.iter().all(|q| !q.dominates(p, sense)))
        .copied()
        .collect::<Vec<_>>();
    frontier.sort_unstable();
    frontier.dedup();
    frontier
}

fn is_in_reporting_order(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0][0] > w[1][0] || (w[0][0] == w[1][0] && w[0][1] >= w[1][1]))
}

fn enumerate(instance: Instance, nb_threads: usize) -> Frontier {
    let config = SearchConfigBuilder::default().nb_threads(nb_threads).build().unwrap();
    ParetoSearch::new(instance.into_solver(), config).run().unwrap()
}

fn check(id: &str, nb_threads: usize) {
    let inst     = instance(id);
    let expected = brute_force(inst.sense, &inst.points);
    let frontier = enumerate(inst, nb_threads);

    assert!(is_in_reporting_order(&frontier.points));
    let mut actual = frontier.points.clone();
    actual.sort_unstable();
    assert_eq!(expected, actual);
}

#[test]
fn knapsack_12_sequential() {
    check("knapsack_12.txt", 1);
}
#[test]
fn knapsack_12_parallel() {
    check("knapsack_12.txt", 4);
}
#[test]
fn random_min_sequential() {
    check("random_min.txt", 1);
}
#[test]
fn random_min_parallel() {
    check("random_min.txt", 8);
}
#[test]
fn random_max_sequential() {
    check("random_max.txt", 1);
}
#[test]
fn random_max_parallel() {
    check("random_max.txt", 8);
}
#[test]
fn ties_min_sequential() {
    check("ties_min.txt", 1);
}
#[test]
fn ties_min_parallel() {
    check("ties_min.txt", 4);
}
#[test]
fn mixed_signs_min_sequential() {
    check("mixed_signs_min.txt", 1);
}
#[test]
fn mixed_signs_min_parallel() {
    check("mixed_signs_min.txt", 4);
}
#[test]
fn mixed_signs_max_sequential() {
    check("mixed_signs_max.txt", 1);
}
#[test]
fn mixed_signs_max_parallel() {
    check("mixed_signs_max.txt", 4);
}
#[test]
fn mixed_signs_max_keeps_zero_and_negative_coordinates() {
    let frontier = enumerate(instance("mixed_signs_max.txt"), 2);
    assert_eq!(13, frontier.points.len());
    assert!(frontier.points.iter().any(|p| p.iter().any(|&x| x <= 0)));
}
#[test]
fn plane_min_sequential() {
    check("plane_min.txt", 1);
}
#[test]
fn plane_min_parallel() {
    check("plane_min.txt", 6);
}

#[test]
fn knapsack_12_frontier_size() {
    assert_eq!(11, enumerate(instance("knapsack_12.txt"), 2).points.len());
}
#[test]
fn every_point_of_a_plane_is_nondominated() {
    assert_eq!(66, enumerate(instance("plane_min.txt"), 2).points.len());
}
#[test]
fn infeasible_instance_has_an_empty_frontier() {
    let frontier = enumerate(instance("infeasible.txt"), 4);
    assert!(frontier.points.is_empty());
    assert_eq!(None, frontier.utopia);
}

#[test]
fn the_frontier_does_not_depend_on_the_number_of_threads() {
    let sequential = enumerate(instance("random_max.txt"), 1);
    for nb_threads in [2, 3, 5, 16] {
        let parallel = enumerate(instance("random_max.txt"), nb_threads);
        let mut a = sequential.points.clone();
        let mut b = parallel.points.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(sequential.utopia, parallel.utopia);
    }
}

/// Many small random problems with lots of ties, solved in both senses
#[test]
fn random_problems_match_the_brute_force() {
    let mut seed = 42_u64;
    let mut next = move |bound: u64| {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        ((seed >> 33) % bound) as i64
    };

    for round in 0..60 {
        let sense  = if round % 2 == 0 { Sense::Minimize } else { Sense::Maximize };
        let range  = 3 + next(12) as u64;
        let size   = 1 + next(40) as usize;
        let points = (0..size)
            .map(|_| Point::new(next(range), next(range), next(range)))
            .collect::<Vec<_>>();

        let expected = brute_force(sense, &points);
        let frontier = enumerate(Instance { sense, points }, 1 + round % 4);

        let mut actual = frontier.points.clone();
        actual.sort_unstable();
        assert_eq!(expected, actual, "round {}", round);
        assert!(is_in_reporting_order(&frontier.points));
    }
}

#[test]
fn statistics_are_consistent() {
    let frontier = enumerate(instance("random_min.txt"), 4);
    let stats    = frontier.statistics;

    // a box is solved at most once (a pending box may be retired before any
    // worker gets to it), the utopia computation takes three more solves
    assert!(stats.solves <= stats.boxes + NB_OBJECTIVES);
    assert!(stats.solves > NB_OBJECTIVES);
    assert!(stats.infeasible < stats.solves);
    assert!(stats.splits >= frontier.points.len());
}
