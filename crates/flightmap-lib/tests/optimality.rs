//! Cross-check both searches against exhaustive path enumeration on small
//! pseudo-random graphs with parallel routes.

mod common;

use flightmap_lib::{find_route, resolve_path, FlightGraph, Route, RouteMetric};

use common::airport;

const CODES: [&str; 6] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"];

/// Small xorshift generator so the graphs are reproducible without extra crates.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn random_graph(seed: u64) -> FlightGraph {
    let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1);
    let mut graph = FlightGraph::new();
    for code in CODES {
        graph.add_airport(airport(code));
    }

    let edge_count = 4 + rng.below(10);
    for _ in 0..edge_count {
        let from = CODES[rng.below(CODES.len() as u64) as usize];
        let to = CODES[rng.below(CODES.len() as u64) as usize];
        if from == to {
            continue;
        }
        // Integer weights keep sums exact.
        let km = (1 + rng.below(50)) as f64;
        let minutes = (1 + rng.below(50)) as f64;
        let price = rng.below(50) as f64;
        graph
            .add_route(Route::new(from, to, km, minutes, price))
            .expect("source exists");
    }
    graph
}

/// Minimum cost of a single leg `from -> to` under `metric`, if any route exists.
fn leg_cost(graph: &FlightGraph, from: &str, to: &str, metric: RouteMetric) -> Option<f64> {
    graph
        .cheapest_route(from, to, metric)
        .map(|route| metric.cost(route))
}

/// Best cost over every simple path; with non-negative costs no walk beats it.
fn brute_force(graph: &FlightGraph, origin: &str, goal: &str, metric: RouteMetric) -> Option<f64> {
    fn visit(
        graph: &FlightGraph,
        current: &str,
        goal: &str,
        metric: RouteMetric,
        visited: &mut Vec<String>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for next in CODES {
            if visited.iter().any(|v| v == next) {
                continue;
            }
            if let Some(step) = leg_cost(graph, current, next, metric) {
                visited.push(next.to_string());
                visit(graph, next, goal, metric, visited, cost + step, best);
                visited.pop();
            }
        }
    }

    let mut best = None;
    let mut visited = vec![origin.to_string()];
    visit(graph, origin, goal, metric, &mut visited, 0.0, &mut best);
    best
}

#[test]
fn searches_match_exhaustive_enumeration() {
    for seed in 1..=60u64 {
        let graph = random_graph(seed);
        for origin in CODES {
            for goal in CODES {
                for metric in RouteMetric::ALL {
                    let expected = brute_force(&graph, origin, goal, metric);
                    let path = find_route(&graph, origin, goal, metric).expect("known airports");

                    match (expected, path) {
                        (None, None) => {}
                        (Some(best), Some(path)) => {
                            let result =
                                resolve_path(&graph, &path, metric).expect("path resolves");
                            assert_eq!(
                                result.cost(),
                                best,
                                "seed {seed} {origin}->{goal} by {metric}: {:?}",
                                result.path
                            );
                            assert_eq!(result.path.first().map(String::as_str), Some(origin));
                            assert_eq!(result.path.last().map(String::as_str), Some(goal));
                        }
                        (expected, path) => panic!(
                            "seed {seed} {origin}->{goal} by {metric}: expected {expected:?}, got {path:?}"
                        ),
                    }
                }
            }
        }
    }
}

#[test]
fn hop_search_never_uses_more_legs_than_weighted_search() {
    for seed in 1..=30u64 {
        let graph = random_graph(seed);
        for origin in CODES {
            for goal in CODES {
                let Some(hops) = find_route(&graph, origin, goal, RouteMetric::Hops).unwrap() else {
                    continue;
                };
                for metric in [RouteMetric::Distance, RouteMetric::Duration, RouteMetric::Price] {
                    let weighted = find_route(&graph, origin, goal, metric)
                        .unwrap()
                        .expect("reachable under every metric");
                    assert!(hops.len() <= weighted.len());
                }
            }
        }
    }
}
