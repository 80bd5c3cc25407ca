mod common;

use std::sync::Arc;
use std::thread;

use flightmap_lib::{RouteMetric, RoutingService};

use common::fixture_graph;

#[test]
fn shared_graph_serves_parallel_queries() {
    let service = RoutingService::from_shared(Arc::new(fixture_graph()));
    let expected: Vec<_> = RouteMetric::ALL
        .iter()
        .map(|metric| service.route("SIN", "HND", *metric).expect("known airports"))
        .collect();

    thread::scope(|scope| {
        for worker in 0..8 {
            let service = service.clone();
            let expected = &expected;
            scope.spawn(move || {
                for round in 0..25 {
                    let index = (worker + round) % RouteMetric::ALL.len();
                    let outcome = service
                        .route("SIN", "HND", RouteMetric::ALL[index])
                        .expect("known airports");
                    assert_eq!(outcome, expected[index]);
                }
            });
        }
    });
}
