use criterion::{criterion_group, criterion_main, Criterion};
use flightmap_lib::{load_graph, plan_route, FlightGraph, RouteRequest};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/airline_routes.json")
}

static GRAPH: Lazy<FlightGraph> =
    Lazy::new(|| load_graph(&fixture_path()).expect("fixture loads").0);
static HOPS_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::hops("SIN", "HND"));
static DISTANCE_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::distance("SIN", "HND"));
static DURATION_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::duration("SIN", "HND"));
static PRICE_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::price("SIN", "HND"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("hops_sin_hnd", |b| {
        let request = &*HOPS_REQUEST;
        b.iter(|| {
            let outcome = plan_route(graph, request).expect("known airports");
            black_box(outcome.is_found())
        });
    });

    c.bench_function("distance_sin_hnd", |b| {
        let request = &*DISTANCE_REQUEST;
        b.iter(|| {
            let outcome = plan_route(graph, request).expect("known airports");
            black_box(outcome.route().map(|r| r.total_distance_km))
        });
    });

    c.bench_function("duration_sin_hnd", |b| {
        let request = &*DURATION_REQUEST;
        b.iter(|| {
            let outcome = plan_route(graph, request).expect("known airports");
            black_box(outcome.route().map(|r| r.total_duration_min))
        });
    });

    c.bench_function("price_sin_hnd", |b| {
        let request = &*PRICE_REQUEST;
        b.iter(|| {
            let outcome = plan_route(graph, request).expect("known airports");
            black_box(outcome.route().map(|r| r.total_price))
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
