//! Shared fixtures for integration tests.

use std::path::PathBuf;

use flightmap_lib::{load_graph, Airport, FlightGraph, Route};

/// Path to the checked-in route dump used by tests.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/airline_routes.json")
}

#[allow(dead_code)]
pub fn fixture_graph() -> FlightGraph {
    let (graph, _stats) = load_graph(&fixture_path()).expect("fixture loads");
    graph
}

#[allow(dead_code)]
pub fn airport(code: &str) -> Airport {
    Airport::new(code, format!("{code} Airport"), format!("{code} City"), "Testland", 10.0, 20.0)
}

/// Three airports where each metric prefers a different shape of route,
/// plus `D` which has no departures.
///
/// - A→B: 100 km, 60 min, 50 USD
/// - B→C: 200 km, 90 min, 80 USD
/// - A→C: 500 km, 50 min, 40 USD
#[allow(dead_code)]
pub fn triangle_graph() -> FlightGraph {
    let mut graph = FlightGraph::new();
    for code in ["A", "B", "C", "D"] {
        graph.add_airport(airport(code));
    }
    for route in [
        Route::new("A", "B", 100.0, 60.0, 50.0),
        Route::new("B", "C", 200.0, 90.0, 80.0),
        Route::new("A", "C", 500.0, 50.0, 40.0),
    ] {
        graph.add_route(route).expect("source exists");
    }
    graph
}
