//! Flight map routing library entry points.
//!
//! This crate exposes helpers to locate and load an airline route dump into an
//! in-memory [`FlightGraph`], run hop-count and weighted searches over it, and
//! resolve the resulting airport sequences into routes with real distance,
//! duration and price totals. Higher-level consumers (the CLI, UIs) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod metric;
pub mod model;
pub mod output;
pub mod path;
pub mod resolve;
pub mod routing;

pub use dataset::{
    default_dataset_path, estimate_price, load_graph, load_graph_from_reader, load_graph_from_str,
    resolve_dataset_path, IngestStats,
};
pub use error::{suggestion_hint, Error, Result};
pub use graph::FlightGraph;
pub use metric::RouteMetric;
pub use model::{normalize_code, Airport, Route};
pub use output::{
    format_distance, format_duration, format_price, RouteEndpoint, RouteRenderMode, RouteStep,
    RouteSummary,
};
pub use path::{find_route, find_route_bfs, find_route_weighted};
pub use resolve::{resolve_outcome, resolve_path, RouteLeg, RouteOutcome, RouteResult};
pub use routing::{plan_route, suggest_airports, RouteRequest, RoutingService};
