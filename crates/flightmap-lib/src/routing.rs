//! Query facade for route planning.
//!
//! This module provides:
//! - [`RouteRequest`] - an (origin, destination, metric) query
//! - [`plan_route`] - resolve codes, search, and aggregate totals
//! - [`RoutingService`] - shared, read-only handle for presentation layers
//!
//! # Example
//!
//! ```ignore
//! use flightmap_lib::{load_graph, RouteMetric, RoutingService};
//!
//! let (graph, _stats) = load_graph("data/airline_routes.json".as_ref())?;
//! let service = RoutingService::new(graph);
//! let outcome = service.route("SIN", "HND", RouteMetric::Price)?;
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::metric::RouteMetric;
use crate::model::{normalize_code, Airport};
use crate::path::find_route;
use crate::resolve::{resolve_outcome, RouteOutcome};

/// Minimum Jaro-Winkler similarity for an airport to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Number of suggestions attached to unknown airport errors.
const MAX_SUGGESTIONS: usize = 3;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub metric: RouteMetric,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, metric: RouteMetric) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            metric,
        }
    }

    /// Convenience constructor for fewest-legs routes.
    pub fn hops(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, RouteMetric::Hops)
    }

    pub fn distance(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, RouteMetric::Distance)
    }

    pub fn duration(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, RouteMetric::Duration)
    }

    pub fn price(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::new(origin, destination, RouteMetric::Price)
    }
}

/// Compute a route for `request` against `graph`.
///
/// Both codes are checked before any search runs; an unknown code yields
/// [`Error::UnknownAirport`] with fuzzy suggestions. An unreachable
/// destination yields [`RouteOutcome::NoRoute`].
pub fn plan_route(graph: &FlightGraph, request: &RouteRequest) -> Result<RouteOutcome> {
    let origin = resolve_airport(graph, &request.origin)?;
    let destination = resolve_airport(graph, &request.destination)?;

    debug!(origin, destination, metric = %request.metric, "planning route");
    let path = find_route(graph, origin, destination, request.metric)?;
    resolve_outcome(graph, origin, destination, path, request.metric)
}

/// Resolve user supplied input to the graph's airport code.
///
/// The trimmed input is tried as-is before its normalised form, so graphs
/// built directly from non-uppercase codes stay reachable.
fn resolve_airport<'g>(graph: &'g FlightGraph, input: &str) -> Result<&'g str> {
    let code = normalize_code(input);
    graph
        .key(input.trim())
        .or_else(|| graph.key(&code))
        .ok_or_else(|| Error::UnknownAirport {
            suggestions: suggest_airports(graph, input, MAX_SUGGESTIONS),
            code,
        })
}

/// Codes of airports whose code, name or city resemble `query`, best first.
pub fn suggest_airports(graph: &FlightGraph, query: &str, limit: usize) -> Vec<String> {
    let upper = normalize_code(query);
    let lower = query.trim().to_lowercase();
    if upper.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = graph
        .airports()
        .map(|airport| {
            let score = strsim::jaro_winkler(&upper, &airport.code)
                .max(strsim::jaro_winkler(&lower, &airport.name.to_lowercase()))
                .max(strsim::jaro_winkler(&lower, &airport.city.to_lowercase()));
            (score, airport.code.as_str())
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });
    scored
        .into_iter()
        .take(limit)
        .map(|(_, code)| code.to_string())
        .collect()
}

/// Shared, read-only query handle over a loaded graph.
///
/// Cloning is cheap and clones may be moved to other threads; every query
/// allocates its own search state.
#[derive(Debug, Clone)]
pub struct RoutingService {
    graph: Arc<FlightGraph>,
}

impl RoutingService {
    /// Take ownership of a fully populated graph.
    pub fn new(graph: FlightGraph) -> Self {
        Self::from_shared(Arc::new(graph))
    }

    pub fn from_shared(graph: Arc<FlightGraph>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &FlightGraph {
        &self.graph
    }

    /// Find the best route from `origin` to `destination` under `metric`.
    pub fn route(&self, origin: &str, destination: &str, metric: RouteMetric) -> Result<RouteOutcome> {
        self.plan(&RouteRequest::new(origin, destination, metric))
    }

    pub fn plan(&self, request: &RouteRequest) -> Result<RouteOutcome> {
        plan_route(&self.graph, request)
    }

    /// Lookup an airport by (case-insensitive) code.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.graph
            .airport(code.trim())
            .or_else(|| self.graph.airport(&normalize_code(code)))
    }

    /// Like [`RoutingService::airport`] but reports unknown codes with suggestions.
    pub fn require_airport(&self, code: &str) -> Result<&Airport> {
        let key = resolve_airport(&self.graph, code)?;
        self.graph.airport(key).ok_or_else(|| Error::UnknownAirport {
            code: key.to_string(),
            suggestions: Vec::new(),
        })
    }

    /// All airports sorted by code.
    pub fn airports(&self) -> Vec<&Airport> {
        let mut airports: Vec<&Airport> = self.graph.airports().collect();
        airports.sort_by(|a, b| a.code.cmp(&b.code));
        airports
    }

    /// Airports in `country` (case-insensitive), sorted by code.
    pub fn airports_in_country(&self, country: &str) -> Vec<&Airport> {
        let wanted = country.trim();
        self.airports()
            .into_iter()
            .filter(|airport| airport.country.eq_ignore_ascii_case(wanted))
            .collect()
    }

    pub fn suggest(&self, query: &str) -> Vec<String> {
        suggest_airports(&self.graph, query, MAX_SUGGESTIONS)
    }
}
