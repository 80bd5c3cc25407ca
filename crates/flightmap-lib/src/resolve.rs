//! Turn a searched airport sequence into a reportable [`RouteResult`].
//!
//! Totals are recomputed from the routes actually flown, so a hop-optimal
//! path still reports its real distance, duration and price.

use serde::Serialize;
use tracing::error;

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::metric::RouteMetric;
use crate::output::{format_distance, format_duration, format_price};

/// One flown leg of a resolved route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub duration_min: f64,
    pub price: f64,
}

/// Fully resolved route between two airports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Metric that drove the search.
    pub metric: RouteMetric,
    /// Airport codes from origin to destination inclusive.
    pub path: Vec<String>,
    pub legs: Vec<RouteLeg>,
    pub total_distance_km: f64,
    pub total_duration_min: f64,
    pub total_price: f64,
    pub hops: usize,
}

impl RouteResult {
    pub fn origin(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    pub fn destination(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Total under the metric that drove the search.
    pub fn cost(&self) -> f64 {
        match self.metric {
            RouteMetric::Hops => self.hops as f64,
            RouteMetric::Distance => self.total_distance_km,
            RouteMetric::Duration => self.total_duration_min,
            RouteMetric::Price => self.total_price,
        }
    }

    /// Human-readable cost with units, e.g. `1,234 km` or `3h 5m`.
    pub fn cost_label(&self) -> String {
        match self.metric {
            RouteMetric::Hops => format!("{} hop(s)", self.hops),
            RouteMetric::Distance => format_distance(self.total_distance_km),
            RouteMetric::Duration => format_duration(self.total_duration_min),
            RouteMetric::Price => format_price(self.total_price),
        }
    }

    /// `SIN -> KUL -> HND`
    pub fn pretty(&self) -> String {
        self.path.join(" -> ")
    }
}

/// Outcome of a route query. An unreachable destination is a normal outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(RouteResult),
    NoRoute { origin: String, destination: String },
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&RouteResult> {
        match self {
            RouteOutcome::Found(result) => Some(result),
            RouteOutcome::NoRoute { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<RouteResult> {
        match self {
            RouteOutcome::Found(result) => Some(result),
            RouteOutcome::NoRoute { .. } => None,
        }
    }
}

/// Re-walk `path` and aggregate per-leg and total costs.
///
/// Where parallel routes exist the one cheapest under `metric` is used, which
/// is the one the search relaxed through. A consecutive pair with no route at
/// all is a graph consistency violation.
pub fn resolve_path(graph: &FlightGraph, path: &[&str], metric: RouteMetric) -> Result<RouteResult> {
    if path.is_empty() {
        return Err(Error::EmptyRoutePath);
    }

    let mut legs = Vec::with_capacity(path.len() - 1);
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let Some(route) = graph.cheapest_route(from, to, metric) else {
            error!(from, to, %metric, "reconstructed leg has no backing route");
            return Err(Error::GraphConsistency {
                from: from.to_string(),
                to: to.to_string(),
            });
        };
        legs.push(RouteLeg {
            from: from.to_string(),
            to: to.to_string(),
            distance_km: route.distance_km,
            duration_min: route.duration_min,
            price: route.price,
        });
    }

    Ok(RouteResult {
        metric,
        path: path.iter().map(|code| code.to_string()).collect(),
        total_distance_km: legs.iter().map(|leg| leg.distance_km).sum(),
        total_duration_min: legs.iter().map(|leg| leg.duration_min).sum(),
        total_price: legs.iter().map(|leg| leg.price).sum(),
        hops: legs.len(),
        legs,
    })
}

/// Package raw search output into a [`RouteOutcome`].
pub fn resolve_outcome(
    graph: &FlightGraph,
    origin: &str,
    destination: &str,
    path: Option<Vec<&str>>,
    metric: RouteMetric,
) -> Result<RouteOutcome> {
    match path {
        Some(path) => resolve_path(graph, &path, metric).map(RouteOutcome::Found),
        None => Ok(RouteOutcome::NoRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }),
    }
}
