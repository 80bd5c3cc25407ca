use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::metric::RouteMetric;
use crate::model::{Airport, Route};

/// In-memory flight network: airports keyed by code plus each airport's
/// outgoing routes.
///
/// The graph is populated once by ingestion and is read-only afterwards, so a
/// shared reference can serve any number of concurrent queries. Lookups use
/// exact codes; callers accepting user input should go through
/// [`crate::normalize_code`] first.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    airports: HashMap<String, Airport>,
    routes: HashMap<String, Vec<Route>>,
}

impl FlightGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an airport, replacing any previous airport with the same code.
    /// Routes already attached to that code are kept.
    pub fn add_airport(&mut self, airport: Airport) {
        self.routes.entry(airport.code.clone()).or_default();
        self.airports.insert(airport.code.clone(), airport);
    }

    /// Append a route to its source airport's outgoing list.
    ///
    /// The destination is not validated here; ingestion may insert routes
    /// before every airport is known, and searches skip dangling destinations.
    pub fn add_route(&mut self, route: Route) -> Result<()> {
        if !self.airports.contains_key(&route.source) {
            return Err(Error::UnknownNode { code: route.source });
        }
        self.routes
            .entry(route.source.clone())
            .or_default()
            .push(route);
        Ok(())
    }

    /// Lookup an airport by code.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Outgoing routes for an airport, in insertion order. Unknown codes and
    /// airports without departures both yield an empty slice.
    pub fn neighbours(&self, code: &str) -> &[Route] {
        self.routes.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cheapest of the (possibly parallel) routes from `from` to `to` under
    /// `metric`. Ties keep the earliest inserted route.
    pub fn cheapest_route(&self, from: &str, to: &str, metric: RouteMetric) -> Option<&Route> {
        self.neighbours(from)
            .iter()
            .filter(|route| route.destination == to)
            .fold(None, |best: Option<&Route>, candidate| match best {
                Some(current)
                    if compare_cost(metric.cost(candidate), metric.cost(current))
                        != Ordering::Less =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            })
    }

    /// All airports, in no particular order.
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Total number of directed routes.
    pub fn route_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Graph-owned key for `code`, so search state can borrow from the graph
    /// rather than from caller input.
    pub(crate) fn key(&self, code: &str) -> Option<&str> {
        self.airports
            .get_key_value(code)
            .map(|(key, _)| key.as_str())
    }
}

pub(crate) fn compare_cost(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(code: &str) -> Airport {
        Airport::new(code, code, "", "", 1.0, 1.0)
    }

    #[test]
    fn add_route_requires_known_source() {
        let mut graph = FlightGraph::new();
        let err = graph
            .add_route(Route::new("AAA", "BBB", 1.0, 1.0, 1.0))
            .expect_err("source missing");
        assert!(matches!(err, Error::UnknownNode { code } if code == "AAA"));
    }

    #[test]
    fn forward_references_are_accepted() {
        let mut graph = FlightGraph::new();
        graph.add_airport(airport("AAA"));
        graph
            .add_route(Route::new("AAA", "BBB", 1.0, 1.0, 1.0))
            .expect("destination checked lazily");
        assert_eq!(graph.neighbours("AAA").len(), 1);
        assert!(!graph.contains("BBB"));
    }

    #[test]
    fn overwriting_airport_keeps_routes() {
        let mut graph = FlightGraph::new();
        graph.add_airport(airport("AAA"));
        graph.add_airport(airport("BBB"));
        graph
            .add_route(Route::new("AAA", "BBB", 1.0, 1.0, 1.0))
            .unwrap();
        graph.add_airport(Airport::new("AAA", "Renamed", "", "", 2.0, 2.0));

        assert_eq!(graph.airport("AAA").unwrap().name, "Renamed");
        assert_eq!(graph.neighbours("AAA").len(), 1);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn cheapest_route_prefers_first_on_ties() {
        let mut graph = FlightGraph::new();
        graph.add_airport(airport("AAA"));
        graph.add_airport(airport("BBB"));
        graph
            .add_route(Route::new("AAA", "BBB", 100.0, 60.0, 90.0))
            .unwrap();
        graph
            .add_route(Route::new("AAA", "BBB", 100.0, 60.0, 40.0))
            .unwrap();

        let by_price = graph
            .cheapest_route("AAA", "BBB", RouteMetric::Price)
            .unwrap();
        assert_eq!(by_price.price, 40.0);

        let by_distance = graph
            .cheapest_route("AAA", "BBB", RouteMetric::Distance)
            .unwrap();
        assert_eq!(by_distance.price, 90.0);

        assert!(graph
            .cheapest_route("BBB", "AAA", RouteMetric::Hops)
            .is_none());
    }
}
