use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::metric::RouteMetric;

/// Find a route between `origin` and `destination` that is optimal under
/// `metric`, dispatching to breadth-first search for hop counts and to the
/// weighted search for everything else.
///
/// Returns `Ok(None)` when the destination is unreachable.
pub fn find_route<'g>(
    graph: &'g FlightGraph,
    origin: &str,
    destination: &str,
    metric: RouteMetric,
) -> Result<Option<Vec<&'g str>>> {
    if metric.is_weighted() {
        find_route_weighted(graph, origin, destination, metric)
    } else {
        find_route_bfs(graph, origin, destination)
    }
}

/// Run breadth-first search for the route with the fewest legs.
///
/// Each airport is enqueued at most once; the first discovery wins, so among
/// several minimum-hop routes the one reached through earlier-inserted routes
/// is returned. That tie-break is an artefact of insertion order and is not a
/// canonical choice.
pub fn find_route_bfs<'g>(
    graph: &'g FlightGraph,
    origin: &str,
    destination: &str,
) -> Result<Option<Vec<&'g str>>> {
    let (start, goal) = resolve_endpoints(graph, origin, destination)?;
    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut parents: HashMap<&'g str, Option<&'g str>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for route in graph.neighbours(current) {
            let next = route.destination.as_str();
            if parents.contains_key(next) || !graph.contains(next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                debug!(discovered = parents.len(), "bfs reached destination");
                return Ok(Some(reconstruct_path(&parents, start, goal)));
            }
            queue.push_back(next);
        }
    }

    debug!(discovered = parents.len(), "bfs exhausted without reaching destination");
    Ok(None)
}

/// Run Dijkstra's algorithm with edge costs taken from `metric`.
///
/// Costs must be non-negative. Queue entries whose cost exceeds the best
/// known distance to their airport are stale and skipped. The search stops as
/// soon as the destination is popped with its final cost.
pub fn find_route_weighted<'g>(
    graph: &'g FlightGraph,
    origin: &str,
    destination: &str,
    metric: RouteMetric,
) -> Result<Option<Vec<&'g str>>> {
    let (start, goal) = resolve_endpoints(graph, origin, destination)?;
    if start == goal {
        return Ok(Some(vec![start]));
    }

    let mut distances: HashMap<&'g str, f64> = HashMap::new();
    let mut parents: HashMap<&'g str, Option<&'g str>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut expanded = 0usize;
    let mut stale = 0usize;

    distances.insert(start, 0.0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let best = distances.get(entry.node).copied().unwrap_or(f64::INFINITY);
        if entry.cost.0 > best {
            stale += 1;
            continue;
        }

        if entry.node == goal {
            debug!(%metric, cost = best, expanded, stale, "weighted search reached destination");
            return Ok(Some(reconstruct_path(&parents, start, goal)));
        }
        expanded += 1;

        for route in graph.neighbours(entry.node) {
            let next = route.destination.as_str();
            if !graph.contains(next) {
                continue;
            }

            let next_cost = best + metric.cost(route);
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(%metric, expanded, stale, "weighted search exhausted without reaching destination");
    Ok(None)
}

fn resolve_endpoints<'g>(
    graph: &'g FlightGraph,
    origin: &str,
    destination: &str,
) -> Result<(&'g str, &'g str)> {
    let lookup = |code: &str| {
        graph.key(code).ok_or_else(|| Error::UnknownAirport {
            code: code.to_string(),
            suggestions: Vec::new(),
        })
    };
    Ok((lookup(origin)?, lookup(destination)?))
}

fn reconstruct_path<'g>(
    parents: &HashMap<&'g str, Option<&'g str>>,
    start: &'g str,
    goal: &'g str,
) -> Vec<&'g str> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
