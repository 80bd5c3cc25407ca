use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::Route;

/// Cost metric a route query optimises for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMetric {
    /// Fewest flight legs (breadth-first search).
    #[default]
    Hops,
    /// Shortest total distance in kilometres.
    Distance,
    /// Shortest total flight time in minutes.
    Duration,
    /// Cheapest total ticket price.
    Price,
}

impl RouteMetric {
    /// Every metric, in display order.
    pub const ALL: [RouteMetric; 4] = [
        RouteMetric::Hops,
        RouteMetric::Distance,
        RouteMetric::Duration,
        RouteMetric::Price,
    ];

    /// Cost of traversing `route` under this metric. Always non-negative for
    /// routes accepted by ingestion.
    pub fn cost(self, route: &Route) -> f64 {
        match self {
            RouteMetric::Hops => 1.0,
            RouteMetric::Distance => route.distance_km,
            RouteMetric::Duration => route.duration_min,
            RouteMetric::Price => route.price,
        }
    }

    /// Whether queries under this metric go through the weighted search.
    pub fn is_weighted(self) -> bool {
        !matches!(self, RouteMetric::Hops)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMetric::Hops => "hops",
            RouteMetric::Distance => "distance",
            RouteMetric::Duration => "duration",
            RouteMetric::Price => "price",
        }
    }
}

impl fmt::Display for RouteMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hops" | "hop" => Ok(RouteMetric::Hops),
            "distance" | "km" => Ok(RouteMetric::Distance),
            "duration" | "time" | "min" => Ok(RouteMetric::Duration),
            "price" | "cost" => Ok(RouteMetric::Price),
            _ => Err(Error::UnknownMetric {
                value: s.to_string(),
            }),
        }
    }
}
