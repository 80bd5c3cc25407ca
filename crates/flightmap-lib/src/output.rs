use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::metric::RouteMetric;
use crate::resolve::RouteResult;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    Compact,
}

/// Endpoint within a resolved route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl RouteEndpoint {
    fn from_graph(graph: &FlightGraph, code: &str) -> Self {
        let airport = graph.airport(code);
        Self {
            code: code.to_string(),
            name: airport.map(|a| a.name.clone()),
            city: airport.map(|a| a.city.clone()).filter(|c| !c.is_empty()),
            country: airport.map(|a| a.country.clone()).filter(|c| !c.is_empty()),
        }
    }

    fn display_name(&self) -> String {
        match &self.city {
            Some(city) => format!("{} ({})", self.code, city),
            None => self.code.clone(),
        }
    }
}

/// Airport visited along a route, with the leg flown to reach it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    #[serde(flatten)]
    pub airport: RouteEndpoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Structured representation of a resolved route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub metric: RouteMetric,
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
    pub total_distance_km: f64,
    pub total_duration_min: f64,
    pub total_price: f64,
    pub cost_label: String,
}

impl RouteSummary {
    /// Convert a [`RouteResult`] into a summary with resolved airport details.
    pub fn from_result(graph: &FlightGraph, result: &RouteResult) -> Result<Self> {
        let (Some(first), Some(last)) = (result.path.first(), result.path.last()) else {
            return Err(Error::EmptyRoutePath);
        };

        let steps = result
            .path
            .iter()
            .enumerate()
            .map(|(index, code)| {
                // Leg `index - 1` arrives at step `index`.
                let leg = index.checked_sub(1).and_then(|i| result.legs.get(i));
                RouteStep {
                    index,
                    airport: RouteEndpoint::from_graph(graph, code),
                    distance_km: leg.map(|l| l.distance_km),
                    duration_min: leg.map(|l| l.duration_min),
                    price: leg.map(|l| l.price),
                }
            })
            .collect();

        Ok(Self {
            metric: result.metric,
            hops: result.hops,
            start: RouteEndpoint::from_graph(graph, first),
            goal: RouteEndpoint::from_graph(graph, last),
            steps,
            total_distance_km: result.total_distance_km,
            total_duration_min: result.total_duration_min,
            total_price: result.total_price,
            cost_label: result.cost_label(),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} hops, optimised for {}):",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.metric
        );
        for step in &self.steps {
            let name = step.airport.display_name();
            match (step.distance_km, step.duration_min, step.price) {
                (Some(km), Some(min), Some(price)) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({}, {}, {})",
                        step.index,
                        name,
                        format_distance(km),
                        format_duration(min),
                        format_price(price)
                    );
                }
                _ => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, name);
                }
            }
        }
        let _ = writeln!(buffer);
        self.write_totals(&mut buffer);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** — _{} → {}_ ({} hops, metric: `{}`)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            self.metric
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}**",
                step.index,
                step.airport.display_name()
            );
        }
        let _ = writeln!(
            buffer,
            "\n`{}` · `{}` · `{}`",
            format_distance(self.total_distance_km),
            format_duration(self.total_duration_min),
            format_price(self.total_price)
        );
        buffer
    }

    fn render_compact(&self) -> String {
        let path = self
            .steps
            .iter()
            .map(|step| step.airport.code.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{path} [{}]\n", self.cost_label)
    }

    fn write_totals(&self, buffer: &mut String) {
        let _ = writeln!(buffer, "Total distance: {}", format_distance(self.total_distance_km));
        let _ = writeln!(buffer, "Total duration: {}", format_duration(self.total_duration_min));
        let _ = writeln!(buffer, "Total price:    {}", format_price(self.total_price));
    }
}

/// Format minutes as `Xh Ym`, truncating fractional minutes.
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0) as u64;
    format!("{}h {}m", total / 60, total % 60)
}

/// Format kilometres with thousand separators, e.g. `1,234 km`.
pub fn format_distance(km: f64) -> String {
    format!("{} km", format_with_separators(km.max(0.0).round() as u64))
}

/// Format a USD price with separators and cents, e.g. `USD 1,234.56`.
pub fn format_price(price: f64) -> String {
    let cents = (price.max(0.0) * 100.0).round() as u64;
    format!(
        "USD {}.{:02}",
        format_with_separators(cents / 100),
        cents % 100
    )
}

/// Format a number with thousand separators (commas).
pub fn format_with_separators(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formats_hours_and_minutes() {
        assert_eq!(format_duration(0.0), "0h 0m");
        assert_eq!(format_duration(59.9), "0h 59m");
        assert_eq!(format_duration(150.0), "2h 30m");
        assert_eq!(format_duration(1441.0), "24h 1m");
    }

    #[test]
    fn distance_and_price_use_separators() {
        assert_eq!(format_distance(999.4), "999 km");
        assert_eq!(format_distance(12345.6), "12,346 km");
        assert_eq!(format_price(40.0), "USD 40.00");
        assert_eq!(format_price(1234.567), "USD 1,234.57");
    }

    #[test]
    fn separators_group_by_thousands() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(1000), "1,000");
        assert_eq!(format_with_separators(1_234_567), "1,234,567");
    }
}
