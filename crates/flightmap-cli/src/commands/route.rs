//! Route command handler for computing itineraries between airports.

use anyhow::{Context, Result};

use flightmap_lib::{
    suggestion_hint, Error as RouteError, RouteMetric, RouteOutcome, RouteRequest, RouteSummary,
    RoutingService,
};

use crate::output::{render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
    /// Quantity to minimise.
    pub metric: RouteMetric,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone(), self.metric)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    service: &RoutingService,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request();
    let outcome = service
        .plan(&request)
        .map_err(|err| handle_route_failure(&request, err))?;

    let route = match outcome {
        RouteOutcome::Found(route) => route,
        RouteOutcome::NoRoute {
            origin,
            destination,
        } => {
            anyhow::bail!(format_route_not_found_message(&origin, &destination));
        }
    };

    let summary = RouteSummary::from_result(service.graph(), &route)
        .context("failed to summarise route")?;
    render_route(&summary, format).context("failed to write route output")?;
    Ok(())
}

fn handle_route_failure(request: &RouteRequest, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport { code, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&code, &suggestions))
        }
        other => anyhow::Error::new(other).context(format!(
            "failed to plan route from {} to {}",
            request.origin, request.destination
        )),
    }
}

pub(crate) fn format_unknown_airport_message(code: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{}'.", code);
    if let Some(hint) = suggestion_hint(suggestions) {
        message.push(' ');
        message.push_str(&hint);
    }
    message
}

fn format_route_not_found_message(origin: &str, destination: &str) -> String {
    format!(
        "No route found between {} and {}. The destination is not reachable from the origin \
         with any number of connections; list airports with `flightmap-cli airports`.",
        origin, destination
    )
}
