//! Airport lookup and listing handlers.

use anyhow::{Context, Result};
use serde::Serialize;

use flightmap_lib::{Airport, Error as LibError, RoutingService};

use crate::commands::route::format_unknown_airport_message;
use crate::output::{format_airport_details, format_airport_list, render_json, OutputFormat};

/// JSON shape for `airport <CODE>`.
#[derive(Debug, Serialize)]
struct AirportDetails<'a> {
    #[serde(flatten)]
    airport: &'a Airport,
    outgoing_routes: usize,
}

/// Handle `airport <CODE>`.
pub fn handle_airport_command(
    service: &RoutingService,
    code: &str,
    format: OutputFormat,
) -> Result<()> {
    let airport = service.require_airport(code).map_err(|err| match err {
        LibError::UnknownAirport { code, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&code, &suggestions))
        }
        other => anyhow::Error::new(other),
    })?;
    let outgoing = service.graph().neighbours(&airport.code).len();

    match format {
        OutputFormat::Json => render_json(&AirportDetails {
            airport,
            outgoing_routes: outgoing,
        })
        .context("failed to write airport JSON")?,
        OutputFormat::Basic | OutputFormat::Compact => println!("{}", airport.display_label()),
        _ => print!("{}", format_airport_details(airport, outgoing)),
    }
    Ok(())
}

/// Handle `airports [--country NAME]`.
pub fn handle_airports_command(
    service: &RoutingService,
    country: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let airports = match country {
        Some(country) => service.airports_in_country(country),
        None => service.airports(),
    };

    match format {
        OutputFormat::Json => render_json(&airports).context("failed to write airport JSON")?,
        _ => print!("{}", format_airport_list(&airports)),
    }
    Ok(())
}
