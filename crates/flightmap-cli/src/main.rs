use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightmap_cli::commands::airports::{handle_airport_command, handle_airports_command};
use flightmap_cli::commands::route::{handle_route_command, RouteCommandArgs};
use flightmap_cli::output::{print_footer, print_logo, OutputFormat};
use flightmap_lib::{load_graph, resolve_dataset_path, RouteMetric, RoutingService};

#[derive(Parser, Debug)]
#[command(author, version, about = "Airline route planning utilities")]
struct Cli {
    /// Route dump to load (file, or directory containing airline_routes.json).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner and footer.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the best itinerary between two airports.
    Route {
        /// Departure airport code.
        #[arg(long = "from")]
        from: String,
        /// Arrival airport code.
        #[arg(long = "to")]
        to: String,
        /// What to minimise: hops, distance, duration or price.
        #[arg(long, default_value_t = RouteMetric::Hops)]
        metric: RouteMetric,
    },
    /// Show details for a single airport.
    Airport {
        /// IATA code (case-insensitive).
        code: String,
    },
    /// List known airports.
    Airports {
        /// Only list airports in this country.
        #[arg(long)]
        country: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();
    let decorated = cli.format.is_decorated() && !cli.no_logo;

    if decorated {
        print_logo();
    }

    let service = load_service(cli.data.as_deref())?;
    match &cli.command {
        Command::Route { from, to, metric } => {
            let args = RouteCommandArgs {
                from: from.clone(),
                to: to.clone(),
                metric: *metric,
            };
            handle_route_command(&service, &args, cli.format)?;
        }
        Command::Airport { code } => handle_airport_command(&service, code, cli.format)?,
        Command::Airports { country } => {
            handle_airports_command(&service, country.as_deref(), cli.format)?
        }
    }

    if decorated {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn load_service(target: Option<&Path>) -> Result<RoutingService> {
    let dataset_path =
        resolve_dataset_path(target).context("failed to locate the airline route dataset")?;
    let (graph, _stats) = load_graph(&dataset_path)
        .with_context(|| format!("failed to load dataset from {}", dataset_path.display()))?;
    Ok(RoutingService::new(graph))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
