use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::FlightGraph;
use crate::model::{normalize_code, Airport, Route};

/// Default filename for the route dump.
pub const DATASET_FILENAME: &str = "airline_routes.json";

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "FLIGHTMAP_DATA";

/// Counters describing what ingestion kept and what it filtered out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub airports: usize,
    pub routes: usize,
    pub skipped_airports: usize,
    pub skipped_routes: usize,
}

/// Every field is read as a loose [`Value`] so one badly typed record is
/// skipped instead of failing the whole load.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAirport {
    iata: Option<Value>,
    name: Option<Value>,
    city_name: Option<Value>,
    country: Option<Value>,
    latitude: Option<Value>,
    longitude: Option<Value>,
    routes: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRoute {
    iata: Option<Value>,
    km: Option<Value>,
    min: Option<Value>,
    price: Option<Value>,
}

impl RawAirport {
    fn code(&self, key: &str) -> String {
        normalize_code(&to_text(self.iata.as_ref()).unwrap_or_else(|| key.to_string()))
    }

    /// Route records; a `routes` field that is not an array yields none.
    fn routes(&self) -> &[Value] {
        match &self.routes {
            Some(Value::Array(routes)) => routes,
            _ => &[],
        }
    }
}

/// Resolve the dataset file to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `FLIGHTMAP_DATA` environment variable.
/// 3. `./data/airline_routes.json` relative to the working directory.
/// 4. Platform-specific project data directory.
///
/// Directories are joined with [`DATASET_FILENAME`].
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return existing(canonical_dataset_path(explicit));
    }

    if let Some(env_path) = env::var_os(DATASET_ENV_VAR) {
        return existing(canonical_dataset_path(Path::new(&env_path)));
    }

    let local = Path::new("data").join(DATASET_FILENAME);
    if local.is_file() {
        return Ok(local);
    }

    existing(default_dataset_path()?)
}

/// Platform data directory location for the dataset.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "flightmap", "flightmap").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(DATASET_FILENAME);
    }
    path.to_path_buf()
}

fn existing(path: PathBuf) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(Error::DatasetNotFound { path })
    }
}

/// Load the route dump at `path` into a [`FlightGraph`].
pub fn load_graph(path: &Path) -> Result<(FlightGraph, IngestStats)> {
    if !path.is_file() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = fs::File::open(path)?;
    let (graph, stats) = load_graph_from_reader(std::io::BufReader::new(file))?;
    info!(
        path = %path.display(),
        airports = stats.airports,
        routes = stats.routes,
        "loaded flight network"
    );
    Ok((graph, stats))
}

pub fn load_graph_from_reader<R: Read>(reader: R) -> Result<(FlightGraph, IngestStats)> {
    let raw: BTreeMap<String, Value> = serde_json::from_reader(reader)?;
    Ok(build_graph(raw))
}

pub fn load_graph_from_str(json: &str) -> Result<(FlightGraph, IngestStats)> {
    let raw: BTreeMap<String, Value> = serde_json::from_str(json)?;
    Ok(build_graph(raw))
}

/// Two passes so that routes may reference airports defined later in the dump.
/// Sorted keys keep route insertion order stable between runs.
fn build_graph(raw: BTreeMap<String, Value>) -> (FlightGraph, IngestStats) {
    let mut graph = FlightGraph::new();
    let mut stats = IngestStats::default();

    let mut records = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        match RawAirport::deserialize(value) {
            Ok(info) => records.push((key, info)),
            Err(err) => {
                debug!(airport = %key, error = %err, "skipping malformed airport record");
                stats.skipped_airports += 1;
            }
        }
    }

    let mut sources = Vec::with_capacity(records.len());
    for (key, info) in &records {
        let latitude = to_float(info.latitude.as_ref());
        let longitude = to_float(info.longitude.as_ref());
        if !valid_coordinates(latitude, longitude) {
            debug!(airport = %key, latitude, longitude, "skipping airport with invalid coordinates");
            stats.skipped_airports += 1;
            sources.push(None);
            continue;
        }

        let code = info.code(key);
        let name = to_text(info.name.as_ref()).unwrap_or_else(|| code.clone());
        graph.add_airport(Airport::new(
            &code,
            name,
            to_text(info.city_name.as_ref()).unwrap_or_default(),
            to_text(info.country.as_ref()).unwrap_or_default(),
            latitude,
            longitude,
        ));
        stats.airports += 1;
        sources.push(Some(code));
    }

    for ((key, info), source) in records.iter().zip(sources) {
        let Some(source) = source else {
            stats.skipped_routes += info.routes().len();
            continue;
        };

        for raw_route in info.routes() {
            let route = RawRoute::deserialize(raw_route)
                .ok()
                .and_then(|raw| to_route(&graph, &source, &raw));
            match route {
                Some(route) => {
                    if graph.add_route(route).is_ok() {
                        stats.routes += 1;
                    } else {
                        stats.skipped_routes += 1;
                    }
                }
                None => {
                    debug!(airport = %key, route = %raw_route, "skipping route failing data-quality checks");
                    stats.skipped_routes += 1;
                }
            }
        }
    }

    if stats.skipped_airports > 0 || stats.skipped_routes > 0 {
        warn!(
            skipped_airports = stats.skipped_airports,
            skipped_routes = stats.skipped_routes,
            "ignored dataset entries failing data-quality checks",
        );
    }

    (graph, stats)
}

fn to_route(graph: &FlightGraph, source: &str, raw: &RawRoute) -> Option<Route> {
    let destination = normalize_code(&to_text(raw.iata.as_ref())?);
    if destination.is_empty() || !graph.contains(&destination) {
        return None;
    }

    let km = to_float(raw.km.as_ref());
    let minutes = to_float(raw.min.as_ref()).trunc();
    if km <= 0.0 || minutes <= 0.0 {
        return None;
    }

    let price = match to_float(raw.price.as_ref()) {
        provided if provided > 0.0 => provided,
        _ => estimate_price(km),
    };

    Some(Route::new(source, &destination, km, minutes, price))
}

/// Fare estimate used when the dump carries no price: a base fare plus a
/// per-kilometre rate, rounded to cents.
pub fn estimate_price(km: f64) -> f64 {
    ((30.0 + 0.12 * km) * 100.0).round() / 100.0
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    if latitude == 0.0 && longitude == 0.0 {
        return false;
    }
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

/// Non-empty strings only; numbers and other JSON types read as absent.
fn to_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}

/// Numbers or numeric strings; anything else reads as zero.
fn to_float(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}
