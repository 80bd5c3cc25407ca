use serde::{Deserialize, Serialize};

/// Airport node in the flight network. Identity is the IATA code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    /// Construct an airport, normalising the code.
    pub fn new(
        code: &str,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            code: normalize_code(code),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }

    /// Dropdown-style label such as `SIN – Singapore, Singapore`.
    pub fn display_label(&self) -> String {
        match (self.city.is_empty(), self.country.is_empty()) {
            (false, false) => format!("{} – {}, {}", self.code, self.city, self.country),
            (false, true) => format!("{} – {}", self.code, self.city),
            (true, false) => format!("{} – {}", self.code, self.country),
            (true, true) => format!("{} – {}", self.code, self.name),
        }
    }
}

/// Directed flight leg between two airports.
///
/// Parallel routes between the same ordered pair are allowed; searches pick
/// whichever one minimises the active metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub source: String,
    pub destination: String,
    /// Great-circle distance in kilometres.
    pub distance_km: f64,
    /// Scheduled duration in minutes.
    pub duration_min: f64,
    /// Ticket price in USD.
    pub price: f64,
}

impl Route {
    pub fn new(
        source: &str,
        destination: &str,
        distance_km: f64,
        duration_min: f64,
        price: f64,
    ) -> Self {
        Self {
            source: normalize_code(source),
            destination: normalize_code(destination),
            distance_km,
            duration_min,
            price,
        }
    }
}

/// Canonical form of a user or dataset supplied airport code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
