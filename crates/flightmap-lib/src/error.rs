use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight map library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// "No route" is not an error: an unreachable destination is a normal
/// query outcome and is reported through [`crate::RouteOutcome::NoRoute`].
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an origin or destination code is not present in the graph.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a route is inserted for a source airport that was never added.
    #[error("cannot add route from unknown airport {code}")]
    UnknownNode { code: String },

    /// Raised when a reconstructed path contains a leg with no backing route.
    ///
    /// This indicates a bug in ingestion or graph construction, never bad user input.
    #[error("graph consistency violation: no route from {from} to {to} for a reconstructed leg")]
    GraphConsistency { from: String, to: String },

    /// Raised when asked to resolve a route with no airports in it.
    #[error("route path was empty")]
    EmptyRoutePath,

    /// Raised when a metric name cannot be parsed.
    #[error("unknown route metric '{value}'; expected hops, distance, duration or price")]
    UnknownMetric { value: String },

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    suggestion_hint(suggestions)
        .map(|hint| format!(". {hint}"))
        .unwrap_or_default()
}

/// "Did you mean ..." sentence for a list of candidate codes, if any.
pub fn suggestion_hint(suggestions: &[String]) -> Option<String> {
    match suggestions {
        [] => None,
        [only] => Some(format!("Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("Did you mean one of: {}?", joined))
        }
    }
}
