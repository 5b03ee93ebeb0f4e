use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight finder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location is built from a blank name or region.
    #[error("invalid location: {message}")]
    InvalidLocation { message: String },

    /// Raised when an edge cost is negative or not a finite number.
    #[error("invalid cost {value}; costs must be finite and non-negative")]
    InvalidCost { value: f64 },

    /// Raised when a query names a location that is not a node of the graph.
    #[error("location {location} is not in the graph")]
    UnknownLocation { location: String },

    /// Raised when looking up the weight of an edge that does not exist.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when every route between two locations visits too many nodes.
    #[error("no route found between {start} and {goal} visiting at most {max_nodes} nodes")]
    NoRouteWithinNodes {
        start: String,
        goal: String,
        max_nodes: usize,
    },

    /// Raised when no simple route visits exactly the requested number of nodes.
    #[error("no route found between {start} and {goal} visiting exactly {nodes} nodes")]
    NoRouteWithNodeCount {
        start: String,
        goal: String,
        nodes: usize,
    },

    /// Raised when no location in the graph carries the requested region.
    #[error("no airports exist in region {region}")]
    UnknownRegion { region: String },

    /// Raised when the region has airports but none can be reached.
    #[error("no airport in region {region} is reachable from {start}")]
    RegionUnreachable { start: String, region: String },

    /// Raised when an airport name could not be resolved.
    #[error("unknown airport name: {name}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when an airport name matches airports in more than one region.
    #[error("airport name {name} is ambiguous; it matches {}", .candidates.join(", "))]
    AmbiguousAirport {
        name: String,
        candidates: Vec<String>,
    },

    /// Raised when a route summary is built from a route without steps.
    #[error("route was empty")]
    EmptyRoute,

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a graph description line could not be understood.
    #[error("failed to parse dataset at line {line}: {message}")]
    DatasetParse { line: usize, message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default dataset")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error belongs to the "not found" family: an absent node,
    /// edge, route, region, or airport name.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::UnknownLocation { .. }
                | Error::EdgeNotFound { .. }
                | Error::RouteNotFound { .. }
                | Error::NoRouteWithinNodes { .. }
                | Error::NoRouteWithNodeCount { .. }
                | Error::UnknownRegion { .. }
                | Error::RegionUnreachable { .. }
                | Error::UnknownAirport { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
