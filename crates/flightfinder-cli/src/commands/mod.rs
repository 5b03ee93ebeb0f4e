// Handlers for CLI subcommands.
//
// main.rs parses arguments and dispatches here; each module owns one
// subcommand.

pub mod airports;
pub mod nearest;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use flightfinder_lib::{resolve_dataset_path, Error as FinderError, FlightFinder};

/// Resolve the dataset location and build the airport network from it.
pub fn load_finder(dataset: Option<&Path>) -> Result<FlightFinder> {
    let path = resolve_dataset_path(dataset).context("failed to resolve the dataset location")?;
    debug!(path = %path.display(), "loading dataset");
    FlightFinder::load(&path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))
}

/// Turn library errors raised while resolving airport names into friendly
/// messages; anything else passes through unchanged.
pub fn friendly_lookup_error(err: FinderError) -> anyhow::Error {
    match err {
        FinderError::UnknownAirport { name, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&name, &suggestions))
        }
        FinderError::AmbiguousAirport { name, candidates } => anyhow::anyhow!(
            "Airport name '{}' matches several airports: {}.",
            name,
            candidates.join(", ")
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_airport_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{}'.", name);
    if let Some((first, rest)) = suggestions.split_first() {
        let formatted = if rest.is_empty() {
            format!("Did you mean '{first}'?")
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}
