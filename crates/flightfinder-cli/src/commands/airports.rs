//! Airports command handler: list every airport in the loaded network.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use flightfinder_cli::output::{AirportRow, OutputFormat};
use flightfinder_lib::Graph;

use crate::commands::load_finder;

/// Handle the airports subcommand.
pub fn handle_airports_command(dataset: Option<&Path>, format: OutputFormat) -> Result<()> {
    let finder = load_finder(dataset)?;
    let rows = airport_rows(finder.graph());

    let mut stdout = io::stdout().lock();
    format
        .write_airports(&mut stdout, &rows)
        .context("failed to write airport list")
}

/// Airports in insertion order with their outgoing route counts.
fn airport_rows(graph: &Graph) -> Vec<AirportRow> {
    graph
        .locations()
        .map(|location| AirportRow {
            name: location.name().to_string(),
            region: location.region().to_string(),
            routes: graph
                .node_index(location)
                .map_or(0, |idx| graph.out_degree(idx)),
        })
        .collect()
}
