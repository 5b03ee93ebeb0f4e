//! Route command handler for computing the cheapest route between airports.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use flightfinder_lib::{Error as RouteError, NodeBound, RouteSummary};

use crate::commands::{friendly_lookup_error, load_finder};
use flightfinder_cli::output::{OutputFormat, Style};

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting airport name.
    #[arg(long = "from")]
    pub from: String,
    /// Destination airport name.
    #[arg(long = "to")]
    pub to: String,
    /// Only consider routes visiting at most this many airports, endpoints included.
    #[arg(long, conflicts_with = "exact_nodes")]
    pub max_nodes: Option<usize>,
    /// Only consider routes visiting exactly this many airports, endpoints included.
    #[arg(long)]
    pub exact_nodes: Option<usize>,
}

impl RouteCommandArgs {
    pub fn bound(&self) -> NodeBound {
        match (self.max_nodes, self.exact_nodes) {
            (Some(nodes), _) => NodeBound::AtMost(nodes),
            (None, Some(nodes)) => NodeBound::Exactly(nodes),
            (None, None) => NodeBound::Unbounded,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    dataset: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let finder = load_finder(dataset)?;
    let bound = args.bound();

    let route = finder
        .search(&args.from, &args.to, bound)
        .map_err(handle_route_failure)?;

    let summary = RouteSummary::from_route(bound, finder.graph(), &route)
        .context("failed to build route summary for display")?;

    let mut stdout = io::stdout().lock();
    format
        .write_route(&mut stdout, &summary, Style::from_env())
        .context("failed to write route")
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!("No route found between {} and {}.", start, goal)
        }
        RouteError::NoRouteWithinNodes {
            start,
            goal,
            max_nodes,
        } => anyhow::anyhow!(
            "No route found between {} and {} visiting at most {} airports. Try raising --max-nodes or omit it.",
            start,
            goal,
            max_nodes
        ),
        RouteError::NoRouteWithNodeCount { start, goal, nodes } => anyhow::anyhow!(
            "No route found between {} and {} visiting exactly {} airports. Try a different --exact-nodes or omit it.",
            start,
            goal,
            nodes
        ),
        other => friendly_lookup_error(other),
    }
}
