//! Nearest command handler: cheapest airport to reach within a region.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use flightfinder_lib::{Error as RegionError, RegionSummary};

use crate::commands::{friendly_lookup_error, load_finder};
use flightfinder_cli::output::{OutputFormat, Style};

/// Arguments for the nearest command.
#[derive(Args, Debug, Clone)]
pub struct NearestCommandArgs {
    /// Starting airport name.
    #[arg(long = "from")]
    pub from: String,
    /// Region to search, matched exactly.
    #[arg(long)]
    pub region: String,
}

/// Handle the nearest subcommand.
pub fn handle_nearest_command(
    dataset: Option<&Path>,
    format: OutputFormat,
    args: &NearestCommandArgs,
) -> Result<()> {
    let finder = load_finder(dataset)?;
    let start = finder
        .airport(&args.from)
        .map_err(friendly_lookup_error)?
        .clone();
    let region = args.region.trim();

    let found = finder
        .nearest_in_region(start.name(), region)
        .map_err(handle_region_failure)?;

    let summary = RegionSummary::new(&start, region, &found);
    let mut stdout = io::stdout().lock();
    format
        .write_region(&mut stdout, &summary, Style::from_env())
        .context("failed to write region result")
}

fn handle_region_failure(err: RegionError) -> anyhow::Error {
    match err {
        RegionError::UnknownRegion { region } => {
            anyhow::anyhow!("No airports exist in region '{}'. Run `airports` to list regions.", region)
        }
        RegionError::RegionUnreachable { start, region } => {
            anyhow::anyhow!("No airport in region '{}' can be reached from {}.", region, start)
        }
        other => friendly_lookup_error(other),
    }
}
