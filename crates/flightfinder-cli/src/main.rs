use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flightfinder_cli::output::OutputFormat;

mod commands;

use commands::airports::handle_airports_command;
use commands::nearest::{handle_nearest_command, NearestCommandArgs};
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest-route queries over an airport network")]
struct Cli {
    /// Path to the graph description file. Falls back to FLIGHTFINDER_DATASET,
    /// then the platform data directory.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two airports.
    Route(RouteCommandArgs),
    /// Find the cheapest airport to reach within a region.
    Nearest(NearestCommandArgs),
    /// List the airports in the loaded network.
    Airports,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();

    match &cli.command {
        Command::Route(args) => handle_route_command(dataset, cli.format, args),
        Command::Nearest(args) => handle_nearest_command(dataset, cli.format, args),
        Command::Airports => handle_airports_command(dataset, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
