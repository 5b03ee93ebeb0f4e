//! Flight finder library entry points.
//!
//! This crate stores a directed, weighted network of airports and answers
//! cost-minimising queries over it: the cheapest route between two airports,
//! the cheapest route bounded by the number of airports visited, and the
//! cheapest airport to reach within a region. It also reads networks from
//! graph description files and resolves airport names for higher-level
//! consumers such as the CLI, which should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod bounded;
pub mod dataset;
pub mod error;
pub mod finder;
pub mod graph;
pub mod location;
pub mod output;
pub mod path;
pub mod region;

pub use bounded::{
    shortest_cost_with_exact_nodes, shortest_path_with_exact_nodes, shortest_path_with_max_nodes,
    simple_paths,
};
pub use dataset::{
    default_dataset_path, parse_dataset, read_dataset, resolve_dataset_path, Dataset,
    RouteRecord, DATASET_ENV_VAR,
};
pub use error::{Error, Result};
pub use finder::{FlightFinder, NodeBound};
pub use graph::{Edge, Graph, NodeIndex};
pub use location::{Cost, Location};
pub use output::{RegionSummary, RouteEndpoint, RouteStep, RouteSummary};
pub use path::{shortest_path, shortest_path_cost, shortest_path_data, Route};
pub use region::{nearest_in_region, RegionMatch};
