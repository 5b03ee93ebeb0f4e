//! Name-based facade over the routing graph.
//!
//! [`FlightFinder`] owns a [`Graph`] and resolves user supplied airport
//! names (case-insensitively) to [`Location`] values before delegating to the
//! query functions. Everything below this layer works on resolved locations
//! only.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::bounded::{shortest_path_with_exact_nodes, shortest_path_with_max_nodes};
use crate::dataset::{read_dataset, Dataset};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::location::{Cost, Location};
use crate::path::{shortest_path, Route};
use crate::region::{nearest_in_region, RegionMatch};

/// Maximum number of "did you mean" suggestions attached to lookup failures.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum normalised similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.5;

/// Restriction on the number of nodes a route may visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", content = "nodes", rename_all = "snake_case")]
pub enum NodeBound {
    /// Cheapest route regardless of length.
    #[default]
    Unbounded,
    /// Cheapest simple route visiting at most this many nodes.
    AtMost(usize),
    /// Cheapest simple route visiting exactly this many nodes.
    Exactly(usize),
}

/// Airport network with name resolution.
#[derive(Debug, Clone, Default)]
pub struct FlightFinder {
    graph: Graph,
}

impl FlightFinder {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Build the network from parsed airports and routes.
    ///
    /// Duplicate airports are ignored and repeated routes overwrite the earlier
    /// cost. Routes attach to the exact airports they were resolved to, so
    /// same-named airports in different regions keep their own routes.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let mut finder = Self::default();
        for airport in &dataset.airports {
            if !finder.graph.insert_node(airport.clone()) {
                warn!(airport = %airport, "duplicate airport ignored");
            }
        }
        for route in &dataset.routes {
            for endpoint in [&route.from, &route.to] {
                if !finder.graph.contains_node(endpoint) {
                    return Err(Error::UnknownLocation {
                        location: endpoint.to_string(),
                    });
                }
            }
            finder.graph.insert_edge(&route.from, &route.to, route.cost);
        }
        debug!(
            airports = finder.graph.node_count(),
            routes = finder.graph.edge_count(),
            "built flight network"
        );
        Ok(finder)
    }

    /// Read a graph description file and build the network from it.
    pub fn load(path: &Path) -> Result<Self> {
        let dataset = read_dataset(path)?;
        Self::from_dataset(&dataset)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Resolve an airport by name, ignoring ASCII case. A name shared by
    /// airports in several regions is rejected rather than guessed.
    pub fn airport(&self, name: &str) -> Result<&Location> {
        let name = name.trim();
        let mut matches = self
            .graph
            .locations()
            .filter(|location| location.name().eq_ignore_ascii_case(name));
        let Some(found) = matches.next() else {
            return Err(Error::UnknownAirport {
                name: name.to_string(),
                suggestions: self.fuzzy_airport_matches(name, MAX_SUGGESTIONS),
            });
        };
        let others: Vec<String> = matches.map(Location::to_string).collect();
        if others.is_empty() {
            return Ok(found);
        }
        Err(Error::AmbiguousAirport {
            name: name.to_string(),
            candidates: std::iter::once(found.to_string()).chain(others).collect(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.airport(name).is_ok()
    }

    /// Airport names similar to `name`, most similar first.
    pub fn fuzzy_airport_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .graph
            .locations()
            .map(|location| {
                let score = strsim::normalized_levenshtein(&needle, &location.name().to_lowercase());
                (score, location.name())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.dedup_by(|a, b| a.1 == b.1);
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Add an airport. Returns `false` if it already exists.
    pub fn add_airport(&mut self, name: &str, region: &str) -> Result<bool> {
        let location = Location::new(name, region)?;
        Ok(self.graph.insert_node(location))
    }

    /// Remove an airport and every route touching it.
    pub fn remove_airport(&mut self, name: &str) -> Result<bool> {
        let location = self.airport(name)?.clone();
        Ok(self.graph.remove_node(&location))
    }

    /// Add the directed route `from -> to`, or update its cost.
    pub fn add_route(&mut self, from: &str, to: &str, cost: Cost) -> Result<bool> {
        let from = self.airport(from)?.clone();
        let to = self.airport(to)?.clone();
        Ok(self.graph.insert_edge(&from, &to, cost))
    }

    /// Remove the directed route `from -> to`.
    pub fn remove_route(&mut self, from: &str, to: &str) -> Result<bool> {
        let from = self.airport(from)?.clone();
        let to = self.airport(to)?.clone();
        Ok(self.graph.remove_edge(&from, &to))
    }

    /// Cheapest route between two named airports under a node bound.
    pub fn search(&self, from: &str, to: &str, bound: NodeBound) -> Result<Route> {
        let start = self.airport(from)?;
        let goal = self.airport(to)?;
        match bound {
            NodeBound::Unbounded => shortest_path(&self.graph, start, goal),
            NodeBound::AtMost(nodes) => shortest_path_with_max_nodes(&self.graph, start, goal, nodes),
            NodeBound::Exactly(nodes) => {
                shortest_path_with_exact_nodes(&self.graph, start, goal, nodes)
            }
        }
    }

    /// Cheapest airport to reach in `region` from the named airport.
    pub fn nearest_in_region(&self, from: &str, region: &str) -> Result<RegionMatch> {
        let start = self.airport(from)?;
        nearest_in_region(&self.graph, start, region.trim())
    }
}
