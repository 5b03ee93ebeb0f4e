use serde::Serialize;

use crate::error::{Error, Result};
use crate::finder::NodeBound;
use crate::graph::Graph;
use crate::location::Location;
use crate::path::Route;
use crate::region::RegionMatch;

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub name: String,
    pub region: String,
}

impl From<&Location> for RouteEndpoint {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name().to_string(),
            region: location.region().to_string(),
        }
    }
}

/// Step taken during traversal of a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub name: String,
    pub region: String,
    /// Cost of the edge used to arrive at this step; absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_cost: Option<f64>,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub bound: NodeBound,
    pub cost: f64,
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a summary, annotating each step with the cost
    /// of the edge that reached it.
    pub fn from_route(bound: NodeBound, graph: &Graph, route: &Route) -> Result<Self> {
        let (Some(first), Some(last)) = (route.start(), route.goal()) else {
            return Err(Error::EmptyRoute);
        };

        let steps = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, location)| RouteStep {
                index,
                name: location.name().to_string(),
                region: location.region().to_string(),
                leg_cost: index
                    .checked_sub(1)
                    .and_then(|prev| graph.edge(&route.steps[prev], location).ok())
                    .map(|cost| cost.value()),
            })
            .collect();

        Ok(Self {
            bound,
            cost: route.cost,
            hops: route.hop_count(),
            start: first.into(),
            goal: last.into(),
            steps,
        })
    }
}

/// Result of a nearest-in-region query, ready for serialisation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionSummary {
    pub start: RouteEndpoint,
    pub region: String,
    pub airport: RouteEndpoint,
    pub cost: f64,
}

impl RegionSummary {
    pub fn new(start: &Location, region: &str, found: &RegionMatch) -> Self {
        Self {
            start: start.into(),
            region: region.to_string(),
            airport: (&found.airport).into(),
            cost: found.cost,
        }
    }

    pub fn render_plain(&self) -> String {
        format!(
            "Cheapest airport in {} from {}: {} (cost {})\n",
            self.region, self.start.name, self.airport.name, self.cost
        )
    }
}
