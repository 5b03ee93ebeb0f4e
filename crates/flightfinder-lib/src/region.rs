use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::location::Location;
use crate::path::{require_node, shortest_path_cost};

/// Cheapest airport in a region, as seen from a starting airport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMatch {
    pub airport: Location,
    pub cost: f64,
}

/// Find the airport in `region` that is cheapest to reach from `start`.
///
/// Every node whose region equals `region` is a candidate, `start` included.
/// Unreachable candidates are skipped; the query fails only when the region
/// has no airports or none of them can be reached. Equal costs keep the
/// candidate that was inserted into the graph first.
pub fn nearest_in_region(graph: &Graph, start: &Location, region: &str) -> Result<RegionMatch> {
    require_node(graph, start)?;

    let candidates: Vec<&Location> = graph
        .locations()
        .filter(|location| location.region() == region)
        .collect();
    if candidates.is_empty() {
        return Err(Error::UnknownRegion {
            region: region.to_string(),
        });
    }

    let mut best: Option<RegionMatch> = None;
    for candidate in candidates {
        let cost = match shortest_path_cost(graph, start, candidate) {
            Ok(cost) => cost,
            Err(Error::RouteNotFound { .. }) => {
                debug!(start = %start, candidate = %candidate, "skipping unreachable candidate");
                continue;
            }
            Err(err) => return Err(err),
        };
        if best.as_ref().map_or(true, |current| cost < current.cost) {
            best = Some(RegionMatch {
                airport: candidate.clone(),
                cost,
            });
        }
    }

    best.ok_or_else(|| Error::RegionUnreachable {
        start: start.to_string(),
        region: region.to_string(),
    })
}
