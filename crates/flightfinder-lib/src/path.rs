use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::location::{Cost, Location};

/// Ordered sequence of locations from start to goal plus its total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub steps: Vec<Location>,
    pub cost: f64,
}

impl Route {
    /// Number of nodes visited, endpoints included.
    pub fn node_count(&self) -> usize {
        self.steps.len()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&Location> {
        self.steps.first()
    }

    pub fn goal(&self) -> Option<&Location> {
        self.steps.last()
    }
}

/// Find the cheapest route from `start` to `goal`.
///
/// Costs must be non-negative for the result to be optimal; [`Cost`] enforces
/// this when edges are built.
pub fn shortest_path(graph: &Graph, start: &Location, goal: &Location) -> Result<Route> {
    let search = compute_shortest_path(graph, start, goal)?;
    Ok(search.into_route(graph))
}

/// Cost of the cheapest route from `start` to `goal`.
pub fn shortest_path_cost(graph: &Graph, start: &Location, goal: &Location) -> Result<f64> {
    let search = compute_shortest_path(graph, start, goal)?;
    Ok(search.goal_cost().value())
}

/// Locations along the cheapest route from `start` to `goal`, both included.
pub fn shortest_path_data(graph: &Graph, start: &Location, goal: &Location) -> Result<Vec<Location>> {
    shortest_path(graph, start, goal).map(|route| route.steps)
}

/// Resolve a query endpoint, reporting it as unknown when absent.
pub(crate) fn require_node(graph: &Graph, location: &Location) -> Result<NodeIndex> {
    graph
        .node_index(location)
        .ok_or_else(|| Error::UnknownLocation {
            location: location.to_string(),
        })
}

/// Candidate path endpoint: the node reached, the accumulated cost, and the
/// state it was reached from.
#[derive(Debug, Clone, Copy)]
struct SearchState {
    node: NodeIndex,
    cost: Cost,
    predecessor: Option<usize>,
}

/// States created during one search, plus the state that settled the goal.
#[derive(Debug)]
struct Search {
    states: Vec<SearchState>,
    goal: usize,
}

impl Search {
    fn goal_cost(&self) -> Cost {
        self.states[self.goal].cost
    }

    fn into_route(self, graph: &Graph) -> Route {
        let mut steps = Vec::new();
        let mut current = Some(self.goal);
        while let Some(idx) = current {
            let state = self.states[idx];
            if let Some(location) = graph.location(state.node) {
                steps.push(location.clone());
            }
            current = state.predecessor;
        }
        steps.reverse();
        Route {
            steps,
            cost: self.goal_cost().value(),
        }
    }
}

fn compute_shortest_path(graph: &Graph, start: &Location, goal: &Location) -> Result<Search> {
    let start_idx = require_node(graph, start)?;
    let goal_idx = require_node(graph, goal)?;

    let mut states = vec![SearchState {
        node: start_idx,
        cost: Cost::ZERO,
        predecessor: None,
    }];
    let mut settled = vec![false; graph.node_bound()];
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;
    queue.push(QueueEntry::new(0, Cost::ZERO, sequence));

    while let Some(entry) = queue.pop() {
        let current = states[entry.state];
        // Stale entry for a node that was already settled more cheaply.
        if settled[current.node] {
            continue;
        }
        settled[current.node] = true;
        trace!(node = current.node, cost = current.cost.value(), "settled");

        if current.node == goal_idx {
            debug!(
                start = %start,
                goal = %goal,
                cost = current.cost.value(),
                explored = states.len(),
                "shortest path found"
            );
            return Ok(Search {
                states,
                goal: entry.state,
            });
        }

        for edge in graph.neighbours(current.node) {
            if settled[edge.succ] {
                continue;
            }
            let cost = current.cost + edge.cost;
            states.push(SearchState {
                node: edge.succ,
                cost,
                predecessor: Some(entry.state),
            });
            sequence += 1;
            queue.push(QueueEntry::new(states.len() - 1, cost, sequence));
        }
    }

    debug!(start = %start, goal = %goal, explored = states.len(), "goal unreachable");
    Err(Error::RouteNotFound {
        start: start.to_string(),
        goal: goal.to_string(),
    })
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    state: usize,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(state: usize, cost: Cost, sequence: u64) -> Self {
        Self {
            state,
            cost: FloatOrd(cost.value()),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; equal
        // costs pop in the order they were pushed.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
