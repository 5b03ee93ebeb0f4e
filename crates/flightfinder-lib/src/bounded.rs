//! Route queries bounded by the number of nodes visited.
//!
//! The cheapest-path search has no notion of hop count, so these queries
//! enumerate every simple path (no node visited twice) between the two
//! endpoints with a depth-first search and pick the cheapest qualifying one.
//! Enumeration is exponential in the branching factor of the graph and is
//! meant for small, sparse networks.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeIndex};
use crate::location::{Cost, Location};
use crate::path::{require_node, Route};

/// Cheapest simple route from `start` to `goal` visiting at most `max_nodes`
/// nodes, endpoints included.
pub fn shortest_path_with_max_nodes(
    graph: &Graph,
    start: &Location,
    goal: &Location,
    max_nodes: usize,
) -> Result<Route> {
    cheapest_matching(graph, start, goal, max_nodes, |nodes| nodes <= max_nodes)?.ok_or_else(
        || Error::NoRouteWithinNodes {
            start: start.to_string(),
            goal: goal.to_string(),
            max_nodes,
        },
    )
}

/// Cheapest simple route from `start` to `goal` visiting exactly `nodes`
/// nodes, endpoints included.
pub fn shortest_path_with_exact_nodes(
    graph: &Graph,
    start: &Location,
    goal: &Location,
    nodes: usize,
) -> Result<Route> {
    cheapest_matching(graph, start, goal, nodes, |count| count == nodes)?.ok_or_else(|| {
        Error::NoRouteWithNodeCount {
            start: start.to_string(),
            goal: goal.to_string(),
            nodes,
        }
    })
}

/// Cost of the cheapest simple route visiting exactly `nodes` nodes.
pub fn shortest_cost_with_exact_nodes(
    graph: &Graph,
    start: &Location,
    goal: &Location,
    nodes: usize,
) -> Result<f64> {
    shortest_path_with_exact_nodes(graph, start, goal, nodes).map(|route| route.cost)
}

/// Every simple route from `start` to `goal`, in enumeration order.
pub fn simple_paths(graph: &Graph, start: &Location, goal: &Location) -> Result<Vec<Route>> {
    let start_idx = require_node(graph, start)?;
    let goal_idx = require_node(graph, goal)?;

    let mut routes = Vec::new();
    for_each_simple_path(graph, start_idx, goal_idx, None, |path, cost| {
        routes.push(to_route(graph, path, cost));
    });
    Ok(routes)
}

// `Ok(None)` when no enumerated path satisfies `accept`.
fn cheapest_matching(
    graph: &Graph,
    start: &Location,
    goal: &Location,
    limit: usize,
    accept: impl Fn(usize) -> bool,
) -> Result<Option<Route>> {
    let start_idx = require_node(graph, start)?;
    let goal_idx = require_node(graph, goal)?;

    let mut best: Option<(Vec<NodeIndex>, Cost)> = None;
    let mut enumerated = 0usize;
    for_each_simple_path(graph, start_idx, goal_idx, Some(limit), |path, cost| {
        enumerated += 1;
        if !accept(path.len()) {
            return;
        }
        if best.as_ref().map_or(true, |(_, best_cost)| cost < *best_cost) {
            best = Some((path.to_vec(), cost));
        }
    });

    debug!(
        start = %start,
        goal = %goal,
        limit,
        paths = enumerated,
        found = best.is_some(),
        "bounded route search finished"
    );
    Ok(best.map(|(path, cost)| to_route(graph, &path, cost)))
}

fn to_route(graph: &Graph, path: &[NodeIndex], cost: Cost) -> Route {
    Route {
        steps: path
            .iter()
            .filter_map(|&idx| graph.location(idx).cloned())
            .collect(),
        cost: cost.value(),
    }
}

struct Frame {
    edges: Vec<Edge>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &Graph, node: NodeIndex) -> Self {
        Self {
            edges: graph.neighbours(node).collect(),
            cursor: 0,
        }
    }
}

/// Depth-first enumeration of simple paths with an explicit stack.
///
/// `visit` receives each path (as node indices, endpoints included) and its
/// total cost. When `max_nodes` is set, branches that can no longer reach the
/// goal within that many nodes are not explored; paths reaching the goal are
/// still reported and left to the caller to filter. The goal is never
/// expanded past.
fn for_each_simple_path(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    max_nodes: Option<usize>,
    mut visit: impl FnMut(&[NodeIndex], Cost),
) {
    if max_nodes == Some(0) {
        return;
    }

    let mut path = vec![start];
    if start == goal {
        visit(&path, Cost::ZERO);
        return;
    }

    let mut on_path = vec![false; graph.node_bound()];
    on_path[start] = true;
    let mut costs = vec![Cost::ZERO];
    let mut stack = vec![Frame::new(graph, start)];

    while let Some(frame) = stack.last_mut() {
        let Some(edge) = frame.edges.get(frame.cursor).copied() else {
            stack.pop();
            costs.pop();
            if let Some(node) = path.pop() {
                on_path[node] = false;
            }
            continue;
        };
        frame.cursor += 1;

        if on_path[edge.succ] {
            continue;
        }
        let cost = costs.last().copied().unwrap_or(Cost::ZERO) + edge.cost;

        if edge.succ == goal {
            path.push(goal);
            visit(&path, cost);
            path.pop();
            continue;
        }

        // Stepping onto an intermediate node needs room for the goal after it.
        if max_nodes.is_some_and(|limit| path.len() + 2 > limit) {
            continue;
        }

        on_path[edge.succ] = true;
        path.push(edge.succ);
        costs.push(cost);
        stack.push(Frame::new(graph, edge.succ));
    }
}
