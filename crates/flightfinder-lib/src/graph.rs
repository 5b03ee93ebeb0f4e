use std::collections::HashMap;

use tracing::trace;

use crate::error::{Error, Result};
use crate::location::{Cost, Location};

/// Handle to a node slot. Valid until the node is removed; a later insert may
/// reuse the slot.
pub type NodeIndex = usize;

/// Handle to an edge slot.
pub type EdgeIndex = usize;

/// Node within the routing graph.
#[derive(Debug, Clone)]
struct Node {
    location: Location,
    leaving: Vec<EdgeIndex>,
    entering: Vec<EdgeIndex>,
}

/// Directed edge within the routing graph.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub pred: NodeIndex,
    pub succ: NodeIndex,
    pub cost: Cost,
}

/// Simple directed, weighted graph of airports.
///
/// Nodes and edges live in slot vectors; edges refer to their endpoints by
/// [`NodeIndex`] and every node keeps the indices of the edges leaving and
/// entering it. At most one edge exists per ordered `(pred, succ)` pair and
/// every live edge has both endpoints present.
///
/// Freed node and edge slots are recycled, so [`Graph::node_bound`] tracks the
/// peak number of live nodes rather than every node ever inserted. `order`
/// keeps live nodes in insertion order independently of slot reuse.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Option<Node>>,
    free_nodes: Vec<NodeIndex>,
    order: Vec<NodeIndex>,
    edges: Vec<Option<Edge>>,
    free_edges: Vec<EdgeIndex>,
    index: HashMap<Location, NodeIndex>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node for `location`. Returns `false` if an equal location is
    /// already present.
    pub fn insert_node(&mut self, location: Location) -> bool {
        if self.index.contains_key(&location) {
            return false;
        }
        let node = Node {
            location: location.clone(),
            leaving: Vec::new(),
            entering: Vec::new(),
        };
        let idx = match self.free_nodes.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };
        self.index.insert(location, idx);
        self.order.push(idx);
        true
    }

    /// Remove the node for `location` together with every edge touching it.
    pub fn remove_node(&mut self, location: &Location) -> bool {
        let Some(idx) = self.index.remove(location) else {
            return false;
        };
        let Some(node) = self.nodes[idx].take() else {
            return false;
        };
        self.free_nodes.push(idx);
        self.order.retain(|&live| live != idx);

        for edge_idx in node.leaving {
            if let Some(edge) = self.release_edge(edge_idx) {
                if let Some(succ) = self.node_mut(edge.succ) {
                    succ.entering.retain(|&e| e != edge_idx);
                }
            }
        }
        for edge_idx in node.entering {
            if let Some(edge) = self.release_edge(edge_idx) {
                if let Some(pred) = self.node_mut(edge.pred) {
                    pred.leaving.retain(|&e| e != edge_idx);
                }
            }
        }
        trace!(location = %location, edges = self.edge_count, "removed node");
        true
    }

    pub fn contains_node(&self, location: &Location) -> bool {
        self.index.contains_key(location)
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Insert the edge `pred -> succ`, or overwrite its cost when it already
    /// exists. Returns `false` when either endpoint is missing.
    pub fn insert_edge(&mut self, pred: &Location, succ: &Location, cost: Cost) -> bool {
        let (Some(pred_idx), Some(succ_idx)) = (self.node_index(pred), self.node_index(succ))
        else {
            return false;
        };

        if let Some(edge_idx) = self.find_edge(pred_idx, succ_idx) {
            if let Some(edge) = self.edges[edge_idx].as_mut() {
                edge.cost = cost;
            }
            return true;
        }

        let edge = Edge {
            pred: pred_idx,
            succ: succ_idx,
            cost,
        };
        let edge_idx = match self.free_edges.pop() {
            Some(slot) => {
                self.edges[slot] = Some(edge);
                slot
            }
            None => {
                self.edges.push(Some(edge));
                self.edges.len() - 1
            }
        };
        if let Some(node) = self.node_mut(pred_idx) {
            node.leaving.push(edge_idx);
        }
        if let Some(node) = self.node_mut(succ_idx) {
            node.entering.push(edge_idx);
        }
        self.edge_count += 1;
        true
    }

    /// Remove the edge `pred -> succ`. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, pred: &Location, succ: &Location) -> bool {
        let (Some(pred_idx), Some(succ_idx)) = (self.node_index(pred), self.node_index(succ))
        else {
            return false;
        };
        let Some(edge_idx) = self.find_edge(pred_idx, succ_idx) else {
            return false;
        };

        self.release_edge(edge_idx);
        if let Some(node) = self.node_mut(pred_idx) {
            node.leaving.retain(|&e| e != edge_idx);
        }
        if let Some(node) = self.node_mut(succ_idx) {
            node.entering.retain(|&e| e != edge_idx);
        }
        true
    }

    pub fn contains_edge(&self, pred: &Location, succ: &Location) -> bool {
        self.edge(pred, succ).is_ok()
    }

    /// Cost stored on the edge `pred -> succ`.
    pub fn edge(&self, pred: &Location, succ: &Location) -> Result<Cost> {
        self.node_index(pred)
            .zip(self.node_index(succ))
            .and_then(|(p, s)| self.find_edge(p, s))
            .and_then(|edge_idx| self.edges[edge_idx])
            .map(|edge| edge.cost)
            .ok_or_else(|| Error::EdgeNotFound {
                from: pred.to_string(),
                to: succ.to_string(),
            })
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Locations of all nodes, in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.order.iter().filter_map(|&idx| self.location(idx))
    }

    /// Resolve a location to its node index.
    pub fn node_index(&self, location: &Location) -> Option<NodeIndex> {
        self.index.get(location).copied()
    }

    /// Location stored in a node slot, if the node is still present.
    pub fn location(&self, idx: NodeIndex) -> Option<&Location> {
        self.node(idx).map(|node| &node.location)
    }

    /// Edges leaving a node, in the order they were inserted.
    pub fn neighbours(&self, idx: NodeIndex) -> impl Iterator<Item = Edge> + '_ {
        self.node(idx)
            .map(|node| node.leaving.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&edge_idx| self.edges[edge_idx])
    }

    /// Number of edges entering a node.
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.node(idx).map_or(0, |node| node.entering.len())
    }

    /// Number of edges leaving a node.
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.node(idx).map_or(0, |node| node.leaving.len())
    }

    /// Upper bound (exclusive) on live node indices, for sizing per-query tables.
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    // Linear scan of the predecessor's leaving list.
    fn find_edge(&self, pred: NodeIndex, succ: NodeIndex) -> Option<EdgeIndex> {
        self.node(pred)?
            .leaving
            .iter()
            .copied()
            .find(|&edge_idx| matches!(self.edges[edge_idx], Some(edge) if edge.succ == succ))
    }

    fn release_edge(&mut self, edge_idx: EdgeIndex) -> Option<Edge> {
        let edge = self.edges.get_mut(edge_idx)?.take()?;
        self.free_edges.push(edge_idx);
        self.edge_count -= 1;
        Some(edge)
    }
}
