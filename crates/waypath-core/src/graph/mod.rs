//! In-memory weighted graph over locations and routes
//!
//! Provides:
//! - `Graph`: nodes plus a directed adjacency map (node id -> neighbor id -> weight)
//! - Dijkstra shortest-path search and BFS/DFS traversal
//! - `build_graph`/`load_graph` for constructing a graph from stored records
//!
//! Edge weights must be non-negative. Shortest-path results over negative weights
//! are unspecified.

pub mod algos;
pub mod builder;
pub mod queue;
pub mod source;
pub mod types;

use std::collections::BTreeMap;

use crate::error::{Result, WaypathError};

pub use builder::build_graph;
pub use queue::PriorityQueue;
pub use source::{load_graph, DataSource};
pub use types::{GraphEdge, GraphNode, PathOutcome, PathResult};

/// Weighted directed graph. Iteration is ordered by node id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: BTreeMap<String, GraphNode>,
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a node, keeping any edges already recorded for it
    pub fn add_node(&mut self, node: GraphNode) {
        self.adjacency.entry(node.id.clone()).or_default();
        self.nodes.insert(node.id.clone(), node);
    }

    /// Insert or overwrite the directed edge `from -> to`.
    ///
    /// Both endpoints must already be registered with `add_node`; otherwise the
    /// edge is rejected with `UnknownNode` and the graph is left unchanged.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        if !self.nodes.contains_key(to) {
            return Err(WaypathError::unknown_node(to));
        }
        let neighbors = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| WaypathError::unknown_node(from))?;
        neighbors.insert(to.to_string(), weight);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Outgoing edges of `id` as `(neighbor, weight)`, ordered by neighbor id
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(to, w)| (to.as_str(), *w)))
    }

    /// Weight of the directed edge `from -> to`, if present
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node records
    pub fn nodes(&self) -> Vec<GraphNode> {
        self.nodes.values().cloned().collect()
    }

    /// All directed edges, one per adjacency entry
    pub fn edges(&self) -> Vec<GraphEdge> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors.iter().map(move |(to, distance)| GraphEdge {
                    from: from.clone(),
                    to: to.clone(),
                    distance: *distance,
                })
            })
            .collect()
    }
}
