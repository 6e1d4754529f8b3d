use std::collections::{HashMap, HashSet};

use crate::graph::queue::PriorityQueue;
use crate::graph::types::{PathOutcome, PathResult};
use crate::graph::Graph;

/// State tracked during a single shortest-path search
struct DijkstraState<'a> {
    /// Tentative distances; absent means infinity
    distances: HashMap<&'a str, f64>,
    previous: HashMap<&'a str, &'a str>,
    settled: HashSet<&'a str>,
    frontier: PriorityQueue<&'a str>,
}

impl<'a> DijkstraState<'a> {
    fn new(start: &'a str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            previous: HashMap::new(),
            settled: HashSet::new(),
            frontier: PriorityQueue::new(),
        };
        state.distances.insert(start, 0.0);
        state.frontier.enqueue(start, 0.0);
        state
    }

    fn distance(&self, id: &str) -> f64 {
        self.distances.get(id).copied().unwrap_or(f64::INFINITY)
    }

    /// Walk predecessors back from `end`; `None` if the chain never reaches `start`
    fn reconstruct(&self, start: &'a str, end: &'a str) -> Option<Vec<&'a str>> {
        let mut path = vec![end];
        let mut current = end;
        while current != start {
            current = *self.previous.get(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

impl Graph {
    /// Shortest path between two nodes.
    ///
    /// Edge weights must be non-negative.
    pub fn shortest_path(&self, start: &str, end: &str) -> PathOutcome {
        self.shortest_path_within(start, end, None)
    }

    /// Shortest path between two nodes, treating anything longer than
    /// `max_distance` as unreachable.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn shortest_path_within(
        &self,
        start: &str,
        end: &str,
        max_distance: Option<f64>,
    ) -> PathOutcome {
        let Some(start_node) = self.node(start) else {
            return PathOutcome::UnknownEndpoint(start.to_string());
        };

        if start == end {
            return PathOutcome::Found(PathResult {
                path: vec![start_node.id.clone()],
                distance: 0.0,
                locations: vec![start_node.clone()],
            });
        }

        let Some(end_node) = self.node(end) else {
            return PathOutcome::UnknownEndpoint(end.to_string());
        };

        let start_id = start_node.id.as_str();
        let end_id = end_node.id.as_str();
        let mut state = DijkstraState::new(start_id);

        while let Some(current) = state.frontier.dequeue() {
            // A node may sit in the frontier several times; only its first pop counts
            if !state.settled.insert(current) {
                continue;
            }
            if current == end_id {
                break;
            }

            let current_distance = state.distance(current);
            for (neighbor, weight) in self.neighbors(current) {
                if state.settled.contains(neighbor) {
                    continue;
                }
                let candidate = current_distance + weight;
                if max_distance.is_some_and(|max| candidate > max) {
                    continue;
                }
                if candidate < state.distance(neighbor) {
                    state.distances.insert(neighbor, candidate);
                    state.previous.insert(neighbor, current);
                    state.frontier.enqueue(neighbor, candidate);
                }
            }
        }

        let distance = state.distance(end_id);
        if !distance.is_finite() {
            tracing::debug!(start, end, "no path");
            return PathOutcome::Unreachable;
        }

        let Some(ids) = state.reconstruct(start_id, end_id) else {
            return PathOutcome::Unreachable;
        };

        let locations = ids
            .iter()
            .filter_map(|id| self.node(id).cloned())
            .collect();

        PathOutcome::Found(PathResult {
            path: ids.into_iter().map(str::to_string).collect(),
            distance,
            locations,
        })
    }

    /// Shortest path, or `None` when either endpoint is unknown or no path exists
    pub fn dijkstra(&self, start: &str, end: &str) -> Option<PathResult> {
        self.shortest_path(start, end).into_path()
    }
}

#[cfg(test)]
mod tests;
