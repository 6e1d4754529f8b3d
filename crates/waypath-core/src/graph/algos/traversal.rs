use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;

impl Graph {
    /// Breadth-first visitation order from `start`, each reachable node once.
    /// Empty when `start` is not a node.
    pub fn breadth_first(&self, start: &str) -> Vec<String> {
        let Some(start_node) = self.node(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut order = Vec::new();

        visited.insert(start_node.id.as_str());
        queue.push_back(start_node.id.as_str());

        while let Some(current) = queue.pop_front() {
            order.push(current.to_string());
            for (neighbor, _) in self.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }

    /// Depth-first (pre-order) visitation order from `start`, each reachable node
    /// once. Empty when `start` is not a node.
    pub fn depth_first(&self, start: &str) -> Vec<String> {
        let Some(start_node) = self.node(start) else {
            return Vec::new();
        };

        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![start_node.id.as_str()];
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current.to_string());

            // Reverse so the lowest neighbor id is explored first
            let mut pending: Vec<&str> = self
                .neighbors(current)
                .map(|(neighbor, _)| neighbor)
                .filter(|neighbor| !visited.contains(neighbor))
                .collect();
            pending.reverse();
            stack.extend(pending);
        }

        order
    }
}
