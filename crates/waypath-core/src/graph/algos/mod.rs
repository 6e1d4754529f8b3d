//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted shortest path between two nodes
//! - `traversal`: breadth-first and depth-first visitation order

pub mod dijkstra;
pub mod traversal;
