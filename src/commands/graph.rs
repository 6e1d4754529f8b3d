//! `waypath graph` commands - inspect the in-memory graph
//!
//! The graph is rebuilt from the store on every invocation. Each stored route
//! contributes an edge in both directions.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use waypath_core::error::Result;
use waypath_core::graph::{load_graph, Graph};
use waypath_core::records::{format_graph_edge_record, format_header, format_node_record};
use waypath_core::store::Store;

/// Traversal order for `graph bfs` / `graph dfs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Bfs,
    Dfs,
}

impl Order {
    fn mode(self) -> &'static str {
        match self {
            Order::Bfs => "graph.bfs",
            Order::Dfs => "graph.dfs",
        }
    }

    fn visit(self, graph: &Graph, start: &str) -> Vec<String> {
        match self {
            Order::Bfs => graph.breadth_first(start),
            Order::Dfs => graph.depth_first(start),
        }
    }
}

/// Execute `graph nodes`
pub fn execute_nodes(cli: &Cli, store: &Store) -> Result<()> {
    let graph = load_graph(store)?;
    let nodes = graph.nodes();

    match cli.format {
        OutputFormat::Json => print_json(&nodes)?,
        OutputFormat::Human => {
            let config = store.config();
            for node in &nodes {
                println!(
                    "{}  {}  ({}, {})  degree={}",
                    node.id,
                    node.name,
                    config.format_coordinate(node.x),
                    config.format_coordinate(node.y),
                    graph.neighbors(&node.id).count()
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header("graph.nodes", &[("count", nodes.len().to_string())])
            );
            for node in &nodes {
                println!("{}", format_node_record(node));
            }
        }
    }

    Ok(())
}

/// Execute `graph edges`
pub fn execute_edges(cli: &Cli, store: &Store) -> Result<()> {
    let graph = load_graph(store)?;
    let edges = graph.edges();

    match cli.format {
        OutputFormat::Json => print_json(&edges)?,
        OutputFormat::Human => {
            let config = store.config();
            for edge in &edges {
                let name = |id: &str| graph.node(id).map(|n| n.name.clone()).unwrap_or_default();
                println!(
                    "{} -> {}  {}",
                    name(&edge.from),
                    name(&edge.to),
                    config.format_distance(edge.distance)
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header("graph.edges", &[("count", edges.len().to_string())])
            );
            for edge in &edges {
                println!("{}", format_graph_edge_record(edge));
            }
        }
    }

    Ok(())
}

/// Execute `graph bfs` or `graph dfs` from a resolved start location
pub fn execute_traversal(cli: &Cli, store: &Store, start: &str, order: Order) -> Result<()> {
    let start = store.resolve_location(start)?;
    let graph = load_graph(store)?;
    let visited = order.visit(&graph, &start.id);

    match cli.format {
        OutputFormat::Json => {
            let nodes: Vec<_> = visited.iter().filter_map(|id| graph.node(id)).collect();
            print_json(&json!({
                "start": start.id,
                "order": visited,
                "locations": nodes,
            }))?;
        }
        OutputFormat::Human => {
            for (index, id) in visited.iter().enumerate() {
                let name = graph.node(id).map(|n| n.name.as_str()).unwrap_or(id.as_str());
                println!("{}. {} ({})", index + 1, name, id);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    order.mode(),
                    &[
                        ("start", start.id.clone()),
                        ("count", visited.len().to_string()),
                    ],
                )
            );
            for id in &visited {
                if let Some(node) = graph.node(id) {
                    println!("{}", format_node_record(node));
                }
            }
        }
    }

    Ok(())
}
