//! Line formatters for the records output format
//!
//! Every records payload starts with an `H` header line. Other line kinds:
//! - `N <id> "<name>" x=<x> y=<y>`: a location / graph node
//! - `E <from> <to> distance=<d>`: a directed edge or stored route row
//! - `P <index> <id> "<name>" at=<cumulative distance>`: one stop on a path

use crate::graph::{GraphEdge, GraphNode};
use crate::model::Location;

/// Escape double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

/// Format the header line for a records payload
pub fn format_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H waypath=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

pub fn format_node_record(node: &GraphNode) -> String {
    format!(
        "N {} \"{}\" x={} y={}",
        node.id,
        escape_quotes(&node.name),
        node.x,
        node.y
    )
}

pub fn format_location_record(location: &Location) -> String {
    format_node_record(&GraphNode::from(location))
}

pub fn format_edge_record(from: &str, to: &str, distance: f64) -> String {
    format!("E {} {} distance={}", from, to, distance)
}

pub fn format_graph_edge_record(edge: &GraphEdge) -> String {
    format_edge_record(&edge.from, &edge.to, edge.distance)
}

pub fn format_stop_record(index: usize, node: &GraphNode, at: f64) -> String {
    format!(
        "P {} {} \"{}\" at={}",
        index,
        node.id,
        escape_quotes(&node.name),
        at
    )
}
