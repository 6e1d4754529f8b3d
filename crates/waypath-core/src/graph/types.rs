use serde::Serialize;

use crate::model::Location;

/// A graph vertex carrying the display and layout attributes of one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl From<&Location> for GraphNode {
    fn from(location: &Location) -> Self {
        GraphNode {
            id: location.id.clone(),
            name: location.name.clone(),
            x: location.x_coordinate,
            y: location.y_coordinate,
        }
    }
}

/// A directed, weighted connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// A shortest path from source to destination, both inclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node ids in travel order
    pub path: Vec<String>,
    /// Sum of the edge weights along `path`
    pub distance: f64,
    /// Full node records in travel order
    pub locations: Vec<GraphNode>,
}

impl PathResult {
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// A path exists
    Found(PathResult),
    /// Both endpoints exist but no path connects them
    Unreachable,
    /// The given endpoint id is not a node of the graph
    UnknownEndpoint(String),
}

impl PathOutcome {
    /// Collapse the outcome into "a path, or no path"
    pub fn into_path(self) -> Option<PathResult> {
        match self {
            PathOutcome::Found(result) => Some(result),
            PathOutcome::Unreachable | PathOutcome::UnknownEndpoint(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}
