use crate::error::Result;
use crate::graph::{Graph, GraphNode};
use crate::model::{Location, Route};

/// Build a fresh graph from location and route records.
///
/// Each location becomes one node. Each route becomes two directed edges, `from -> to`
/// and `to -> from`, both weighted by the route distance, whether or not the store
/// also holds the mirrored row. Repeated pairs overwrite, so the last row for a pair
/// wins. A route naming an unknown location fails the whole build.
#[tracing::instrument(skip_all, fields(locations = locations.len(), routes = routes.len()))]
pub fn build_graph(locations: &[Location], routes: &[Route]) -> Result<Graph> {
    let mut graph = Graph::new();

    for location in locations {
        graph.add_node(GraphNode::from(location));
    }

    for route in routes {
        graph.add_edge(&route.from_location_id, &route.to_location_id, route.distance)?;
        graph.add_edge(&route.to_location_id, &route.from_location_id, route.distance)?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    Ok(graph)
}
