//! Data access seam for graph construction
//!
//! Whatever holds the authoritative locations and routes implements `DataSource`;
//! the graph is always rebuilt wholesale from it.

use std::time::Instant;

use crate::error::Result;
use crate::graph::{build_graph, Graph};
use crate::model::{Location, Network, Route};
use crate::trace_time;

/// Read access to location and route records
pub trait DataSource {
    fn locations(&self) -> Result<Vec<Location>>;
    fn routes(&self) -> Result<Vec<Route>>;
}

impl DataSource for Network {
    fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn routes(&self) -> Result<Vec<Route>> {
        Ok(self.routes.clone())
    }
}

/// Fetch every location and route from `source` and build a fresh graph
pub fn load_graph(source: &dyn DataSource) -> Result<Graph> {
    let start = Instant::now();
    let locations = source.locations()?;
    let routes = source.routes()?;
    trace_time!(start, "fetch_records", locations = locations.len(), routes = routes.len());

    build_graph(&locations, &routes)
}
