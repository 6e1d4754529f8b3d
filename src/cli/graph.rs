//! Graph inspection subcommands

use clap::Subcommand;

/// Graph subcommands
#[derive(Subcommand, Debug)]
pub enum GraphCommands {
    /// List graph nodes
    Nodes,

    /// List directed graph edges (each route appears in both directions)
    Edges,

    /// Breadth-first visitation order from a location
    Bfs {
        /// Start location (id or name)
        start: String,
    },

    /// Depth-first visitation order from a location
    Dfs {
        /// Start location (id or name)
        start: String,
    },
}
