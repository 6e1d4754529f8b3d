//! CLI argument parsing for waypath
//!
//! Uses clap derive. Global flags: --root, --store, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod format;
pub mod graph;
pub mod location;
pub mod parse;
pub mod paths;
pub mod route;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use graph::GraphCommands;
pub use location::LocationCommands;
pub use route::RouteCommands;
pub use waypath_core::format::OutputFormat;

use parse::parse_format;

/// Waypath - locations, routes and shortest paths
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true, env = "WAYPATH_STORE")]
    pub store: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, waypath_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new waypath store
    Init,

    /// Manage locations
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },

    /// Manage routes between locations
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },

    /// Find the shortest path between two locations
    Path {
        /// Starting location (id or name)
        from: String,

        /// Destination location (id or name)
        to: String,

        /// Treat paths longer than this as unreachable (overrides config)
        #[arg(long, value_parser = parse::parse_distance)]
        max_distance: Option<f64>,
    },

    /// Inspect the graph built from the stored locations and routes
    Graph {
        #[command(subcommand)]
        command: GraphCommands,
    },

    /// Write all locations and routes as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Load locations and routes from a JSON export
    Import {
        /// File produced by `waypath export`
        file: PathBuf,
    },

    /// Show store location and record counts
    Status,
}
