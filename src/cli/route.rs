//! Route subcommands

use super::parse::parse_distance;
use clap::Subcommand;

/// Route subcommands
#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Add a route between two locations
    Add {
        /// Source location (id or name)
        from: String,

        /// Destination location (id or name)
        to: String,

        /// Route distance (must be positive)
        #[arg(long, short, value_parser = parse_distance)]
        distance: f64,

        /// Store only the `from -> to` row
        #[arg(long, conflicts_with = "both_ways")]
        one_way: bool,

        /// Also store the `to -> from` row (default unless configured otherwise)
        #[arg(long)]
        both_ways: bool,
    },

    /// Remove a stored route row
    Remove {
        /// Route id
        id: String,
    },

    /// List stored route rows
    List {
        /// Only routes touching this location (id or name)
        #[arg(long, short)]
        location: Option<String>,
    },
}
