//! Location subcommands

use super::parse::parse_coordinate;
use clap::Subcommand;

/// Location subcommands
#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// Add a location
    Add {
        /// Display name
        name: String,

        /// X coordinate (layout only)
        #[arg(long, short, allow_hyphen_values = true, value_parser = parse_coordinate)]
        x: f64,

        /// Y coordinate (layout only)
        #[arg(long, short, allow_hyphen_values = true, value_parser = parse_coordinate)]
        y: f64,

        /// Free-text description
        #[arg(long, short)]
        description: Option<String>,
    },

    /// Change fields of an existing location
    Edit {
        /// Location id or name
        location: String,

        /// New display name
        #[arg(long, short)]
        name: Option<String>,

        /// New X coordinate
        #[arg(long, short, allow_hyphen_values = true, value_parser = parse_coordinate)]
        x: Option<f64>,

        /// New Y coordinate
        #[arg(long, short, allow_hyphen_values = true, value_parser = parse_coordinate)]
        y: Option<f64>,

        /// New description
        #[arg(long, short, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,
    },

    /// Remove a location and every route connected to it
    Remove {
        /// Location id or name
        location: String,
    },

    /// List all locations
    List,

    /// Show a location and its routes
    Show {
        /// Location id or name
        location: String,
    },
}
