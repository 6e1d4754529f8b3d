//! `waypath status` command - store location, counts and a database check

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use serde_json::json;
use waypath_core::error::Result;
use waypath_core::records::format_header;
use waypath_core::store::{Store, CURRENT_SCHEMA_VERSION};

/// Execute the status command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    // Counting both tables doubles as the connection check
    let counts = store.counts()?;
    let config = store.config();

    match cli.format {
        OutputFormat::Json => {
            print_json(&json!({
                "store": store.root().display().to_string(),
                "schema_version": CURRENT_SCHEMA_VERSION,
                "database": "ok",
                "locations": counts.locations,
                "routes": counts.routes,
                "config": config,
            }))?;
        }
        OutputFormat::Human => {
            println!("Store: {}", store.root().display());
            println!("Database: ok (schema v{})", CURRENT_SCHEMA_VERSION);
            println!("Locations: {}", counts.locations);
            println!("Routes: {}", counts.routes);
            if !cli.quiet {
                println!(
                    "Routes added as: {}",
                    if config.routes.default_bidirectional {
                        "two-way"
                    } else {
                        "one-way"
                    }
                );
                if let Some(max) = config.path.max_distance {
                    println!("Max path distance: {}", config.format_distance(max));
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "status",
                    &[
                        ("store", store.root().display().to_string()),
                        ("locations", counts.locations.to_string()),
                        ("routes", counts.routes.to_string()),
                    ],
                )
            );
        }
    }

    Ok(())
}
