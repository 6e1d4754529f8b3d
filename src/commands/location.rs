//! `waypath location` commands - manage locations
//!
//! References accept either a location id or a unique, case-insensitive name.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{
    location_names, output_by_format_result, print_json, print_json_status, route_label,
};
use waypath_core::config::StoreConfig;
use waypath_core::error::{Result, WaypathError};
use waypath_core::model::{Location, LocationUpdate, NewLocation};
use waypath_core::records::{format_edge_record, format_header, format_location_record};
use waypath_core::store::Store;

/// One-line human summary of a location
fn location_line(config: &StoreConfig, location: &Location) -> String {
    format!(
        "{}  {}  ({}, {})",
        location.id,
        location.name,
        config.format_coordinate(location.x_coordinate),
        config.format_coordinate(location.y_coordinate)
    )
}

/// Execute `location add`
pub fn execute_add(cli: &Cli, store: &Store, new: NewLocation) -> Result<()> {
    let location = store.add_location(new)?;

    output_by_format_result!(cli.format,
        json => { print_json(&location) },
        human => {
            println!("{}", location.id);
            if !cli.quiet {
                println!("Added location {}", location.name);
            }
        },
        records => {
            println!("{}", format_header("location.add", &[("id", location.id.clone())]));
            println!("{}", format_location_record(&location));
        }
    )
}

/// Execute `location edit`
pub fn execute_edit(
    cli: &Cli,
    store: &Store,
    reference: &str,
    update: LocationUpdate,
) -> Result<()> {
    if update.is_empty() {
        return Err(WaypathError::UsageError(
            "nothing to change: pass --name, --x, --y, --description or --clear-description"
                .to_string(),
        ));
    }

    let existing = store.resolve_location(reference)?;
    let location = store.update_location(&existing.id, &update)?;

    output_by_format_result!(cli.format,
        json => { print_json(&location) },
        human => {
            if !cli.quiet {
                println!("Updated {}", location_line(store.config(), &location));
            }
        },
        records => {
            println!("{}", format_header("location.edit", &[("id", location.id.clone())]));
            println!("{}", format_location_record(&location));
        }
    )
}

/// Execute `location remove`; connected routes go with it
pub fn execute_remove(cli: &Cli, store: &Store, reference: &str) -> Result<()> {
    let existing = store.resolve_location(reference)?;
    let (location, routes_removed) = store.delete_location(&existing.id)?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "removed",
                None,
                &[
                    ("id", json!(location.id)),
                    ("name", json!(location.name)),
                    ("routes_removed", json!(routes_removed)),
                ],
            )
        },
        human => {
            if !cli.quiet {
                println!(
                    "Removed location {} ({} route(s) removed)",
                    location.name, routes_removed
                );
            }
        },
        records => {
            println!(
                "{}",
                format_header(
                    "location.remove",
                    &[
                        ("id", location.id.clone()),
                        ("routes_removed", routes_removed.to_string()),
                    ],
                )
            );
        }
    )
}

/// Execute `location list`
pub fn execute_list(cli: &Cli, store: &Store) -> Result<()> {
    let locations = store.list_locations()?;

    match cli.format {
        OutputFormat::Json => print_json(&locations)?,
        OutputFormat::Human => {
            if locations.is_empty() {
                if !cli.quiet {
                    println!("No locations");
                }
            } else {
                for location in &locations {
                    println!("{}", location_line(store.config(), location));
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header("location.list", &[("count", locations.len().to_string())])
            );
            for location in &locations {
                println!("{}", format_location_record(location));
            }
        }
    }

    Ok(())
}

/// Execute `location show`: the record plus every route row touching it
pub fn execute_show(cli: &Cli, store: &Store, reference: &str) -> Result<()> {
    let location = store.resolve_location(reference)?;
    let routes = store.routes_for_location(&location.id)?;

    match cli.format {
        OutputFormat::Json => {
            print_json(&json!({
                "location": location,
                "routes": routes,
            }))?;
        }
        OutputFormat::Human => {
            let config = store.config();
            println!("{}", location.name);
            println!("  id: {}", location.id);
            println!(
                "  position: ({}, {})",
                config.format_coordinate(location.x_coordinate),
                config.format_coordinate(location.y_coordinate)
            );
            if let Some(description) = &location.description {
                println!("  description: {}", description);
            }
            if let Some(created) = location.created_at {
                println!("  created: {}", created.to_rfc3339());
            }

            if routes.is_empty() {
                println!("  routes: none");
            } else {
                let names = location_names(store)?;
                println!("  routes:");
                for route in &routes {
                    println!(
                        "    {}  {}  {}",
                        route.id,
                        route_label(route, &names),
                        config.format_distance(route.distance)
                    );
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "location.show",
                    &[
                        ("id", location.id.clone()),
                        ("routes", routes.len().to_string()),
                    ],
                )
            );
            println!("{}", format_location_record(&location));
            for route in &routes {
                println!(
                    "{}",
                    format_edge_record(
                        &route.from_location_id,
                        &route.to_location_id,
                        route.distance
                    )
                );
            }
        }
    }

    Ok(())
}
