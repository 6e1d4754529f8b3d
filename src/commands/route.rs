//! `waypath route` commands - manage stored route rows

use std::collections::HashMap;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{
    location_names, output_by_format_result, print_json, print_json_status, route_label,
};
use waypath_core::config::StoreConfig;
use waypath_core::error::Result;
use waypath_core::model::{NewRoute, Route};
use waypath_core::records::{format_edge_record, format_header};
use waypath_core::store::Store;

fn route_line(config: &StoreConfig, route: &Route, names: &HashMap<String, String>) -> String {
    format!(
        "{}  {}  {}",
        route.id,
        route_label(route, names),
        config.format_distance(route.distance)
    )
}

fn print_route_records(mode: &str, routes: &[Route]) {
    println!(
        "{}",
        format_header(mode, &[("count", routes.len().to_string())])
    );
    for route in routes {
        println!(
            "{}",
            format_edge_record(&route.from_location_id, &route.to_location_id, route.distance)
        );
    }
}

/// Execute `route add`
pub fn execute_add(
    cli: &Cli,
    store: &Store,
    from: &str,
    to: &str,
    distance: f64,
    bidirectional: bool,
) -> Result<()> {
    let from = store.resolve_location(from)?;
    let to = store.resolve_location(to)?;

    let rows = store.add_route(NewRoute {
        from_location_id: from.id,
        to_location_id: to.id,
        distance,
        bidirectional,
    })?;

    output_by_format_result!(cli.format,
        json => { print_json(&rows) },
        human => {
            let names = location_names(store)?;
            for route in &rows {
                println!("{}", route_line(store.config(), route, &names));
            }
        },
        records => { print_route_records("route.add", &rows); }
    )
}

/// Execute `route remove`. Only the named row is removed.
pub fn execute_remove(cli: &Cli, store: &Store, id: &str) -> Result<()> {
    let route = store.delete_route(id)?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "removed",
                None,
                &[
                    ("id", json!(route.id)),
                    ("from_location_id", json!(route.from_location_id)),
                    ("to_location_id", json!(route.to_location_id)),
                ],
            )
        },
        human => {
            if !cli.quiet {
                let names = location_names(store)?;
                println!("Removed route {}", route_label(&route, &names));
            }
        },
        records => {
            println!("{}", format_header("route.remove", &[("id", route.id.clone())]));
        }
    )
}

/// Execute `route list`, optionally only rows touching one location
pub fn execute_list(cli: &Cli, store: &Store, location: Option<&str>) -> Result<()> {
    let routes = match location {
        Some(reference) => {
            let location = store.resolve_location(reference)?;
            store.routes_for_location(&location.id)?
        }
        None => store.list_routes()?,
    };

    match cli.format {
        OutputFormat::Json => print_json(&routes)?,
        OutputFormat::Human => {
            if routes.is_empty() {
                if !cli.quiet {
                    println!("No routes");
                }
            } else {
                let names = location_names(store)?;
                for route in &routes {
                    println!("{}", route_line(store.config(), route, &names));
                }
            }
        }
        OutputFormat::Records => print_route_records("route.list", &routes),
    }

    Ok(())
}
