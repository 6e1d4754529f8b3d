//! `waypath path` command - shortest path between two locations
//!
//! An unreachable destination is a successful query reported as "no path".
//! An endpoint that does not resolve to a stored location is a data error.

use std::time::Instant;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{load_graph, Graph, PathOutcome, PathResult};
use waypath_core::model::Location;
use waypath_core::records::{format_edge_record, format_header, format_stop_record};
use waypath_core::store::Store;
use waypath_core::trace_time;

/// Execute the path command
pub fn execute(
    cli: &Cli,
    store: &Store,
    from: &str,
    to: &str,
    max_distance: Option<f64>,
) -> Result<()> {
    let from = store.resolve_location(from)?;
    let to = store.resolve_location(to)?;

    let start = Instant::now();
    let graph = load_graph(store)?;
    let limit = max_distance.or(store.config().path.max_distance);
    let outcome = graph.shortest_path_within(&from.id, &to.id, limit);
    trace_time!(start, "shortest_path", found = outcome.is_found());

    match outcome {
        PathOutcome::Found(result) => {
            let legs = leg_distances(&graph, &result)?;
            output_found(cli, store, &from, &to, &result, &legs)
        }
        PathOutcome::Unreachable => output_unreachable(cli, &from, &to, limit),
        PathOutcome::UnknownEndpoint(id) => Err(WaypathError::not_found("location", id)),
    }
}

/// Cumulative distance at each stop, starting at zero
fn cumulative_distances(result: &PathResult, legs: &[f64]) -> Vec<f64> {
    let mut at = Vec::with_capacity(result.path.len());
    let mut total = 0.0;
    at.push(total);
    for leg in legs {
        total += leg;
        at.push(total);
    }
    at
}

/// Weight of each hop along the path
fn leg_distances(graph: &Graph, result: &PathResult) -> Result<Vec<f64>> {
    result
        .path
        .windows(2)
        .map(|pair| {
            graph
                .weight(&pair[0], &pair[1])
                .ok_or_else(|| WaypathError::unknown_node(pair[1].clone()))
        })
        .collect()
}

fn output_found(
    cli: &Cli,
    store: &Store,
    from: &Location,
    to: &Location,
    result: &PathResult,
    legs: &[f64],
) -> Result<()> {
    let at = cumulative_distances(result, legs);

    match cli.format {
        OutputFormat::Json => {
            let leg_values: Vec<_> = result
                .path
                .windows(2)
                .zip(legs)
                .map(|(pair, distance)| {
                    json!({ "from": pair[0], "to": pair[1], "distance": distance })
                })
                .collect();
            print_json(&json!({
                "found": true,
                "from": from.id,
                "to": to.id,
                "distance": result.distance,
                "hops": result.hops(),
                "path": result.path,
                "locations": result.locations,
                "legs": leg_values,
            }))?;
        }
        OutputFormat::Human => {
            let config = store.config();
            println!(
                "{} -> {}: {} ({} hop(s))",
                from.name,
                to.name,
                config.format_distance(result.distance),
                result.hops()
            );
            for (index, (node, at)) in result.locations.iter().zip(&at).enumerate() {
                println!(
                    "  {}. {} ({})  {}",
                    index + 1,
                    node.name,
                    node.id,
                    config.format_distance(*at)
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "path",
                    &[
                        ("from", from.id.clone()),
                        ("to", to.id.clone()),
                        ("found", "true".into()),
                        ("distance", result.distance.to_string()),
                        ("hops", result.hops().to_string()),
                    ],
                )
            );
            for (index, (node, at)) in result.locations.iter().zip(&at).enumerate() {
                println!("{}", format_stop_record(index, node, *at));
            }
            for (pair, distance) in result.path.windows(2).zip(legs) {
                println!("{}", format_edge_record(&pair[0], &pair[1], *distance));
            }
        }
    }

    Ok(())
}

fn output_unreachable(
    cli: &Cli,
    from: &Location,
    to: &Location,
    limit: Option<f64>,
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            print_json(&json!({
                "found": false,
                "from": from.id,
                "to": to.id,
                "max_distance": limit,
            }))?;
        }
        OutputFormat::Human => {
            println!("No path found from {} to {}", from.name, to.name);
            if let Some(limit) = limit {
                if !cli.quiet {
                    println!("  (paths longer than {} are not considered)", limit);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "path",
                    &[
                        ("from", from.id.clone()),
                        ("to", to.id.clone()),
                        ("found", "false".into()),
                    ],
                )
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_distances() {
        let result = PathResult {
            path: vec!["a".into(), "b".into(), "c".into()],
            distance: 7.5,
            locations: Vec::new(),
        };
        assert_eq!(
            cumulative_distances(&result, &[2.5, 5.0]),
            vec![0.0, 2.5, 7.5]
        );
    }
}
