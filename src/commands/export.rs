//! `waypath export` command - write the whole network as JSON
//!
//! The payload is always JSON so that `waypath import` can read it back.
//! Output goes to stdout unless `--output <path>` is given.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status};
use waypath_core::error::Result;
use waypath_core::records::format_header;
use waypath_core::store::Store;

/// Execute the export command
pub fn execute(cli: &Cli, store: &Store, output: Option<&Path>) -> Result<()> {
    let network = store.export()?;
    let payload = serde_json::to_string_pretty(&network)?;

    let Some(path) = output else {
        println!("{}", payload);
        return Ok(());
    };

    fs::write(path, format!("{}\n", payload))?;
    tracing::debug!(path = %path.display(), "network exported");

    let (locations, routes) = (network.locations.len(), network.routes.len());
    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                None,
                &[
                    ("output", json!(path.display().to_string())),
                    ("locations", json!(locations)),
                    ("routes", json!(routes)),
                ],
            )
        },
        human => {
            if !cli.quiet {
                println!(
                    "Exported {} location(s) and {} route(s) to {}",
                    locations,
                    routes,
                    path.display()
                );
            }
        },
        records => {
            println!(
                "{}",
                format_header(
                    "export",
                    &[
                        ("locations", locations.to_string()),
                        ("routes", routes.to_string()),
                    ],
                )
            );
        }
    )
}
