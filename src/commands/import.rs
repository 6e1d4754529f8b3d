//! `waypath import` command - load a JSON export into the store
//!
//! Records keep their ids. The import is all-or-nothing: a duplicate id or a
//! route to an unknown location leaves the store untouched.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status};
use waypath_core::error::{Result, WaypathError};
use waypath_core::model::Network;
use waypath_core::records::format_header;
use waypath_core::store::Store;

/// Execute the import command
pub fn execute(cli: &Cli, store: &Store, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file).map_err(|e| {
        WaypathError::FailedOperation {
            operation: format!("read {}", file.display()),
            reason: e.to_string(),
        }
    })?;
    let network: Network = serde_json::from_str(&content)
        .map_err(|e| WaypathError::invalid_value("import file", e))?;

    let summary = store.import(&network)?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                None,
                &[
                    ("locations", json!(summary.locations)),
                    ("routes", json!(summary.routes)),
                ],
            )
        },
        human => {
            if !cli.quiet {
                println!(
                    "Imported {} location(s) and {} route(s)",
                    summary.locations, summary.routes
                );
            }
        },
        records => {
            println!(
                "{}",
                format_header(
                    "import",
                    &[
                        ("locations", summary.locations.to_string()),
                        ("routes", summary.routes.to_string()),
                    ],
                )
            );
        }
    )
}
