//! `waypath init` command - create a new store
//!
//! Idempotent: an existing store is opened and reported unchanged.

use std::path::Path;

use serde_json::json;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json_status};
use waypath_core::error::Result;
use waypath_core::records::format_header;
use waypath_core::store::Store;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let store = match cli.store.as_ref() {
        Some(path) => Store::init_at(&resolve_store_path(root, path))?,
        None => Store::init(root)?,
    };
    let store_path = store.root().display().to_string();

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                Some("Store initialized"),
                &[("store", json!(store_path))],
            )
        },
        human => {
            if !cli.quiet {
                println!("Initialized waypath store at {}", store_path);
            }
        },
        records => {
            println!(
                "{}",
                format_header("init", &[("store", store_path.clone()), ("status", "ok".into())])
            );
        }
    )
}
