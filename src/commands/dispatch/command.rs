//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use waypath_core::error::Result;
use waypath_core::store::Store;

use super::trace_command;

/// Discover or open a store based on CLI configuration
pub fn discover_or_open_store(cli: &Cli, root: &Path) -> Result<Store> {
    match &cli.store {
        Some(path) => Store::open(&resolve_store_path(root, path)),
        None => Store::discover(root),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn discover_or_open_store(&self) -> Result<Store> {
        let store = discover_or_open_store(self.cli, self.root)?;
        trace_command!(self.cli, self.start, "discover_store");
        Ok(store)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Locations, routes and shortest paths.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}
