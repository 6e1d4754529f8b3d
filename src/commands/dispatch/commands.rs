//! Command implementations for all waypath commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use waypath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use std::path::Path;

    use crate::cli::{GraphCommands, LocationCommands, RouteCommands};
    use crate::commands;
    use crate::commands::dispatch::trace_command;
    use waypath_core::model::{LocationUpdate, NewLocation};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Init => commands::init::execute(ctx.cli, ctx.root),
            Commands::Location { command } => execute_location(ctx, command),
            Commands::Route { command } => execute_route(ctx, command),
            Commands::Path {
                from,
                to,
                max_distance,
            } => execute_path(ctx, from, to, *max_distance),
            Commands::Graph { command } => execute_graph(ctx, command),
            Commands::Export { output } => execute_export(ctx, output.as_deref()),
            Commands::Import { file } => execute_import(ctx, file),
            Commands::Status => execute_status(ctx),
        }
    }

    fn execute_location(ctx: &CommandContext, command: &LocationCommands) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        let cli = ctx.cli;

        let result = match command {
            LocationCommands::Add {
                name,
                x,
                y,
                description,
            } => commands::location::execute_add(
                cli,
                &store,
                NewLocation {
                    name: name.clone(),
                    description: description.clone(),
                    x_coordinate: *x,
                    y_coordinate: *y,
                },
            ),
            LocationCommands::Edit {
                location,
                name,
                x,
                y,
                description,
                clear_description,
            } => {
                let description = if *clear_description {
                    Some(None)
                } else {
                    description.clone().map(Some)
                };
                commands::location::execute_edit(
                    cli,
                    &store,
                    location,
                    LocationUpdate {
                        name: name.clone(),
                        description,
                        x_coordinate: *x,
                        y_coordinate: *y,
                    },
                )
            }
            LocationCommands::Remove { location } => {
                commands::location::execute_remove(cli, &store, location)
            }
            LocationCommands::List => commands::location::execute_list(cli, &store),
            LocationCommands::Show { location } => {
                commands::location::execute_show(cli, &store, location)
            }
        };

        trace_command!(cli, ctx.start, "execute_command");
        result
    }

    fn execute_route(ctx: &CommandContext, command: &RouteCommands) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        let cli = ctx.cli;

        let result = match command {
            RouteCommands::Add {
                from,
                to,
                distance,
                one_way,
                both_ways,
            } => {
                let bidirectional = if *one_way {
                    false
                } else {
                    *both_ways || store.config().routes.default_bidirectional
                };
                commands::route::execute_add(cli, &store, from, to, *distance, bidirectional)
            }
            RouteCommands::Remove { id } => commands::route::execute_remove(cli, &store, id),
            RouteCommands::List { location } => {
                commands::route::execute_list(cli, &store, location.as_deref())
            }
        };

        trace_command!(cli, ctx.start, "execute_command");
        result
    }

    fn execute_path(
        ctx: &CommandContext,
        from: &str,
        to: &str,
        max_distance: Option<f64>,
    ) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        let result = commands::path::execute(ctx.cli, &store, from, to, max_distance);
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }

    fn execute_graph(ctx: &CommandContext, command: &GraphCommands) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        let cli = ctx.cli;

        let result = match command {
            GraphCommands::Nodes => commands::graph::execute_nodes(cli, &store),
            GraphCommands::Edges => commands::graph::execute_edges(cli, &store),
            GraphCommands::Bfs { start } => {
                commands::graph::execute_traversal(cli, &store, start, commands::graph::Order::Bfs)
            }
            GraphCommands::Dfs { start } => {
                commands::graph::execute_traversal(cli, &store, start, commands::graph::Order::Dfs)
            }
        };

        trace_command!(cli, ctx.start, "execute_command");
        result
    }

    fn execute_export(ctx: &CommandContext, output: Option<&Path>) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        commands::export::execute(ctx.cli, &store, output)
    }

    fn execute_import(ctx: &CommandContext, file: &Path) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        commands::import::execute(ctx.cli, &store, file)
    }

    fn execute_status(ctx: &CommandContext) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        commands::status::execute(ctx.cli, &store)
    }
}
