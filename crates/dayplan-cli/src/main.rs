//! dayplan CLI Application
//!
//! Command-line interface for the dayplan day scheduler.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, GenerateArgs};
use dayplan_core::PreferencesBuilder;
use log::info;
use mcp::{run_stdio_server, DayplanMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        command,
    } = Args::parse();

    let preferences = PreferencesBuilder::new()
        .with_config_path(config)
        .load()
        .context("Failed to load preferences")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("dayplan started");

    match command {
        Some(Generate(args)) => Cli::new(preferences, renderer).generate(args),
        Some(Move(args)) => Cli::new(preferences, renderer).move_block(&args),
        Some(Rename(args)) => Cli::new(preferences, renderer).rename_block(&args),
        Some(Serve) => {
            info!("Starting dayplan MCP server");
            run_stdio_server(DayplanMcpServer::new(preferences))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(preferences, renderer).generate(GenerateArgs::default()),
    }
}
