use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, MoveArgs, RenameArgs};

/// Turn a working window into a time-blocked agenda
///
/// dayplan splits the hours between a start and an end time into equal work
/// slots, short breaks and an optional lunch. Generated schedules can be
/// written as JSON and fed back in to reorder or relabel blocks. Running
/// without a subcommand generates a schedule from your preferences.
#[derive(Parser)]
#[command(version, about, name = "dayplan")]
pub struct Args {
    /// Path to a preferences JSON file. Defaults to
    /// $XDG_CONFIG_HOME/dayplan/preferences.json when it exists
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the dayplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a schedule for a working window
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Move a block to another position and re-lay the schedule
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Change the label of a block
    #[command(alias = "r")]
    Rename(RenameArgs),
    /// Start the MCP server
    Serve,
}
