//! Command-line argument wrappers and command handlers
//!
//! The argument structs here are the CLI side of the parameter wrapper
//! pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Clap-specific attributes (flags, help text, conflicts) stay in this layer;
//! the core only ever sees `dayplan_core::params` types.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Args;
use dayplan_core::{
    display::ScheduleResult,
    params::{GenerateSchedule, MoveBlock, RenameBlock},
    partition, Preferences, Schedule,
};
use log::{debug, info};

use crate::renderer::TerminalRenderer;

/// Generate a schedule for a working window
///
/// Every flag overrides the matching preference; anything left out comes
/// from the preferences file or the built-in defaults (09:00-17:00, 8
/// slots, one 10 minute break, lunch at 12:30 for 60 minutes).
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    #[arg(long, value_name = "HH:MM", help = "Start of the working window")]
    pub start: Option<String>,
    #[arg(long, value_name = "HH:MM", help = "End of the working window (24:00 for midnight)")]
    pub end: Option<String>,
    #[arg(
        long,
        conflicts_with = "slot_length",
        help = "Number of work slots; their length is derived"
    )]
    pub slots: Option<u32>,
    #[arg(
        long,
        value_name = "MINUTES",
        help = "Length of each work slot; the number of slots is derived"
    )]
    pub slot_length: Option<u32>,
    #[arg(long, help = "Number of breaks")]
    pub breaks: Option<u32>,
    #[arg(long, value_name = "MINUTES", help = "Length of each break")]
    pub break_length: Option<u32>,
    #[arg(long, value_name = "HH:MM", help = "Preferred lunch start")]
    pub lunch_start: Option<String>,
    #[arg(long, value_name = "MINUTES", help = "Length of the lunch break")]
    pub lunch_length: Option<u32>,
    #[arg(
        long,
        conflicts_with_all = ["lunch_start", "lunch_length"],
        help = "Do not schedule a lunch break"
    )]
    pub no_lunch: bool,
    #[arg(long, help = "Print the schedule as JSON instead of a table")]
    pub json: bool,
}

impl GenerateArgs {
    /// Overlays the given flags on `defaults`.
    ///
    /// Giving either slot quantity replaces both preference values, so a
    /// `--slot-length` on the command line wins over a configured slot count.
    /// A lunch flag turns lunch on even when the preferences disable it.
    pub fn into_params(self, defaults: &GenerateSchedule) -> GenerateSchedule {
        let (slot_count, slot_length) = if self.slots.is_some() || self.slot_length.is_some() {
            (self.slots, self.slot_length)
        } else {
            (defaults.slot_count, defaults.slot_length)
        };

        let lunch_enabled = !self.no_lunch
            && (defaults.lunch_enabled
                || self.lunch_start.is_some()
                || self.lunch_length.is_some());

        GenerateSchedule {
            start: self.start.unwrap_or_else(|| defaults.start.clone()),
            end: self.end.unwrap_or_else(|| defaults.end.clone()),
            slot_count,
            slot_length,
            break_count: self.breaks.unwrap_or(defaults.break_count),
            break_length: self.break_length.unwrap_or(defaults.break_length),
            lunch_enabled,
            lunch_start: self
                .lunch_start
                .unwrap_or_else(|| defaults.lunch_start.clone()),
            lunch_length: self.lunch_length.unwrap_or(defaults.lunch_length),
        }
    }
}

/// Move a block to another position
///
/// The block is taken out at SOURCE and reinserted at DESTINATION of the
/// remaining list (both 0-indexed, as shown in the Pos column). All blocks
/// are then laid out again from the window start, keeping their durations.
#[derive(Args, Debug)]
pub struct MoveArgs {
    #[arg(help = "Current position of the block")]
    pub source: usize,
    #[arg(help = "Position the block should end up at")]
    pub destination: usize,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Schedule JSON to edit, or '-' to read from stdin"
    )]
    pub schedule: PathBuf,
    #[arg(long, help = "Print the schedule as JSON instead of a table")]
    pub json: bool,
}

impl From<&MoveArgs> for MoveBlock {
    fn from(val: &MoveArgs) -> Self {
        MoveBlock {
            source: val.source,
            destination: val.destination,
        }
    }
}

/// Change the label of a block
///
/// Only the label changes; the block keeps its position and times.
#[derive(Args, Debug)]
pub struct RenameArgs {
    #[arg(help = "ID of the block to relabel (the ID column)")]
    pub id: u64,
    #[arg(help = "New label")]
    pub label: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Schedule JSON to edit, or '-' to read from stdin"
    )]
    pub schedule: PathBuf,
    #[arg(long, help = "Print the schedule as JSON instead of a table")]
    pub json: bool,
}

impl From<&RenameArgs> for RenameBlock {
    fn from(val: &RenameArgs) -> Self {
        RenameBlock {
            id: val.id,
            label: val.label.clone(),
        }
    }
}

/// Runs CLI commands against the loaded preferences.
pub struct Cli {
    preferences: Preferences,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(preferences: Preferences, renderer: TerminalRenderer) -> Self {
        Self {
            preferences,
            renderer,
        }
    }

    pub fn generate(&self, args: GenerateArgs) -> Result<()> {
        let json = args.json;
        let params = args.into_params(&self.preferences.defaults);
        debug!("generate: {params:?}");

        let (window, request) = params.validate().context("Invalid schedule parameters")?;
        let schedule = partition(&window, &request).context("Failed to generate schedule")?;
        info!("generated {} blocks", schedule.len());

        self.output(&ScheduleResult::generated(&schedule), json)
    }

    pub fn move_block(&self, args: &MoveArgs) -> Result<()> {
        let params = MoveBlock::from(args);
        let mut schedule = read_schedule(&args.schedule)?;

        schedule
            .move_block(params.source, params.destination)
            .context("Failed to move block")?;

        self.output(
            &ScheduleResult::moved(&schedule, params.source, params.destination),
            args.json,
        )
    }

    pub fn rename_block(&self, args: &RenameArgs) -> Result<()> {
        let params = RenameBlock::from(args);
        let label = params.validate().context("Invalid label")?;
        let mut schedule = read_schedule(&args.schedule)?;

        let block = schedule
            .rename_block(params.id, label)
            .context("Failed to rename block")?
            .clone();

        self.output(&ScheduleResult::renamed(&schedule, &block), args.json)
    }

    fn output(&self, result: &ScheduleResult<'_>, json: bool) -> Result<()> {
        if json {
            let text = result
                .schedule
                .to_json_pretty()
                .context("Failed to serialize schedule")?;
            println!("{text}");
            Ok(())
        } else {
            self.renderer.render(&result.to_string())
        }
    }
}

/// Reads a schedule from a file, or from stdin when the path is `-`.
fn read_schedule(path: &Path) -> Result<Schedule> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read schedule from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read schedule file {}", path.display()))?
    };

    Schedule::from_json(&text).context("Invalid schedule JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = GenerateArgs {
            start: Some("08:00".to_string()),
            breaks: Some(3),
            ..GenerateArgs::default()
        };
        let params = args.into_params(&GenerateSchedule::default());
        assert_eq!(params.start, "08:00");
        assert_eq!(params.end, "17:00");
        assert_eq!(params.break_count, 3);
        assert_eq!(params.slot_count, Some(8));
        assert!(params.lunch_enabled);
    }

    #[test]
    fn test_slot_length_replaces_configured_count() {
        let args = GenerateArgs {
            slot_length: Some(45),
            ..GenerateArgs::default()
        };
        let params = args.into_params(&GenerateSchedule::default());
        assert_eq!(params.slot_count, None);
        assert_eq!(params.slot_length, Some(45));
    }

    #[test]
    fn test_lunch_flags() {
        let no_lunch = GenerateArgs {
            no_lunch: true,
            ..GenerateArgs::default()
        };
        assert!(!no_lunch.into_params(&GenerateSchedule::default()).lunch_enabled);

        let defaults = GenerateSchedule {
            lunch_enabled: false,
            ..GenerateSchedule::default()
        };
        let lunch_start = GenerateArgs {
            lunch_start: Some("12:00".to_string()),
            ..GenerateArgs::default()
        };
        let params = lunch_start.into_params(&defaults);
        assert!(params.lunch_enabled);
        assert_eq!(params.lunch_start, "12:00");
    }
}
