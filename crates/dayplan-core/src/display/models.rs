//! Display implementations for domain models.
//!
//! Models render as markdown so the CLI renderer and MCP clients can show
//! them without further formatting.

use std::fmt;

use serde::Serialize;

use super::datetime::TimeRange;
use crate::models::{BlockKind, Schedule, TimeBlock};

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TimeBlock {
    /// The block's interval as a displayable range.
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_minute, self.end_minute)
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.time_range(), self.label)
    }
}

/// One display row of a schedule: a formatted time range and a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub time_range: String,
    pub label: String,
}

impl From<&TimeBlock> for ScheduleRow {
    fn from(block: &TimeBlock) -> Self {
        Self {
            time_range: block.time_range().to_string(),
            label: block.label.clone(),
        }
    }
}

impl Schedule {
    /// Display rows in chronological order.
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.iter().map(ScheduleRow::from).collect()
    }
}

/// Pipes would end the markdown table cell early.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window = TimeRange::new(self.window.start_minute, self.window.end_minute);
        writeln!(f, "# Schedule {window}")?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "No blocks in this schedule.");
        }

        writeln!(
            f,
            "- Slots: {} ({} min)",
            self.count(BlockKind::Slot),
            self.minutes(BlockKind::Slot)
        )?;
        writeln!(
            f,
            "- Breaks: {} ({} min)",
            self.count(BlockKind::Break),
            self.minutes(BlockKind::Break)
        )?;
        if self.count(BlockKind::Lunch) > 0 {
            writeln!(f, "- Lunch: {} min", self.minutes(BlockKind::Lunch))?;
        }
        writeln!(f)?;

        writeln!(f, "| Pos | Time | Event | ID |")?;
        writeln!(f, "|----:|------|-------|---:|")?;
        for (position, block) in self.iter().enumerate() {
            writeln!(
                f,
                "| {position} | {} | {} | {} |",
                block.time_range(),
                escape_cell(&block.label),
                block.id
            )?;
        }

        Ok(())
    }
}
