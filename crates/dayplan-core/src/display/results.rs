//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Schedule, TimeBlock};

/// A schedule together with a headline describing how it came about.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{display::ScheduleResult, models::{PartitionRequest, WindowSpec}, partition};
///
/// let schedule = partition(&WindowSpec::new(540, 600), &PartitionRequest::with_slot_count(2))?;
/// let output = ScheduleResult::generated(&schedule).to_string();
/// assert!(output.starts_with("Generated 2 blocks"));
/// # Ok::<(), dayplan_core::ScheduleError>(())
/// ```
pub struct ScheduleResult<'a> {
    pub headline: String,
    pub schedule: &'a Schedule,
}

impl<'a> ScheduleResult<'a> {
    /// Wrap a schedule with a custom headline.
    pub fn new(headline: impl Into<String>, schedule: &'a Schedule) -> Self {
        Self {
            headline: headline.into(),
            schedule,
        }
    }

    /// Headline for a freshly partitioned schedule.
    pub fn generated(schedule: &'a Schedule) -> Self {
        Self::new(format!("Generated {} blocks", schedule.len()), schedule)
    }

    /// Headline for a reorder.
    pub fn moved(schedule: &'a Schedule, source: usize, destination: usize) -> Self {
        Self::new(
            format!("Moved block from position {source} to {destination}"),
            schedule,
        )
    }

    /// Headline for a label edit.
    pub fn renamed(schedule: &'a Schedule, block: &TimeBlock) -> Self {
        Self::new(
            format!("Renamed block {} to '{}'", block.id, block.label),
            schedule,
        )
    }
}

impl fmt::Display for ScheduleResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        writeln!(f)?;
        write!(f, "{}", self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockKind, WindowSpec};

    #[test]
    fn test_renamed_headline() {
        let block = TimeBlock::new(3, BlockKind::Slot, "Standup", 540, 15);
        let schedule = Schedule::new(WindowSpec::new(540, 555), vec![block.clone()]);
        let output = ScheduleResult::renamed(&schedule, &block).to_string();
        assert!(output.starts_with("Renamed block 3 to 'Standup'\n\n# Schedule"));
    }

    #[test]
    fn test_moved_headline() {
        let schedule = Schedule::new(WindowSpec::new(0, 0), Vec::new());
        let output = ScheduleResult::moved(&schedule, 4, 1).to_string();
        assert!(output.starts_with("Moved block from position 4 to 1"));
    }
}
