//! Schedule model definition and related functionality.

use std::{collections::HashSet, ops::Index};

use serde::{Deserialize, Serialize};

use super::{BlockKind, Minute, TimeBlock, WindowSpec};
use crate::{
    error::{Result, ScheduleError},
    resequencer,
};

/// An ordered sequence of time blocks; insertion order is chronological
/// order.
///
/// Gaps between slots are always explicit `Break` or `Lunch` blocks, so a
/// freshly generated schedule covers its window without holes or overlaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    /// The window the schedule was laid out in
    pub window: WindowSpec,

    /// Blocks in chronological order
    pub blocks: Vec<TimeBlock>,
}

impl Schedule {
    /// Creates a schedule from already laid-out blocks.
    pub fn new(window: WindowSpec, blocks: Vec<TimeBlock>) -> Self {
        Self { window, blocks }
    }

    /// Parses a schedule from JSON and checks its structure.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Serialization` for malformed JSON and
    /// `ScheduleError::InvalidRequest` when the blocks fail [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let schedule: Schedule = serde_json::from_str(json)?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Serializes the schedule as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the invariants a reorder or label edit relies on: unique block
    /// ids, a positive duration for every block, and room on the minute
    /// counter to lay all blocks end to end from the window start.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for block in &self.blocks {
            if !seen.insert(block.id) {
                return Err(ScheduleError::invalid_request("blocks")
                    .with_reason(format!("Duplicate block ID: {}", block.id)));
            }
            if block.end_minute <= block.start_minute {
                return Err(ScheduleError::invalid_request("blocks").with_reason(format!(
                    "Block {} must end after it starts",
                    block.id
                )));
            }
        }

        if resequencer::laid_out_end(&self.blocks, self.window.start_minute).is_none() {
            return Err(ScheduleError::invalid_request("blocks").with_reason(format!(
                "Blocks starting at minute {} run past the last representable minute",
                self.window.start_minute
            )));
        }
        Ok(())
    }

    /// Check if the schedule has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks in the schedule.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Get a reference to the block at the given position.
    pub fn get(&self, index: usize) -> Option<&TimeBlock> {
        self.blocks.get(index)
    }

    /// Get an iterator over the blocks in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeBlock> {
        self.blocks.iter()
    }

    /// Looks a block up by its ID.
    pub fn block(&self, id: u64) -> Option<&TimeBlock> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Number of blocks of the given kind.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|block| block.kind == kind).count()
    }

    /// Total minutes covered by blocks of the given kind.
    pub fn minutes(&self, kind: BlockKind) -> Minute {
        self.blocks
            .iter()
            .filter(|block| block.kind == kind)
            .map(TimeBlock::duration)
            .fold(0, Minute::saturating_add)
    }

    /// Whether every block ends exactly where the next one starts.
    pub fn is_contiguous(&self) -> bool {
        self.blocks
            .windows(2)
            .all(|pair| pair[0].end_minute == pair[1].start_minute)
    }

    /// Replaces the label of one block. Timing is never touched.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::BlockNotFound` if no block has the given ID.
    pub fn rename_block(&mut self, id: u64, label: impl Into<String>) -> Result<&TimeBlock> {
        let block = self
            .blocks
            .iter_mut()
            .find(|block| block.id == id)
            .ok_or(ScheduleError::BlockNotFound { id })?;
        block.label = label.into();
        Ok(block)
    }

    /// Moves the block at `source` to `destination` and re-lays every block
    /// from the window start.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::IndexOutOfRange` if either index is outside the
    /// schedule; the schedule is left unchanged in that case.
    pub fn move_block(&mut self, source: usize, destination: usize) -> Result<()> {
        let start = self.window.start_minute;
        let end = resequencer::move_and_relay(&mut self.blocks, source, destination, start)?;
        self.window = WindowSpec::new(start, end);
        Ok(())
    }
}

impl Index<usize> for Schedule {
    type Output = TimeBlock;

    fn index(&self, index: usize) -> &Self::Output {
        &self.blocks[index]
    }
}

impl IntoIterator for Schedule {
    type Item = TimeBlock;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a TimeBlock;
    type IntoIter = std::slice::Iter<'a, TimeBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
