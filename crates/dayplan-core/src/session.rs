//! In-memory editing session.
//!
//! A [`Session`] owns the current schedule of an interactive front end. Every
//! operation computes its result before touching the stored schedule, so a
//! failed generate, move or rename leaves the previous schedule in place.
//! Nothing is written to disk.

use log::{debug, info};

use crate::{
    error::{Result, ScheduleError},
    models::{Schedule, TimeBlock},
    params::{GenerateSchedule, MoveBlock, RenameBlock},
    partitioner::partition,
    resequencer::resequence,
};

/// Holds at most one schedule and applies edits to it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    schedule: Option<Schedule>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current schedule, if one was generated.
    pub fn current(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Partitions a new schedule and replaces the current one with it.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidRequest` or
    /// `ScheduleError::OverconstrainedWindow`; the current schedule is kept.
    pub fn generate(&mut self, params: &GenerateSchedule) -> Result<&Schedule> {
        let (window, request) = params.validate()?;
        let schedule = partition(&window, &request)?;
        info!("generated schedule with {} blocks", schedule.len());
        Ok(self.schedule.insert(schedule))
    }

    /// Moves one block of the current schedule and re-lays the agenda.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::NoSchedule` before the first generate and
    /// `ScheduleError::IndexOutOfRange` for bad positions.
    pub fn move_block(&mut self, params: &MoveBlock) -> Result<&Schedule> {
        let current = self.schedule.as_ref().ok_or(ScheduleError::NoSchedule)?;
        let moved = resequence(
            current,
            params.source,
            params.destination,
            current.window.start_minute,
        )?;
        Ok(self.schedule.insert(moved))
    }

    /// Relabels one block of the current schedule.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::NoSchedule` before the first generate,
    /// `ScheduleError::InvalidRequest` for a blank label and
    /// `ScheduleError::BlockNotFound` for an unknown ID.
    pub fn rename_block(&mut self, params: &RenameBlock) -> Result<&TimeBlock> {
        let label = params.validate()?;
        let schedule = self.schedule.as_mut().ok_or(ScheduleError::NoSchedule)?;
        let block = schedule.rename_block(params.id, label)?;
        debug!("renamed block {} to '{}'", block.id, block.label);
        Ok(block)
    }

    /// Drops the current schedule, returning it.
    pub fn clear(&mut self) -> Option<Schedule> {
        self.schedule.take()
    }
}
