//! Partition request model.

use serde::{Deserialize, Serialize};

use super::Minute;

/// Optional lunch interval anchored at a preferred start time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LunchSpec {
    /// Preferred lunch start, minutes from midnight
    pub start_minute: Minute,
    /// Lunch length in minutes
    pub length: Minute,
}

/// Partition constraints for one generation request.
///
/// Exactly one of `slot_count` and `slot_length` must be set; the partitioner
/// derives the other from the minutes left after breaks and lunch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartitionRequest {
    /// Number of working slots
    #[serde(default)]
    pub slot_count: Option<u32>,
    /// Length of each working slot in minutes
    #[serde(default)]
    pub slot_length: Option<Minute>,
    /// Number of breaks to insert
    #[serde(default)]
    pub break_count: u32,
    /// Length of each break in minutes
    #[serde(default)]
    pub break_length: Minute,
    /// Optional lunch interval
    #[serde(default)]
    pub lunch: Option<LunchSpec>,
}

impl PartitionRequest {
    /// Request a fixed number of slots; their length is derived.
    pub fn with_slot_count(slot_count: u32) -> Self {
        Self {
            slot_count: Some(slot_count),
            ..Self::default()
        }
    }

    /// Request slots of a fixed length; their number is derived.
    pub fn with_slot_length(slot_length: Minute) -> Self {
        Self {
            slot_length: Some(slot_length),
            ..Self::default()
        }
    }

    /// Sets the break count and length.
    pub fn with_breaks(mut self, break_count: u32, break_length: Minute) -> Self {
        self.break_count = break_count;
        self.break_length = break_length;
        self
    }

    /// Adds a lunch interval.
    pub fn with_lunch(mut self, start_minute: Minute, length: Minute) -> Self {
        self.lunch = Some(LunchSpec {
            start_minute,
            length,
        });
        self
    }

    /// Breaks that will actually be emitted; zero-length breaks are dropped.
    pub fn effective_break_count(&self) -> u32 {
        if self.break_length == 0 {
            0
        } else {
            self.break_count
        }
    }

    /// Lunch that will actually be emitted; a zero-length lunch is dropped.
    pub fn effective_lunch(&self) -> Option<LunchSpec> {
        self.lunch.filter(|lunch| lunch.length > 0)
    }
}
