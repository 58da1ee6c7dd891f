//! Working window model.

use serde::{Deserialize, Serialize};

/// Whole minutes counted from midnight.
pub type Minute = u32;

/// The total time span being partitioned, `[start_minute, end_minute)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowSpec {
    /// Window start (inclusive)
    pub start_minute: Minute,
    /// Window end (exclusive)
    pub end_minute: Minute,
}

impl WindowSpec {
    /// Creates a new window.
    pub fn new(start_minute: Minute, end_minute: Minute) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Length of the window in minutes, zero for an empty or inverted window.
    #[inline]
    pub fn total_minutes(&self) -> Minute {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Whether the window spans at least one minute.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.end_minute > self.start_minute
    }
}
