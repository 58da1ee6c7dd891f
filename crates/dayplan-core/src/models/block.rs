//! Time block model and block kinds.

use serde::{Deserialize, Serialize};

use super::Minute;

/// Type-safe enumeration of block kinds.
///
/// The kind drives break placement and remainder distribution during
/// partitioning; it has no effect on how a block can be reordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Working time allocated to one scheduled activity
    Slot,

    /// Short non-working block between slots
    Break,

    /// Longer break anchored near the preferred lunch time
    Lunch,
}

impl BlockKind {
    /// Lowercase name used in serialized schedules.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Slot => "slot",
            BlockKind::Break => "break",
            BlockKind::Lunch => "lunch",
        }
    }
}

/// One scheduled unit of a [`super::Schedule`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeBlock {
    /// Identifier, unique within its schedule
    pub id: u64,

    /// Display name ("Slot 3", "Break", "Lunch"), editable after generation
    pub label: String,

    /// Block start in minutes from midnight (inclusive)
    pub start_minute: Minute,

    /// Block end in minutes from midnight (exclusive)
    pub end_minute: Minute,

    /// What the block is used for
    pub kind: BlockKind,
}

impl TimeBlock {
    /// Creates a block covering `[start_minute, start_minute + length)`.
    pub fn new(
        id: u64,
        kind: BlockKind,
        label: impl Into<String>,
        start_minute: Minute,
        length: Minute,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            start_minute,
            end_minute: start_minute + length,
            kind,
        }
    }

    /// Length of the block in minutes.
    #[inline]
    pub fn duration(&self) -> Minute {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Moves the block to start at `start_minute`, keeping its duration.
    pub(crate) fn place_at(&mut self, start_minute: Minute) {
        let duration = self.duration();
        self.start_minute = start_minute;
        self.end_minute = start_minute + duration;
    }
}
