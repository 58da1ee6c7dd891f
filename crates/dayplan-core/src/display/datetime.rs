//! Clock time display utilities.
//!
//! Schedules count whole minutes from midnight. These wrappers render them as
//! 24-hour wall clock times through `jiff` formatting.

use std::fmt;

use jiff::civil;

use crate::models::Minute;

const MINUTES_PER_DAY: Minute = 24 * 60;

/// A minute-of-day rendered as `HH:MM`.
///
/// Values at or past 24:00 wrap around midnight the way a wall clock does,
/// so a schedule pushed past the end of the day still displays.
///
/// ```rust
/// use dayplan_core::display::ClockTime;
///
/// assert_eq!(ClockTime(540).to_string(), "09:00");
/// assert_eq!(ClockTime(24 * 60 + 5).to_string(), "00:05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime(pub Minute);

impl ClockTime {
    /// The wall clock time, wrapped into a single day.
    pub fn to_civil(self) -> civil::Time {
        let minute = self.0 % MINUTES_PER_DAY;
        // minute < 1440, so hour < 24 and minute-of-hour < 60
        civil::time((minute / 60) as i8, (minute % 60) as i8, 0, 0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_civil().strftime("%H:%M"))
    }
}

/// A half-open interval rendered as `HH:MM – HH:MM` (en dash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Minute,
    pub end: Minute,
}

impl TimeRange {
    pub fn new(start: Minute, end: Minute) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{2013} {}", ClockTime(self.start), ClockTime(self.end))
    }
}
