//! Parameter structures for dayplan operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives.
//! Times are `HH:MM` strings here; [`GenerateSchedule::validate`] turns them
//! into the minute-based [`WindowSpec`] and [`PartitionRequest`] the
//! partitioner works with.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these structs with their own derives
//! (`clap::Args`, `schemars::JsonSchema`) and convert into them with
//! `.into()`. JSON schema generation is only compiled in with the `schema`
//! feature.

use jiff::civil;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ScheduleError},
    models::{Minute, PartitionRequest, WindowSpec},
};

/// Parses an `HH:MM` (24-hour) string into minutes since midnight.
///
/// # Errors
///
/// Returns `ScheduleError::InvalidRequest` naming `field` when the input is
/// not a valid time of day.
///
/// ```rust
/// use dayplan_core::params::parse_clock_time;
///
/// assert_eq!(parse_clock_time("start", "09:30")?, 570);
/// assert!(parse_clock_time("start", "25:00").is_err());
/// # Ok::<(), dayplan_core::ScheduleError>(())
/// ```
pub fn parse_clock_time(field: &str, input: &str) -> Result<Minute> {
    let time = civil::Time::strptime("%H:%M", input.trim()).map_err(|e| {
        ScheduleError::invalid_request(field)
            .with_reason(format!("'{input}' is not a valid HH:MM time: {e}"))
    })?;
    Ok(Minute::from(time.hour().unsigned_abs()) * 60 + Minute::from(time.minute().unsigned_abs()))
}

/// Minute count of `24:00`, the only time past 23:59 a window may end on.
pub const MIDNIGHT: Minute = 24 * 60;

/// Parses a window end, which unlike other clock times may be `24:00`.
///
/// # Errors
///
/// Returns `ScheduleError::InvalidRequest` on field `end` for anything that
/// is neither `24:00` nor a valid time of day.
pub fn parse_window_end(input: &str) -> Result<Minute> {
    if input.trim() == "24:00" {
        return Ok(MIDNIGHT);
    }
    parse_clock_time("end", input)
}

fn default_start() -> String {
    "09:00".to_string()
}

fn default_end() -> String {
    "17:00".to_string()
}

fn default_break_count() -> u32 {
    1
}

fn default_break_length() -> Minute {
    10
}

fn default_lunch_enabled() -> bool {
    true
}

fn default_lunch_start() -> String {
    "12:30".to_string()
}

fn default_lunch_length() -> Minute {
    60
}

/// Default number of slots when neither slot quantity is configured.
pub const DEFAULT_SLOT_COUNT: u32 = 8;

/// Parameters for generating a schedule.
///
/// The one request value assembled from user input. Exactly one of
/// `slot_count` and `slot_length` should be set. [`Default`] gives a
/// complete request (09:00-17:00, 8 slots, one 10 minute break, lunch at
/// 12:30 for an hour); when deserializing, omitted fields take the same
/// values except the slot quantities, which stay unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateSchedule {
    /// Window start as HH:MM (default 09:00)
    #[serde(default = "default_start")]
    pub start: String,
    /// Window end as HH:MM or 24:00 (default 17:00)
    #[serde(default = "default_end")]
    pub end: String,
    /// Number of working slots; the slot length is derived
    #[serde(default)]
    pub slot_count: Option<u32>,
    /// Length of each working slot in minutes; the slot count is derived
    #[serde(default)]
    pub slot_length: Option<Minute>,
    /// Number of breaks (default 1)
    #[serde(default = "default_break_count")]
    pub break_count: u32,
    /// Length of each break in minutes (default 10)
    #[serde(default = "default_break_length")]
    pub break_length: Minute,
    /// Whether to schedule a lunch (default true)
    #[serde(default = "default_lunch_enabled")]
    pub lunch_enabled: bool,
    /// Preferred lunch start as HH:MM (default 12:30)
    #[serde(default = "default_lunch_start")]
    pub lunch_start: String,
    /// Lunch length in minutes (default 60)
    #[serde(default = "default_lunch_length")]
    pub lunch_length: Minute,
}

impl Default for GenerateSchedule {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            slot_count: Some(DEFAULT_SLOT_COUNT),
            slot_length: None,
            break_count: default_break_count(),
            break_length: default_break_length(),
            lunch_enabled: default_lunch_enabled(),
            lunch_start: default_lunch_start(),
            lunch_length: default_lunch_length(),
        }
    }
}

impl GenerateSchedule {
    /// Converts clock times to minutes and builds the partition inputs.
    ///
    /// Only the time strings are checked here; the partitioner validates the
    /// combination of values.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidRequest` if `start`, `end` or (with
    /// lunch enabled) `lunch_start` is not a valid HH:MM time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dayplan_core::params::GenerateSchedule;
    ///
    /// let params = GenerateSchedule {
    ///     lunch_enabled: false,
    ///     ..GenerateSchedule::default()
    /// };
    /// let (window, request) = params.validate()?;
    /// assert_eq!((window.start_minute, window.end_minute), (540, 1020));
    /// assert_eq!(request.slot_count, Some(8));
    /// assert!(request.lunch.is_none());
    /// # Ok::<(), dayplan_core::ScheduleError>(())
    /// ```
    pub fn validate(&self) -> Result<(WindowSpec, PartitionRequest)> {
        let window = WindowSpec::new(
            parse_clock_time("start", &self.start)?,
            parse_window_end(&self.end)?,
        );

        let mut request = PartitionRequest {
            slot_count: self.slot_count,
            slot_length: self.slot_length,
            ..PartitionRequest::default()
        }
        .with_breaks(self.break_count, self.break_length);

        if self.lunch_enabled {
            let lunch_start = parse_clock_time("lunch_start", &self.lunch_start)?;
            request = request.with_lunch(lunch_start, self.lunch_length);
        }

        Ok((window, request))
    }

    /// Fills in the default slot count when neither slot quantity is set.
    pub fn or_default_slots(mut self) -> Self {
        if self.slot_count.is_none() && self.slot_length.is_none() {
            self.slot_count = Some(DEFAULT_SLOT_COUNT);
        }
        self
    }
}

/// Parameters for moving a block to a new position.
///
/// The block is removed from `source` and reinserted at `destination` of the
/// shortened list; both are 0-indexed positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MoveBlock {
    /// Current position of the block (0-indexed)
    pub source: usize,
    /// Position the block should end up at (0-indexed)
    pub destination: usize,
}

/// Parameters for relabeling a block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RenameBlock {
    /// ID of the block to relabel
    pub id: u64,
    /// New label
    pub label: String,
}

impl RenameBlock {
    /// Returns the trimmed label.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidRequest` if the label is blank.
    pub fn validate(&self) -> Result<&str> {
        let label = self.label.trim();
        if label.is_empty() {
            return Err(ScheduleError::invalid_request("label").with_reason("must not be empty"));
        }
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("start", "00:00").unwrap(), 0);
        assert_eq!(parse_clock_time("start", "12:30").unwrap(), 750);
        assert_eq!(parse_clock_time("start", " 23:59 ").unwrap(), 1439);
    }

    #[test]
    fn test_parse_clock_time_rejects_garbage() {
        for input in ["", "noon", "24:00", "12:60", "12"] {
            match parse_clock_time("lunch_start", input) {
                Err(ScheduleError::InvalidRequest { field, .. }) => {
                    assert_eq!(field, "lunch_start", "input {input:?}");
                }
                other => panic!("Expected InvalidRequest for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_window_may_end_at_midnight() {
        assert_eq!(parse_window_end("24:00").unwrap(), MIDNIGHT);
        assert_eq!(parse_window_end("17:00").unwrap(), 1020);
        assert!(matches!(
            parse_window_end("24:01"),
            Err(ScheduleError::InvalidRequest { ref field, .. }) if field == "end"
        ));

        let params = GenerateSchedule {
            start: "18:00".to_string(),
            end: "24:00".to_string(),
            lunch_enabled: false,
            ..GenerateSchedule::default()
        };
        let (window, _) = params.validate().unwrap();
        assert_eq!(window, WindowSpec::new(1080, 1440));

        let start_at_midnight = GenerateSchedule {
            start: "24:00".to_string(),
            ..GenerateSchedule::default()
        };
        assert!(start_at_midnight.validate().is_err());
    }

    #[test]
    fn test_default_request() {
        let (window, request) = GenerateSchedule::default().validate().unwrap();
        assert_eq!(window, WindowSpec::new(540, 1020));
        assert_eq!(
            request,
            PartitionRequest::with_slot_count(8)
                .with_breaks(1, 10)
                .with_lunch(750, 60)
        );
    }

    #[test]
    fn test_deserialize_fills_defaults_but_not_slots() {
        let params: GenerateSchedule = serde_json::from_str(r#"{"slot_length": 45}"#).unwrap();
        assert_eq!(params.start, "09:00");
        assert_eq!(params.lunch_length, 60);
        assert_eq!(params.slot_count, None);
        assert_eq!(params.slot_length, Some(45));

        let empty: GenerateSchedule = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.slot_count, None);
        assert_eq!(empty.or_default_slots().slot_count, Some(DEFAULT_SLOT_COUNT));
    }

    #[test]
    fn test_disabled_lunch_skips_lunch_start() {
        let params = GenerateSchedule {
            lunch_enabled: false,
            lunch_start: "whenever".to_string(),
            ..GenerateSchedule::default()
        };
        let (_, request) = params.validate().unwrap();
        assert_eq!(request.lunch, None);
    }

    #[test]
    fn test_invalid_end_names_field() {
        let params = GenerateSchedule {
            end: "5pm".to_string(),
            ..GenerateSchedule::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("'end'"));
    }

    #[test]
    fn test_rename_block_validate() {
        let params = RenameBlock {
            id: 1,
            label: "  Deep work ".to_string(),
        };
        assert_eq!(params.validate().unwrap(), "Deep work");

        let blank = RenameBlock {
            id: 1,
            label: "   ".to_string(),
        };
        assert!(matches!(
            blank.validate(),
            Err(ScheduleError::InvalidRequest { .. })
        ));
    }
}
