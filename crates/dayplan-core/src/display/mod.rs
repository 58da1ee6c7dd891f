//! Display formatting for schedules and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types add context such as what operation produced a schedule.
//! All output is markdown, rendered by the CLI for terminals and passed
//! through unchanged to MCP clients.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result Wrappers │    │   Formatted     │
//! │ (Schedule, ...) │───▶│ & Clock Times   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`datetime`]: `HH:MM` clock times and ranges
//! - [`models`]: Display implementations for domain models
//! - [`results`]: Operation result types (ScheduleResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//!
//! ## Usage Examples
//!
//! ```rust
//! use dayplan_core::display::{OperationStatus, TimeRange};
//!
//! assert_eq!(TimeRange::new(750, 810).to_string(), "12:30 – 13:30");
//!
//! let status = OperationStatus::success("Schedule cleared");
//! println!("{}", status);
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use datetime::{ClockTime, TimeRange};
pub use models::ScheduleRow;
pub use results::ScheduleResult;
pub use status::OperationStatus;
