//! Data models for windows, requests, blocks and schedules.
//!
//! This module contains the core domain models of the dayplan system. Display
//! implementations for these models live in [`crate::display::models`] to keep
//! data structures separate from presentation.
//!
//! # Time Model
//!
//! All times are whole minutes ([`Minute`]) counted from midnight. A window
//! from 09:00 to 17:00 is `WindowSpec { start_minute: 540, end_minute: 1020 }`.
//! Intervals are half-open: a block covers `[start_minute, end_minute)`.
//!
//! # Examples
//!
//! ```rust
//! use dayplan_core::models::{BlockKind, PartitionRequest, WindowSpec};
//! use dayplan_core::partition;
//!
//! let window = WindowSpec::new(540, 1020);
//! let request = PartitionRequest::with_slot_count(8)
//!     .with_breaks(1, 10)
//!     .with_lunch(750, 60);
//!
//! let schedule = partition(&window, &request)?;
//! assert_eq!(schedule.count(BlockKind::Lunch), 1);
//! assert_eq!(schedule.count(BlockKind::Break), 1);
//! println!("{}", schedule); // Markdown table of time ranges and labels
//! # Ok::<(), dayplan_core::ScheduleError>(())
//! ```

pub mod block;
pub mod request;
pub mod schedule;
pub mod window;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use block::{BlockKind, TimeBlock};
pub use request::{LunchSpec, PartitionRequest};
pub use schedule::Schedule;
pub use window::{Minute, WindowSpec};
