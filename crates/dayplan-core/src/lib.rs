//! Core library for the dayplan day scheduler.
//!
//! This crate partitions a working window into labeled time blocks (slots,
//! breaks and an optional lunch) and lets callers reorder and relabel the
//! resulting agenda. Everything here is synchronous and free of I/O except
//! preference loading in [`config`].
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data, serializable with serde
//! - **Display** ([`display`]): markdown formatting for models and operation
//!   results
//! - **Terminal Rendering**: done by the CLI's renderer
//!
//! # Quick Start
//!
//! ```rust
//! use dayplan_core::{params::GenerateSchedule, partition, resequence};
//!
//! // 09:00-17:00, 8 slots, one 10 minute break, lunch 12:30 for an hour
//! let params = GenerateSchedule::default();
//! let (window, request) = params.validate()?;
//!
//! let schedule = partition(&window, &request)?;
//! assert_eq!(schedule.blocks.last().map(|b| b.end_minute), Some(window.end_minute));
//! println!("{}", schedule);
//!
//! // Drag the last block to the top of the agenda
//! let reordered = resequence(&schedule, schedule.len() - 1, 0, window.start_minute)?;
//! assert_eq!(reordered[0].label, "Slot 8");
//! # Ok::<(), dayplan_core::ScheduleError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod partitioner;
pub mod resequencer;
pub mod session;

// Re-export commonly used types
pub use config::{Preferences, PreferencesBuilder};
pub use display::{ClockTime, OperationStatus, ScheduleResult, ScheduleRow, TimeRange};
pub use error::{Result, ScheduleError};
pub use models::{
    BlockKind, LunchSpec, Minute, PartitionRequest, Schedule, TimeBlock, WindowSpec,
};
pub use params::{parse_clock_time, parse_window_end, GenerateSchedule, MoveBlock, RenameBlock};
pub use partitioner::partition;
pub use resequencer::resequence;
pub use session::Session;
