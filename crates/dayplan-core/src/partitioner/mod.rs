//! Schedule generation: partitioning a working window into labeled blocks.
//!
//! [`partition`] is a pure function of its inputs. It never reads the clock
//! and holds no state, so the same window and request always produce the
//! same schedule.
//!
//! # Algorithm
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │    slots     │    │    breaks    │    │    layout    │
//! │ (available,  │───▶│ (groups and  │───▶│ (cursor walk,│
//! │  remainder)  │    │  cadence)    │    │  lunch split)│
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! 1. `available = window − lunch − break_count × break_length`; the missing
//!    one of slot count / slot length is derived by floor division.
//! 2. `available` is spread over the slots; the first `available % count`
//!    slots get one extra minute so nothing is lost to truncation.
//! 3. Breaks are split into a before-lunch and an after-lunch group
//!    (`floor(n / 2)` before) and placed every
//!    `ceil(slots_in_group / (breaks_in_group + 1))` slots within a group.
//! 4. Slots are walked from the window start. The slot whose interval
//!    contains the lunch start is split around a lunch block. If no slot
//!    straddles the lunch start, lunch is inserted at the midpoint of the
//!    sequence instead.
//! 5. The last slot absorbs any remaining difference to the window end.
//!
//! # Example
//!
//! ```rust
//! use dayplan_core::{models::{BlockKind, PartitionRequest, WindowSpec}, partition};
//!
//! // 09:00-17:00, one slot for the whole day, lunch at 12:30 for an hour
//! let window = WindowSpec::new(540, 1020);
//! let request = PartitionRequest::with_slot_count(1).with_lunch(750, 60);
//! let schedule = partition(&window, &request)?;
//!
//! let spans: Vec<_> = schedule.iter().map(|b| (b.start_minute, b.end_minute)).collect();
//! assert_eq!(spans, vec![(540, 750), (750, 810), (810, 1020)]);
//! assert_eq!(schedule[1].kind, BlockKind::Lunch);
//! # Ok::<(), dayplan_core::ScheduleError>(())
//! ```

use log::debug;

use crate::{
    error::Result,
    models::{PartitionRequest, Schedule, WindowSpec},
};

mod breaks;
mod layout;
mod slots;


use layout::Layout;

/// Partitions `window` into slots, breaks and lunch according to `request`.
///
/// # Errors
///
/// * `ScheduleError::InvalidRequest` - inverted window, neither or both of
///   `slot_count`/`slot_length` given, or either one zero
/// * `ScheduleError::OverconstrainedWindow` - breaks and lunch leave no
///   minutes for slots, or the derived slot count/length is zero
pub fn partition(window: &WindowSpec, request: &PartitionRequest) -> Result<Schedule> {
    let plan = slots::resolve(window, request)?;
    let lunch = request.effective_lunch();
    let break_length = request.break_length;
    let due = breaks::plan(
        &plan.lengths,
        window.start_minute,
        request.effective_break_count(),
        break_length,
        lunch.as_ref(),
    );

    let mut layout = Layout::new(window.start_minute, lunch);
    for (index, (&length, &breaks)) in plan.lengths.iter().zip(&due).enumerate() {
        layout.slot(index + 1, length);
        layout.breaks(breaks, break_length);
    }

    let blocks = layout.finish(window);
    debug!(
        "partitioned {}-{} into {} blocks ({} slot minutes)",
        window.start_minute,
        window.end_minute,
        blocks.len(),
        plan.available
    );

    Ok(Schedule::new(*window, blocks))
}
