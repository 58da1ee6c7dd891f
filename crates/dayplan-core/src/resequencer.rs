//! Reorder-resequencer for manually rearranged schedules.
//!
//! A move removes the block at the source position and reinserts it at the
//! destination position of the shortened list (drag-and-drop "move", not
//! "swap"). Afterwards every block is laid out again from the window start:
//! durations, labels, kinds and ids are kept, start and end times are
//! recomputed from a running cursor.

use log::debug;

use crate::{
    error::{Result, ScheduleError},
    models::{Minute, Schedule, TimeBlock, WindowSpec},
};

/// Returns a copy of `schedule` with the block at `source` moved to
/// `destination`, re-laid consecutively from `window_start`.
///
/// # Errors
///
/// Returns `ScheduleError::IndexOutOfRange` unless both indices are smaller
/// than the schedule length, and `ScheduleError::InvalidRequest` if the
/// blocks do not fit between `window_start` and the last representable
/// minute.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{models::{PartitionRequest, WindowSpec}, partition, resequence};
///
/// let window = WindowSpec::new(540, 720);
/// let schedule = partition(&window, &PartitionRequest::with_slot_count(3))?;
/// let moved = resequence(&schedule, 0, 2, window.start_minute)?;
///
/// assert_eq!(moved[2].label, "Slot 1");
/// assert_eq!(moved[0].start_minute, 540);
/// assert!(moved.is_contiguous());
/// # Ok::<(), dayplan_core::ScheduleError>(())
/// ```
pub fn resequence(
    schedule: &Schedule,
    source: usize,
    destination: usize,
    window_start: Minute,
) -> Result<Schedule> {
    let mut blocks = schedule.blocks.clone();
    let end = move_and_relay(&mut blocks, source, destination, window_start)?;
    Ok(Schedule::new(WindowSpec::new(window_start, end), blocks))
}

/// Splices one block to a new position and re-lays all blocks from `start`.
///
/// Returns the end of the last block. Indices and the total length are
/// checked before anything is mutated.
pub(crate) fn move_and_relay(
    blocks: &mut Vec<TimeBlock>,
    source: usize,
    destination: usize,
    start: Minute,
) -> Result<Minute> {
    let len = blocks.len();
    for index in [source, destination] {
        if index >= len {
            return Err(ScheduleError::IndexOutOfRange { index, len });
        }
    }

    if laid_out_end(blocks, start).is_none() {
        return Err(ScheduleError::invalid_request("blocks")
            .with_reason(format!("Blocks do not fit after minute {start}")));
    }

    let block = blocks.remove(source);
    debug!(
        "moving block {} ({}) from position {source} to {destination}",
        block.id, block.label
    );
    blocks.insert(destination, block);

    Ok(relay(blocks, start))
}

/// Where `blocks` end when laid end to end from `start`, or `None` if the
/// minute counter would overflow.
pub(crate) fn laid_out_end(blocks: &[TimeBlock], start: Minute) -> Option<Minute> {
    blocks
        .iter()
        .try_fold(start, |cursor, block| cursor.checked_add(block.duration()))
}

/// Lays blocks end to end starting at `start`, returning the final cursor.
pub(crate) fn relay(blocks: &mut [TimeBlock], start: Minute) -> Minute {
    blocks.iter_mut().fold(start, |cursor, block| {
        block.place_at(cursor);
        block.end_minute
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockKind;

    fn sample_schedule() -> Schedule {
        let blocks = vec![
            TimeBlock::new(1, BlockKind::Slot, "Slot 1", 540, 60),
            TimeBlock::new(2, BlockKind::Break, "Break", 600, 10),
            TimeBlock::new(3, BlockKind::Slot, "Slot 2", 610, 50),
            TimeBlock::new(4, BlockKind::Lunch, "Lunch", 660, 45),
        ];
        Schedule::new(WindowSpec::new(540, 705), blocks)
    }

    fn labels(schedule: &Schedule) -> Vec<&str> {
        schedule.iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn test_move_forward_uses_splice_semantics() {
        let moved = resequence(&sample_schedule(), 0, 2, 540).unwrap();
        assert_eq!(labels(&moved), ["Break", "Slot 2", "Slot 1", "Lunch"]);

        assert_eq!((moved[0].start_minute, moved[0].end_minute), (540, 550));
        assert_eq!((moved[1].start_minute, moved[1].end_minute), (550, 600));
        assert_eq!((moved[2].start_minute, moved[2].end_minute), (600, 660));
        assert_eq!((moved[3].start_minute, moved[3].end_minute), (660, 705));
    }

    #[test]
    fn test_move_backward() {
        let moved = resequence(&sample_schedule(), 3, 0, 540).unwrap();
        assert_eq!(labels(&moved), ["Lunch", "Slot 1", "Break", "Slot 2"]);
        assert_eq!(moved[0].end_minute, 585);
        assert_eq!(moved[3].end_minute, 705);
    }

    #[test]
    fn test_move_to_same_position_is_identity() {
        let schedule = sample_schedule();
        let moved = resequence(&schedule, 1, 1, 540).unwrap();
        assert_eq!(moved, schedule);
    }

    #[test]
    fn test_new_window_start_shifts_everything() {
        let moved = resequence(&sample_schedule(), 1, 1, 480).unwrap();
        assert_eq!(moved.window, WindowSpec::new(480, 645));
        assert_eq!(moved[0].start_minute, 480);
        assert!(moved.is_contiguous());
    }

    #[test]
    fn test_out_of_range_indices() {
        let schedule = sample_schedule();

        match resequence(&schedule, 4, 0, 540).unwrap_err() {
            ScheduleError::IndexOutOfRange { index, len } => {
                assert_eq!(index, 4);
                assert_eq!(len, 4);
            }
            other => panic!("Expected IndexOutOfRange, got {other:?}"),
        }

        assert!(matches!(
            resequence(&schedule, 0, 7, 540),
            Err(ScheduleError::IndexOutOfRange { index: 7, len: 4 })
        ));
    }

    #[test]
    fn test_failed_move_leaves_blocks_untouched() {
        let mut schedule = sample_schedule();
        let before = schedule.clone();
        assert!(schedule.move_block(0, 9).is_err());
        assert_eq!(schedule, before);
    }

    #[test]
    fn test_blocks_past_the_minute_counter_are_rejected() {
        let mut schedule = sample_schedule();
        let before = schedule.clone();

        assert!(matches!(
            resequence(&schedule, 0, 1, Minute::MAX - 100),
            Err(ScheduleError::InvalidRequest { ref field, .. }) if field == "blocks"
        ));

        schedule.window = WindowSpec::new(Minute::MAX - 100, Minute::MAX);
        let mut expected = before;
        expected.window = schedule.window;
        assert!(schedule.move_block(0, 1).is_err());
        assert_eq!(schedule, expected);
    }

    #[test]
    fn test_relay_closes_gaps() {
        let mut blocks = vec![
            TimeBlock::new(1, BlockKind::Slot, "A", 0, 30),
            TimeBlock::new(2, BlockKind::Slot, "B", 100, 15),
        ];
        let end = relay(&mut blocks, 10);
        assert_eq!(end, 55);
        assert_eq!(blocks[1].start_minute, 40);
    }
}
