//! Break placement: lunch-delimited groups and the per-group cadence.

use log::debug;

use crate::models::{LunchSpec, Minute};

/// A run of consecutive slots sharing one break allotment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BreakGroup {
    /// Index of the first slot in the group
    pub first: usize,
    /// Number of slots in the group
    pub len: usize,
    /// Breaks to place within the group
    pub breaks: u32,
    /// Whether the group's last slot is the last slot of the window
    pub closes_window: bool,
}

impl BreakGroup {
    /// Slot boundaries between breaks: `ceil(len / (breaks + 1))`.
    fn interval(&self) -> usize {
        self.len.div_ceil(self.breaks as usize + 1).max(1)
    }

    /// Latest group-local boundary a break may follow. A group that closes
    /// the window keeps its final boundary free when it has room to.
    fn last_boundary(&self) -> usize {
        if self.closes_window && self.len > 1 {
            self.len - 1
        } else {
            self.len
        }
    }

    /// Adds this group's breaks to `due`, indexed by the slot they follow.
    fn place(&self, due: &mut [u32]) {
        let interval = self.interval();
        let last = self.last_boundary();
        for nth in 1..=self.breaks as usize {
            let boundary = (nth * interval).min(last);
            due[self.first + boundary - 1] += 1;
        }
    }
}

/// Computes how many breaks follow each slot.
///
/// With lunch, `floor(break_count / 2)` breaks go to the slots that finish
/// before lunch and the rest to the slots after it. When either side would
/// have no slots, all breaks share a single group spanning every slot.
pub(crate) fn plan(
    lengths: &[Minute],
    window_start: Minute,
    break_count: u32,
    break_length: Minute,
    lunch: Option<&LunchSpec>,
) -> Vec<u32> {
    let mut due = vec![0; lengths.len()];
    if break_count == 0 || lengths.is_empty() {
        return due;
    }

    for group in groups(lengths, window_start, break_count, break_length, lunch) {
        debug!(
            "break group: slots {}..{} with {} breaks",
            group.first,
            group.first + group.len,
            group.breaks
        );
        group.place(&mut due);
    }

    due
}

fn groups(
    lengths: &[Minute],
    window_start: Minute,
    break_count: u32,
    break_length: Minute,
    lunch: Option<&LunchSpec>,
) -> Vec<BreakGroup> {
    let total = lengths.len();
    let whole = BreakGroup {
        first: 0,
        len: total,
        breaks: break_count,
        closes_window: true,
    };

    let Some(lunch) = lunch else {
        return vec![whole];
    };

    let before = break_count / 2;
    let offset = window_start + before * break_length;
    let split = slots_before(lengths, offset, lunch.start_minute);

    if split == 0 || split == total {
        return vec![whole];
    }

    vec![
        BreakGroup {
            first: 0,
            len: split,
            breaks: before,
            closes_window: false,
        },
        BreakGroup {
            first: split,
            len: total - split,
            breaks: break_count - before,
            closes_window: true,
        },
    ]
}

/// Number of leading slots that end at or before `lunch_start` when laid out
/// from `offset`.
fn slots_before(lengths: &[Minute], offset: Minute, lunch_start: Minute) -> usize {
    let mut cursor = offset;
    lengths
        .iter()
        .take_while(|&&length| {
            cursor += length;
            cursor <= lunch_start
        })
        .count()
}
