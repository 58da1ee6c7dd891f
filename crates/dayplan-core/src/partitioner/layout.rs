//! Cursor-driven emission of blocks.

use log::{debug, warn};

use crate::{
    models::{BlockKind, LunchSpec, Minute, TimeBlock, WindowSpec},
    resequencer::relay,
};

/// Lays blocks end to end from the window start, splitting the slot that
/// straddles the lunch start.
pub(crate) struct Layout {
    cursor: Minute,
    blocks: Vec<TimeBlock>,
    next_id: u64,
    pending_lunch: Option<LunchSpec>,
}

impl Layout {
    pub(crate) fn new(start: Minute, lunch: Option<LunchSpec>) -> Self {
        Self {
            cursor: start,
            blocks: Vec::new(),
            next_id: 1,
            pending_lunch: lunch,
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn emit(&mut self, kind: BlockKind, label: impl Into<String>, length: Minute) {
        let id = self.take_id();
        let block = TimeBlock::new(id, kind, label, self.cursor, length);
        self.cursor = block.end_minute;
        self.blocks.push(block);
    }

    /// Emits slot number `number`. If lunch is still pending and its start
    /// falls strictly inside the slot, the slot is cut in two around lunch.
    pub(crate) fn slot(&mut self, number: usize, length: Minute) {
        let label = format!("Slot {number}");

        if let Some(lunch) = self.pending_lunch {
            let start = lunch.start_minute;
            if self.cursor < start && start < self.cursor + length {
                let before = start - self.cursor;
                debug!(
                    "splitting slot {number} at minute {start}: {before} + {} minutes",
                    length - before
                );
                self.emit(BlockKind::Slot, label.clone(), before);
                self.emit(BlockKind::Lunch, "Lunch", lunch.length);
                self.emit(BlockKind::Slot, label, length - before);
                self.pending_lunch = None;
                return;
            }
        }

        self.emit(BlockKind::Slot, label, length);
    }

    /// Emits `count` consecutive breaks.
    pub(crate) fn breaks(&mut self, count: u32, length: Minute) {
        for _ in 0..count {
            self.emit(BlockKind::Break, "Break", length);
        }
    }

    /// Places a lunch that no slot straddled, pins the schedule end to the
    /// window end and returns the blocks.
    pub(crate) fn finish(mut self, window: &WindowSpec) -> Vec<TimeBlock> {
        if let Some(lunch) = self.pending_lunch.take() {
            self.insert_midpoint_lunch(lunch);
        }
        self.settle_end(window.end_minute);
        self.blocks
    }

    /// Inserts lunch at the middle position of the built sequence. Blocks
    /// after it keep their order and duration and move back by the lunch
    /// length.
    fn insert_midpoint_lunch(&mut self, lunch: LunchSpec) {
        let index = self.blocks.len() / 2;
        let start = self
            .blocks
            .get(index)
            .map_or(self.cursor, |block| block.start_minute);

        debug!(
            "lunch at minute {} falls on a block boundary; inserting at position {index} (minute {start})",
            lunch.start_minute
        );

        let id = self.take_id();
        let block = TimeBlock::new(id, BlockKind::Lunch, "Lunch", start, lunch.length);
        let resume = block.end_minute;
        self.blocks.insert(index, block);
        self.cursor = relay(&mut self.blocks[index + 1..], resume);
    }

    /// Absorbs any drift between the last block and the window end into the
    /// last slot, shifting whatever follows it.
    fn settle_end(&mut self, window_end: Minute) {
        let Some(last_end) = self.blocks.last().map(|block| block.end_minute) else {
            return;
        };
        if last_end == window_end {
            return;
        }
        let Some(index) = self
            .blocks
            .iter()
            .rposition(|block| block.kind == BlockKind::Slot)
        else {
            return;
        };

        let slot = &mut self.blocks[index];
        let corrected =
            i64::from(slot.end_minute) + i64::from(window_end) - i64::from(last_end);
        if corrected <= i64::from(slot.start_minute) {
            warn!(
                "cannot stretch slot {} to close a drift of {} minutes",
                slot.id,
                i64::from(window_end) - i64::from(last_end)
            );
            return;
        }

        debug!(
            "correcting end of block {} from {} to {corrected}",
            slot.id, slot.end_minute
        );
        slot.end_minute = corrected as Minute;
        let resume = slot.end_minute;
        self.cursor = relay(&mut self.blocks[index + 1..], resume);
    }
}
