use dayplan_core::{Minute, Schedule, WindowSpec};

/// 09:00 to 17:00
pub fn workday() -> WindowSpec {
    WindowSpec::new(9 * 60, 17 * 60)
}

/// Asserts the schedule tiles the window: no gaps, no overlaps, no spill.
pub fn assert_covers(schedule: &Schedule, window: &WindowSpec) {
    let first = schedule.blocks.first().expect("Schedule should not be empty");
    let last = schedule.blocks.last().expect("Schedule should not be empty");

    assert_eq!(first.start_minute, window.start_minute, "first block start");
    assert_eq!(last.end_minute, window.end_minute, "last block end");
    assert!(schedule.is_contiguous(), "blocks should touch: {schedule:?}");
    assert!(
        schedule.iter().all(|b| b.end_minute > b.start_minute),
        "every block should have a positive duration"
    );

    let covered: Minute = schedule.iter().map(|b| b.duration()).sum();
    assert_eq!(covered, window.total_minutes());
}

/// Sorted (label, duration) pairs, the multiset a reorder must preserve.
pub fn label_durations(schedule: &Schedule) -> Vec<(String, Minute)> {
    let mut pairs: Vec<_> = schedule
        .iter()
        .map(|b| (b.label.clone(), b.duration()))
        .collect();
    pairs.sort();
    pairs
}
