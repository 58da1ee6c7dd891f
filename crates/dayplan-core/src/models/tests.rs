//! Unit tests for model types.

use super::*;
use crate::error::ScheduleError;

fn sample_schedule() -> Schedule {
    Schedule::new(
        WindowSpec::new(540, 660),
        vec![
            TimeBlock::new(1, BlockKind::Slot, "Slot 1", 540, 50),
            TimeBlock::new(2, BlockKind::Break, "Break", 590, 10),
            TimeBlock::new(3, BlockKind::Slot, "Slot 2", 600, 60),
        ],
    )
}

#[test]
fn test_block_kind_serializes_lowercase() {
    let json = serde_json::to_string(&BlockKind::Lunch).unwrap();
    assert_eq!(json, "\"lunch\"");
}

#[test]
fn test_time_block_duration() {
    let block = TimeBlock::new(1, BlockKind::Slot, "Focus", 600, 45);
    assert_eq!(block.end_minute, 645);
    assert_eq!(block.duration(), 45);
}

#[test]
fn test_window_spec() {
    let window = WindowSpec::new(540, 1020);
    assert_eq!(window.total_minutes(), 480);
    assert!(window.is_valid());

    let inverted = WindowSpec::new(600, 540);
    assert_eq!(inverted.total_minutes(), 0);
    assert!(!inverted.is_valid());
}

#[test]
fn test_partition_request_builders() {
    let request = PartitionRequest::with_slot_length(30)
        .with_breaks(2, 0)
        .with_lunch(720, 0);
    assert_eq!(request.slot_count, None);
    assert_eq!(request.slot_length, Some(30));
    assert_eq!(request.effective_break_count(), 0);
    assert_eq!(request.effective_lunch(), None);
}

#[test]
fn test_rename_block_changes_only_label() {
    let mut schedule = sample_schedule();
    let before = schedule.clone();

    let renamed = schedule.rename_block(3, "Design review").unwrap();
    assert_eq!(renamed.label, "Design review");

    assert_eq!(schedule[2].start_minute, before[2].start_minute);
    assert_eq!(schedule[2].end_minute, before[2].end_minute);
    assert_eq!(schedule[0], before[0]);
    assert_eq!(schedule[1], before[1]);
}

#[test]
fn test_rename_unknown_block() {
    let mut schedule = sample_schedule();
    match schedule.rename_block(42, "Ghost").unwrap_err() {
        ScheduleError::BlockNotFound { id } => assert_eq!(id, 42),
        other => panic!("Expected BlockNotFound, got {other:?}"),
    }
}

#[test]
fn test_move_block_in_place() {
    let mut schedule = sample_schedule();
    schedule.move_block(2, 0).unwrap();

    let labels: Vec<&str> = schedule.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Slot 2", "Slot 1", "Break"]);
    assert_eq!(schedule[0].start_minute, 540);
    assert_eq!(schedule[2].end_minute, 660);
    assert_eq!(schedule.window, WindowSpec::new(540, 660));
}

#[test]
fn test_counts_and_minutes() {
    let schedule = sample_schedule();
    assert_eq!(schedule.count(BlockKind::Slot), 2);
    assert_eq!(schedule.count(BlockKind::Lunch), 0);
    assert_eq!(schedule.minutes(BlockKind::Slot), 110);
    assert_eq!(schedule.minutes(BlockKind::Break), 10);
    assert!(schedule.is_contiguous());
    assert_eq!(schedule.block(2).map(|b| b.kind), Some(BlockKind::Break));
}

#[test]
fn test_from_json_accepts_serialized_schedule() {
    let schedule = sample_schedule();
    let json = schedule.to_json_pretty().unwrap();
    assert!(json.contains("\"kind\": \"break\""));
    assert_eq!(Schedule::from_json(&json).unwrap(), schedule);
}

#[test]
fn test_from_json_rejects_duplicate_ids() {
    let mut schedule = sample_schedule();
    schedule.blocks[1].id = 1;
    let json = serde_json::to_string(&schedule).unwrap();

    match Schedule::from_json(&json).unwrap_err() {
        ScheduleError::InvalidRequest { field, reason } => {
            assert_eq!(field, "blocks");
            assert!(reason.contains("Duplicate block ID: 1"));
        }
        other => panic!("Expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn test_from_json_rejects_empty_blocks() {
    let json = r#"{
        "window": {"start_minute": 0, "end_minute": 60},
        "blocks": [
            {"id": 1, "label": "Zero", "start_minute": 10, "end_minute": 10, "kind": "slot"}
        ]
    }"#;
    assert!(matches!(
        Schedule::from_json(json),
        Err(ScheduleError::InvalidRequest { .. })
    ));
}

#[test]
fn test_from_json_rejects_blocks_past_the_minute_counter() {
    let json = r#"{
        "window": {"start_minute": 4294967000, "end_minute": 4294967295},
        "blocks": [
            {"id": 1, "label": "Slot 1", "start_minute": 0, "end_minute": 200, "kind": "slot"},
            {"id": 2, "label": "Slot 2", "start_minute": 200, "end_minute": 400, "kind": "slot"}
        ]
    }"#;
    match Schedule::from_json(json) {
        Err(ScheduleError::InvalidRequest { field, .. }) => assert_eq!(field, "blocks"),
        other => panic!("Expected InvalidRequest, got {other:?}"),
    }
}

#[test]
fn test_minutes_saturates() {
    let schedule = Schedule::new(
        WindowSpec::new(0, Minute::MAX),
        vec![
            TimeBlock::new(1, BlockKind::Slot, "A", 0, Minute::MAX - 1),
            TimeBlock::new(2, BlockKind::Slot, "B", 0, Minute::MAX - 1),
        ],
    );
    assert_eq!(schedule.minutes(BlockKind::Slot), Minute::MAX);
}

#[test]
fn test_from_json_malformed() {
    assert!(matches!(
        Schedule::from_json("{not json"),
        Err(ScheduleError::Serialization { .. })
    ));
}
