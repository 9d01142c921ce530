//! Activity log coalescing tests.

use pretty_assertions::assert_eq;

use schedsim_core::ActivityLog;
use schedsim_core::common::Pid;

#[test]
fn contiguous_same_process_intervals_merge() {
    let mut log = ActivityLog::new();
    let p = Pid::new("P1");

    log.record(&p, 0, 2);
    log.record(&p, 2, 5);

    assert_eq!(log.len(), 1);
    let merged = &log.intervals()[0];
    assert_eq!((merged.start, merged.end), (0, 5));
}

#[test]
fn contiguous_intervals_of_different_processes_stay_separate() {
    let mut log = ActivityLog::new();

    log.record(&Pid::new("P1"), 0, 2);
    log.record(&Pid::new("P2"), 2, 4);

    assert_eq!(log.len(), 2);
}

#[test]
fn gapped_intervals_of_the_same_process_stay_separate() {
    let mut log = ActivityLog::new();
    let p = Pid::new("P1");

    log.record(&p, 0, 2);
    log.record(&p, 3, 5);

    assert_eq!(log.len(), 2);
}

/// Only the immediately preceding interval can coalesce; an earlier interval
/// separated by another process's slice must not merge.
#[test]
fn interleaved_slices_do_not_merge_across_processes() {
    let mut log = ActivityLog::new();
    let p1 = Pid::new("P1");
    let p2 = Pid::new("P2");

    log.record(&p1, 0, 2);
    log.record(&p2, 2, 4);
    log.record(&p1, 4, 6);

    assert_eq!(log.len(), 3);
    assert_eq!(log.makespan(), 6);
}

#[test]
fn zero_length_slices_are_not_recorded() {
    let mut log = ActivityLog::new();
    log.record(&Pid::new("P1"), 3, 3);
    assert!(log.is_empty());
    assert_eq!(log.makespan(), 0);
}

#[test]
fn clear_discards_everything() {
    let mut log = ActivityLog::new();
    log.record(&Pid::new("P1"), 0, 1);
    log.clear();
    assert!(log.is_empty());
}

#[test]
fn serializes_as_an_interval_array() {
    let mut log = ActivityLog::new();
    log.record(&Pid::new("P1"), 0, 3);
    log.record(&Pid::new("P2"), 3, 4);

    let value = serde_json::to_value(&log).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"pid": "P1", "start": 0, "end": 3},
            {"pid": "P2", "start": 3, "end": 4}
        ])
    );
}
