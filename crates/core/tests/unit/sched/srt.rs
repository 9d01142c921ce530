//! Shortest-remaining-time dispatch tests.
//!
//! SRT preempts only at an instruction boundary, and only when some Ready
//! process has strictly smaller remaining burst than the running process at
//! that instant.

use pretty_assertions::assert_eq;

use crate::common::harness::{job, measured_scheduler, process, spans};

#[test]
fn shorter_arrival_preempts_the_running_process() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![job("P1", 0, 5), job("P2", 2, 2)]);

    scheduler.run_srt(&mut engine).unwrap();

    // At time 2, P1 has 3 remaining and P2 arrives with 2: preempt.
    assert_eq!(
        spans(&scheduler),
        vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 7)]
    );

    let p1 = process(&scheduler, "P1");
    assert_eq!(p1.response_time, Some(0));
    assert_eq!(p1.waiting_time, 2);
    assert_eq!(p1.turnaround_time, 7);

    let p2 = process(&scheduler, "P2");
    assert_eq!(p2.response_time, Some(0));
    assert_eq!(p2.waiting_time, 0);
    assert_eq!(p2.turnaround_time, 2);
}

/// Equal remaining burst must not preempt; the rule is strictly smaller.
#[test]
fn equal_remaining_burst_does_not_preempt() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![job("P1", 0, 4), job("P2", 2, 2)]);

    scheduler.run_srt(&mut engine).unwrap();

    // At time 2, P1 has 2 remaining and P2 arrives with 2: P1 keeps running.
    assert_eq!(spans(&scheduler), vec![("P1", 0, 4), ("P2", 4, 6)]);
}

#[test]
fn tiny_arrival_interrupts_a_long_job_once() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![job("P1", 0, 10), job("P2", 1, 1)]);

    scheduler.run_srt(&mut engine).unwrap();

    assert_eq!(
        spans(&scheduler),
        vec![("P1", 0, 1), ("P2", 1, 2), ("P1", 2, 11)]
    );
    assert_eq!(process(&scheduler, "P1").waiting_time, 1);
    assert_eq!(process(&scheduler, "P1").turnaround_time, 11);
    assert_eq!(process(&scheduler, "P2").turnaround_time, 1);
}

#[test]
fn repeated_preemption_by_successive_arrivals() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![
        job("P1", 0, 6),
        job("P2", 1, 2),
        job("P3", 2, 1),
    ]);

    scheduler.run_srt(&mut engine).unwrap();

    // P2 (2 < 5 remaining) preempts P1 at 1; P3 (1 < 1? no: P2 has 1 left,
    // not strictly smaller) waits for P2, then runs before P1 resumes.
    assert_eq!(
        spans(&scheduler),
        vec![("P1", 0, 1), ("P2", 1, 3), ("P3", 3, 4), ("P1", 4, 9)]
    );
}

#[test]
fn every_process_completes_with_conserved_work() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![
        job("P1", 0, 7),
        job("P2", 3, 3),
        job("P3", 4, 2),
        job("P4", 20, 1),
    ]);

    scheduler.run_srt(&mut engine).unwrap();

    for p in scheduler.processes() {
        assert!(p.is_finished());
        assert_eq!(p.burst_time, 0);
        assert_eq!(p.executed_burst_time, p.initial_burst_time);
        assert_eq!(p.turnaround_time, p.waiting_time + p.initial_burst_time);
    }
}
