//! Shortest-process-next dispatch tests.
//!
//! Scenario: P1 arrival 0 burst 5, P2 arrival 1 burst 2, P3 arrival 1
//! burst 1. P1 runs to completion (non-preemptive); at time 5 both P2 and
//! P3 have been Ready since time 1 and P3's smaller burst wins.

use pretty_assertions::assert_eq;

use crate::common::harness::{job, measured_scheduler, process, spans};

#[test]
fn shortest_ready_job_runs_after_the_incumbent_finishes() {
    let (mut scheduler, mut engine) =
        measured_scheduler(vec![job("P1", 0, 5), job("P2", 1, 2), job("P3", 1, 1)]);

    scheduler.run_spn(&mut engine).unwrap();

    assert_eq!(
        spans(&scheduler),
        vec![("P1", 0, 5), ("P3", 5, 6), ("P2", 6, 8)]
    );

    let p3 = process(&scheduler, "P3");
    assert_eq!(p3.waiting_time, 4);
    assert_eq!(p3.response_time, Some(4));
    assert_eq!(p3.turnaround_time, 5);

    let p2 = process(&scheduler, "P2");
    assert_eq!(p2.waiting_time, 5);
    assert_eq!(p2.turnaround_time, 7);
}

#[test]
fn selection_considers_only_arrived_processes() {
    // The shortest job overall arrives last; at time 0 only P1 is Ready.
    let (mut scheduler, mut engine) = measured_scheduler(vec![job("P1", 0, 4), job("P2", 1, 1)]);

    scheduler.run_spn(&mut engine).unwrap();

    assert_eq!(spans(&scheduler), vec![("P1", 0, 4), ("P2", 4, 5)]);
}

#[test]
fn burst_ties_break_by_arrival_order() {
    let (mut scheduler, mut engine) =
        measured_scheduler(vec![job("P1", 0, 5), job("P2", 2, 2), job("P3", 1, 2)]);

    scheduler.run_spn(&mut engine).unwrap();

    // P3 and P2 tie on burst; P3 arrived first.
    assert_eq!(
        spans(&scheduler),
        vec![("P1", 0, 5), ("P3", 5, 7), ("P2", 7, 9)]
    );
}

#[test]
fn response_equals_waiting_for_every_process() {
    let (mut scheduler, mut engine) =
        measured_scheduler(vec![job("P1", 0, 5), job("P2", 1, 2), job("P3", 1, 1)]);

    scheduler.run_spn(&mut engine).unwrap();

    for p in scheduler.processes() {
        assert_eq!(p.response_time, Some(p.waiting_time));
        assert_eq!(p.turnaround_time, p.waiting_time + p.initial_burst_time);
    }
}

#[test]
fn idle_jump_reaches_a_late_batch() {
    let (mut scheduler, mut engine) =
        measured_scheduler(vec![job("P1", 10, 3), job("P2", 10, 1)]);

    scheduler.run_spn(&mut engine).unwrap();

    // Nothing is Ready before 10; the clock jumps and P2's burst wins.
    assert_eq!(spans(&scheduler), vec![("P2", 10, 11), ("P1", 11, 14)]);
}
