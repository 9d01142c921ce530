//! Performance metrics tests.

use pretty_assertions::assert_eq;

use schedsim_core::{ExecutionEngine, FrameAllocator, Process, Scheduler, SimError};
use schedsim_core::common::Pid;
use schedsim_core::isa::Program;

use crate::common::harness::{job, measured_scheduler};

#[test]
fn reports_the_measured_burst_after_a_run_decrements_it() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![job("P1", 0, 5), job("P2", 2, 2)]);
    scheduler.run_rr(&mut engine, 2).unwrap();

    let metrics = scheduler.performance_metrics().unwrap();

    // Backlog insertion order, with burst_time restored to the measurement.
    assert_eq!(metrics[0].pid, Pid::new("P1"));
    assert_eq!(metrics[0].burst_time, 5);
    assert_eq!(metrics[1].pid, Pid::new("P2"));
    assert_eq!(metrics[1].burst_time, 2);
}

#[test]
fn normalized_turnaround_divides_by_the_measured_burst() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![job("P1", 0, 5), job("P2", 2, 2)]);
    scheduler.run_fcfs(&mut engine).unwrap();

    let metrics = scheduler.performance_metrics().unwrap();

    // P1: turnaround 5 over burst 5; P2: turnaround 5 over burst 2.
    assert!((metrics[0].normalized_turnaround_time - 1.0).abs() < 1e-9);
    assert!((metrics[1].normalized_turnaround_time - 2.5).abs() < 1e-9);
}

#[test]
fn response_is_absent_before_any_dispatch() {
    let (scheduler, _engine) = measured_scheduler(vec![job("P1", 0, 3)]);

    let metrics = scheduler.performance_metrics().unwrap();
    assert_eq!(metrics[0].response_time, None);
    assert_eq!(metrics[0].turnaround_time, 0);
}

#[test]
fn zero_instruction_program_is_rejected_at_measurement() {
    let mut scheduler = Scheduler::new(FrameAllocator::new(4));
    scheduler.add_process(Process::new(Pid::new("empty"), 0, Program::new(Vec::new())));
    let mut engine = ExecutionEngine::new();

    let err = scheduler.compute_burst_times(&mut engine).unwrap_err();
    assert!(matches!(err, SimError::DegenerateBurst(pid) if pid == Pid::new("empty")));
}

#[test]
fn unmeasured_backlog_cannot_be_normalized() {
    let mut scheduler = Scheduler::new(FrameAllocator::new(4));
    scheduler.add_process(job("P1", 0, 3));

    let err = scheduler.performance_metrics().unwrap_err();
    assert!(matches!(err, SimError::DegenerateBurst(_)));
}

#[test]
fn metrics_serialize_with_the_report_columns() {
    let (mut scheduler, mut engine) = measured_scheduler(vec![job("P1", 0, 4)]);
    scheduler.run_fcfs(&mut engine).unwrap();

    let metrics = scheduler.performance_metrics().unwrap();
    let value = serde_json::to_value(&metrics[0]).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "pid": "P1",
            "arrival_time": 0,
            "burst_time": 4,
            "response_time": 0,
            "turnaround_time": 4,
            "normalized_turnaround_time": 1.0
        })
    );
}
