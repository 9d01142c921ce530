//! Program builders and scheduler fixtures.
//!
//! Scheduling tests care about slice boundaries and timing, not arithmetic,
//! so workloads are built from programs of independent `ldi` instructions:
//! one instruction is one tick, and any prefix is valid.

use std::sync::Once;

use schedsim_core::common::{Pid, Reg, SimTime};
use schedsim_core::isa::{Instruction, Program};
use schedsim_core::{ExecutionEngine, FrameAllocator, Process, Scheduler};

static TRACING: Once = Once::new();

/// Installs a fmt subscriber once so `RUST_LOG=schedsim_core=trace` shows
/// dispatch, admission, and preemption events while a test runs.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A register index that is statically in range.
pub fn reg(index: u8) -> Reg {
    Reg::new(index).unwrap()
}

/// Program of `len` independent `ldi` instructions.
///
/// Instruction `i` (0-based) writes `i` into register `i % 4`, so partial
/// execution leaves a recognizable register pattern.
pub fn counting_program(len: usize) -> Program {
    let instructions = (0..len)
        .map(|i| Instruction::Ldi {
            rd: reg((i % 4) as u8),
            imm: i as i64,
        })
        .collect();
    Program::new(instructions)
}

/// A process with a counting program of `len` instructions.
pub fn job(pid: &str, arrival: SimTime, len: usize) -> Process {
    Process::new(Pid::new(pid), arrival, counting_program(len))
}

/// A scheduler over `jobs` with ten frames and bursts already measured.
pub fn measured_scheduler(jobs: Vec<Process>) -> (Scheduler, ExecutionEngine) {
    measured_scheduler_with_frames(jobs, 10)
}

/// A scheduler over `jobs` with the given frame capacity and bursts measured.
pub fn measured_scheduler_with_frames(
    jobs: Vec<Process>,
    frames: usize,
) -> (Scheduler, ExecutionEngine) {
    init_tracing();
    let mut scheduler = Scheduler::new(FrameAllocator::new(frames));
    for j in jobs {
        scheduler.add_process(j);
    }
    let mut engine = ExecutionEngine::new();
    scheduler.compute_burst_times(&mut engine).unwrap();
    (scheduler, engine)
}

/// The activity log as `(pid, start, end)` triples.
pub fn spans(scheduler: &Scheduler) -> Vec<(&str, SimTime, SimTime)> {
    scheduler
        .activity_log()
        .intervals()
        .iter()
        .map(|i| (i.pid.as_str(), i.start, i.end))
        .collect()
}

/// The backlog entry with the given pid.
pub fn process<'a>(scheduler: &'a Scheduler, pid: &str) -> &'a Process {
    scheduler
        .processes()
        .iter()
        .find(|p| p.pid.as_str() == pid)
        .unwrap()
}
