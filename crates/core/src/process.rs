//! Process descriptor.
//!
//! A process pairs an immutable program with the mutable scheduling
//! bookkeeping one simulated job accumulates over a run: remaining and
//! initial burst, executed instructions, waiting/response/turnaround times,
//! the persisted program counter, and the lifecycle state.

use crate::common::{Pid, SimTime};
use crate::isa::Program;

/// Lifecycle state of a process within a scheduler run.
///
/// Processes begin `New` (not yet arrived), become `Ready` once simulated
/// time reaches their arrival, are `Running` while dispatched, and are
/// `Finished` when their remaining burst reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// Created but not yet arrived.
    New,
    /// Arrived and eligible for dispatch.
    Ready,
    /// Currently occupying the engine.
    Running,
    /// Completed all instructions.
    Finished,
}

/// One simulated job: an immutable program plus scheduling bookkeeping.
///
/// Bookkeeping fields are mutated only by the scheduler and the execution
/// engine during a run; the descriptor itself persists to report final
/// metrics.
#[derive(Debug, Clone)]
pub struct Process {
    /// Unique identifier for the run.
    pub pid: Pid,
    /// Instant at which the process becomes eligible to run; fixed at creation.
    pub arrival_time: SimTime,
    /// The program, indexed from 1.
    pub program: Program,
    /// Resume point: 1-based index of the next instruction to execute.
    pub pc: usize,
    /// Remaining instruction count; decremented as slices execute.
    pub burst_time: u64,
    /// Immutable snapshot of the measured burst, for normalization.
    pub initial_burst_time: u64,
    /// Instructions executed in real mode so far.
    pub executed_burst_time: u64,
    /// Accumulated time spent Ready but not Running.
    pub waiting_time: SimTime,
    /// Time from arrival to completion; final once `Finished`.
    pub turnaround_time: SimTime,
    /// Time from arrival to first dispatch; written at most once per run.
    pub response_time: Option<SimTime>,
    /// Lifecycle state.
    pub state: ProcessState,
}

impl Process {
    /// Creates a process from its identifier, arrival time, and program.
    ///
    /// Burst fields start at zero; they are populated by the scheduler's
    /// dry-run burst measurement before any policy runs.
    pub const fn new(pid: Pid, arrival_time: SimTime, program: Program) -> Self {
        Self {
            pid,
            arrival_time,
            program,
            pc: 1,
            burst_time: 0,
            initial_burst_time: 0,
            executed_burst_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: None,
            state: ProcessState::New,
        }
    }

    /// Whether the process has completed all of its instructions.
    pub fn is_finished(&self) -> bool {
        self.state == ProcessState::Finished
    }

    /// Records a dispatch at `start`, setting the response time exactly once.
    ///
    /// Waiting time is refreshed to the total elapsed time not spent
    /// executing: since arrival the process has only ever been waiting or
    /// executing, so the difference is exact at every dispatch.
    pub(crate) fn note_dispatch(&mut self, start: SimTime) {
        if self.response_time.is_none() {
            self.response_time = Some(start - self.arrival_time);
        }
        self.waiting_time = start - self.arrival_time - self.executed_burst_time;
        self.state = ProcessState::Running;
    }

    /// Clears per-run bookkeeping so another policy can be run.
    ///
    /// The measured `initial_burst_time` survives; everything else returns
    /// to its pre-run value.
    pub(crate) fn reset_run_state(&mut self) {
        self.pc = 1;
        self.burst_time = self.initial_burst_time;
        self.executed_burst_time = 0;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.response_time = None;
        self.state = ProcessState::New;
    }
}
