//! Scheduler: dispatch policies, activity log, and performance metrics.
//!
//! The scheduler owns the backlog of all processes, the run-wide simulated
//! clock, the frame allocator, and the activity log. It provides:
//! 1. **Burst measurement:** One dry run per program before any policy runs.
//! 2. **Policies:** FCFS, RR, SPN, and SRT dispatch loops, one per submodule,
//!    each with its own queueing discipline and timing bookkeeping.
//! 3. **Shared machinery:** Arrival gating against the clock, idle jumps to
//!    the next arrival, set-once response times, and frame admission with
//!    deferral of non-resident candidates.
//! 4. **Reporting:** The coalesced activity log and per-process metrics.

use std::collections::VecDeque;
use std::fmt;

use crate::common::{Pid, SimError, SimTime};
use crate::config::Config;
use crate::engine::{ExecMode, ExecutionEngine};
use crate::engine::clock::SimClock;
use crate::mem::FrameAllocator;
use crate::process::{Process, ProcessState};

/// First-come-first-served dispatch.
mod fcfs;
/// Activity log with contiguous-interval coalescing.
mod log;
/// Per-process performance metrics.
mod metrics;
/// Round-robin dispatch.
mod rr;
/// Shortest-process-next dispatch.
mod spn;
/// Shortest-remaining-time dispatch.
mod srt;

pub use log::{ActivityLog, Interval};
pub use metrics::ProcessMetrics;

/// A dispatch policy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-come-first-served: non-preemptive, arrival order.
    Fcfs,
    /// Round-robin with a fixed instruction quantum.
    Rr {
        /// Maximum instructions per dispatch.
        quantum: u64,
    },
    /// Shortest process next: non-preemptive, smallest total burst.
    Spn,
    /// Shortest remaining time: preemptive at instruction granularity.
    Srt,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => f.write_str("FCFS"),
            Self::Rr { .. } => f.write_str("RR"),
            Self::Spn => f.write_str("SPN"),
            Self::Srt => f.write_str("SRT"),
        }
    }
}

/// Owns the process backlog and runs one dispatch policy at a time.
#[derive(Debug)]
pub struct Scheduler {
    processes: Vec<Process>,
    frames: FrameAllocator,
    clock: SimClock,
    log: ActivityLog,
    bursts_measured: bool,
}

impl Scheduler {
    /// Creates a scheduler backed by the given frame allocator.
    pub fn new(frames: FrameAllocator) -> Self {
        Self {
            processes: Vec::new(),
            frames,
            clock: SimClock::new(),
            log: ActivityLog::new(),
            bursts_measured: false,
        }
    }

    /// Creates a scheduler sized from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(FrameAllocator::new(config.num_frames))
    }

    /// Adds a process to the backlog.
    pub fn add_process(&mut self, process: Process) {
        tracing::debug!(pid = %process.pid, arrival = process.arrival_time, "process added");
        self.processes.push(process);
        self.bursts_measured = false;
    }

    /// The process backlog, in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// The run-wide simulated clock.
    pub const fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The frame allocator's current state.
    pub const fn frames(&self) -> &FrameAllocator {
        &self.frames
    }

    /// The activity log of the most recent run.
    pub const fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    /// Measures every process's total burst length with one dry run each.
    ///
    /// Populates `burst_time` and snapshots `initial_burst_time`. Dry runs
    /// count instructions only: registers, store, clock, and per-process
    /// bookkeeping are untouched. Must be called before any policy run.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DegenerateBurst`] for a zero-instruction program,
    /// which would make normalized turnaround undefined.
    pub fn compute_burst_times(&mut self, engine: &mut ExecutionEngine) -> Result<(), SimError> {
        for process in &mut self.processes {
            if process.program.is_empty() {
                return Err(SimError::DegenerateBurst(process.pid.clone()));
            }
            let burst =
                engine.execute_process(&mut self.clock, process, None, None, ExecMode::DryRun);
            process.burst_time = burst;
            process.initial_burst_time = burst;
            tracing::debug!(pid = %process.pid, burst, "burst measured");
        }
        self.bursts_measured = true;
        Ok(())
    }

    /// Runs the selected policy against the engine.
    ///
    /// # Errors
    ///
    /// Propagates the underlying policy's errors.
    pub fn run(&mut self, engine: &mut ExecutionEngine, policy: Policy) -> Result<(), SimError> {
        match policy {
            Policy::Fcfs => self.run_fcfs(engine),
            Policy::Rr { quantum } => self.run_rr(engine, quantum),
            Policy::Spn => self.run_spn(engine),
            Policy::Srt => self.run_srt(engine),
        }
    }

    /// Prepares clock, log, frames, and per-process bookkeeping for a run.
    ///
    /// Burst times must have been measured; policies rely on `burst_time`
    /// both for selection and for completion detection.
    fn begin_run(&mut self, policy: Policy) -> Result<(), SimError> {
        if !self.bursts_measured {
            return Err(SimError::BurstsNotComputed);
        }
        self.clock.reset();
        self.log.clear();
        self.frames.clear();
        for process in &mut self.processes {
            process.reset_run_state();
        }
        tracing::debug!(%policy, processes = self.processes.len(), "run started");
        Ok(())
    }

    /// Indices of all processes ordered by `(arrival_time, insertion)`.
    fn arrival_order(&self) -> VecDeque<usize> {
        let mut order: Vec<usize> = (0..self.processes.len()).collect();
        order.sort_by_key(|&i| (self.processes[i].arrival_time, i));
        order.into()
    }

    /// Moves every pending process that has arrived by `now` to Ready.
    ///
    /// Returns the admitted indices in arrival order.
    fn admit_arrivals(&mut self, pending: &mut VecDeque<usize>, now: SimTime) -> Vec<usize> {
        let mut admitted = Vec::new();
        while let Some(&idx) = pending.front() {
            if self.processes[idx].arrival_time > now {
                break;
            }
            let _ = pending.pop_front();
            self.processes[idx].state = ProcessState::Ready;
            tracing::trace!(pid = %self.processes[idx].pid, at = now, "process ready");
            admitted.push(idx);
        }
        admitted
    }

    /// Jumps the clock to the next pending arrival (idle jump).
    fn idle_jump(&mut self, pending: &VecDeque<usize>) {
        if let Some(&next) = pending.front() {
            let instant = self.processes[next].arrival_time;
            tracing::trace!(to = instant, "idle jump");
            self.clock.jump_to(instant);
        }
    }

    /// Whether a process could be dispatched right now: already resident, or
    /// a frame is free for it.
    fn is_admissible(&self, idx: usize) -> bool {
        self.frames.lookup(&self.processes[idx].pid).is_some() || self.frames.has_free_frame()
    }

    /// Claims a frame for the process unless it is already resident.
    ///
    /// Residency persists across preemption; the frame is released only when
    /// the process finishes.
    fn ensure_resident(&mut self, idx: usize) -> Result<(), SimError> {
        let pid = &self.processes[idx].pid;
        if self.frames.lookup(pid).is_none() {
            let _ = self.frames.allocate(pid)?;
        }
        Ok(())
    }

    /// Removes and returns the first admissible process in queue order.
    ///
    /// Non-resident processes are skipped while every frame is claimed; they
    /// keep their place and are retried once a resident process finishes.
    fn take_next_admissible(&self, queue: &mut VecDeque<usize>) -> Result<usize, SimError> {
        let pos = queue.iter().position(|&idx| self.is_admissible(idx));
        pos.and_then(|p| queue.remove(p))
            .ok_or_else(|| self.exhausted(queue.front().copied()))
    }

    /// Removes and returns the admissible Ready process with the smallest
    /// remaining burst, ties broken by arrival time then insertion order.
    fn take_shortest_admissible(&self, ready: &mut Vec<usize>) -> Result<usize, SimError> {
        let mut best: Option<(usize, (u64, SimTime, usize))> = None;
        for (pos, &idx) in ready.iter().enumerate() {
            if !self.is_admissible(idx) {
                continue;
            }
            let process = &self.processes[idx];
            let key = (process.burst_time, process.arrival_time, idx);
            if best.is_none_or(|(_, smallest)| key < smallest) {
                best = Some((pos, key));
            }
        }
        best.map(|(pos, _)| ready.swap_remove(pos))
            .ok_or_else(|| self.exhausted(ready.first().copied()))
    }

    /// Admission failed for every Ready candidate; names the one at the
    /// front of the queue. Callers only dispatch from non-empty queues.
    fn exhausted(&self, idx: Option<usize>) -> SimError {
        let pid = idx.map_or_else(|| Pid::new("?"), |i| self.processes[i].pid.clone());
        SimError::AllocationExhausted(pid)
    }

    /// Marks a process finished at `end` and releases its frame.
    fn finish(&mut self, idx: usize, end: SimTime) -> Result<(), SimError> {
        let process = &mut self.processes[idx];
        debug_assert_eq!(process.burst_time, 0);
        process.turnaround_time = end - process.arrival_time;
        process.state = ProcessState::Finished;
        tracing::debug!(
            pid = %process.pid,
            at = end,
            turnaround = process.turnaround_time,
            "process finished"
        );
        let _ = self.frames.deallocate(&self.processes[idx].pid)?;
        Ok(())
    }
}
