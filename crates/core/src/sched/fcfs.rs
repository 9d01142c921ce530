//! First-come-first-served dispatch.
//!
//! Processes run in arrival order (ties broken by insertion order), each to
//! completion with no preemption. Waiting time is the gap from arrival to
//! the single dispatch, response time equals waiting time, and turnaround is
//! measured at completion.

use crate::common::SimError;
use crate::engine::{ExecMode, ExecutionEngine};

use super::{Policy, Scheduler};

impl Scheduler {
    /// Runs every process to completion in first-come-first-served order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BurstsNotComputed`] if burst measurement has not
    /// run, and [`SimError::AllocationExhausted`] if a process can never be
    /// admitted (a zero-capacity allocator).
    pub fn run_fcfs(&mut self, engine: &mut ExecutionEngine) -> Result<(), SimError> {
        self.begin_run(Policy::Fcfs)?;

        for idx in self.arrival_order() {
            // Engine idle until the process arrives.
            let arrival = self.processes[idx].arrival_time;
            self.clock.jump_to(arrival);
            self.ensure_resident(idx)?;

            let start = self.clock.now();
            self.processes[idx].note_dispatch(start);
            tracing::trace!(pid = %self.processes[idx].pid, at = start, "FCFS dispatch");

            let executed = engine.execute_process(
                &mut self.clock,
                &mut self.processes[idx],
                None,
                None,
                ExecMode::Real,
            );
            let end = self.clock.now();

            let process = &mut self.processes[idx];
            process.executed_burst_time += executed;
            process.burst_time -= executed;
            self.finish(idx, end)?;
            self.log.record(&self.processes[idx].pid, start, end);
        }
        Ok(())
    }
}
