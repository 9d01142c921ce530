//! Shortest-process-next dispatch.
//!
//! Non-preemptive: among Ready processes the one with the smallest total
//! burst runs to completion (ties broken by arrival, then insertion order).
//! Timing formulas match FCFS; only the selection order differs.

use crate::common::SimError;
use crate::engine::{ExecMode, ExecutionEngine};

use super::{Policy, Scheduler};

impl Scheduler {
    /// Runs every process to completion, always picking the shortest Ready job.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BurstsNotComputed`] if burst measurement has not
    /// run, and [`SimError::AllocationExhausted`] if no Ready process can be
    /// admitted.
    pub fn run_spn(&mut self, engine: &mut ExecutionEngine) -> Result<(), SimError> {
        self.begin_run(Policy::Spn)?;

        let mut pending = self.arrival_order();
        let mut ready: Vec<usize> = Vec::new();

        while !pending.is_empty() || !ready.is_empty() {
            let now = self.clock.now();
            ready.extend(self.admit_arrivals(&mut pending, now));
            if ready.is_empty() {
                self.idle_jump(&pending);
                continue;
            }

            let idx = self.take_shortest_admissible(&mut ready)?;
            self.ensure_resident(idx)?;

            let start = self.clock.now();
            self.processes[idx].note_dispatch(start);
            tracing::trace!(pid = %self.processes[idx].pid, at = start, "SPN dispatch");

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
