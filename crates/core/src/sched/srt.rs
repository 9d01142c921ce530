//! Shortest-remaining-time dispatch.
//!
//! Preemptive refinement of SPN: among Ready processes the one with the
//! smallest remaining burst runs, one instruction at a time. After every
//! instruction, processes that arrived at the new clock value become Ready;
//! if any Ready process now has strictly smaller remaining burst than the
//! running process, the running process is preempted back into the Ready
//! set and selection restarts. Waiting time is bookkept as under RR.

use crate::common::SimError;
use crate::engine::{ExecMode, ExecutionEngine};
use crate::process::ProcessState;

use super::{Policy, Scheduler};

impl Scheduler {
    /// Runs the backlog under preemptive shortest-remaining-time.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BurstsNotComputed`] if burst measurement has not
    /// run, and [`SimError::AllocationExhausted`] if no Ready process can be
    /// admitted.
    pub fn run_srt(&mut self, engine: &mut ExecutionEngine) -> Result<(), SimError> {
        self.begin_run(Policy::Srt)?;

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
            tracing::trace!(pid = %self.processes[idx].pid, at = start, "SRT dispatch");

            // One instruction per step; preemption is checked at every
            // instruction boundary against the freshly admitted Ready set.
            loop {
                let executed = engine.execute_process(
                    &mut self.clock,
                    &mut self.processes[idx],
                    Some(1),
                    None,
                    ExecMode::Real,
                );
                debug_assert_eq!(executed, 1);
                let now = self.clock.now();
                {
                    let process = &mut self.processes[idx];
                    process.executed_burst_time += executed;
                    process.burst_time -= executed;
                }

                ready.extend(self.admit_arrivals(&mut pending, now));

                if self.processes[idx].burst_time == 0 {
                    self.finish(idx, now)?;
                    break;
                }
                let remaining = self.processes[idx].burst_time;
                if ready
                    .iter()
                    .any(|&other| self.processes[other].burst_time < remaining)
                {
                    tracing::debug!(
                        pid = %self.processes[idx].pid,
                        at = now,
                        remaining,
                        "SRT preemption"
                    );
                    self.processes[idx].state = ProcessState::Ready;
                    ready.push(idx);
                    break;
                }
            }
            self.log.record(&self.processes[idx].pid, start, self.clock.now());
        }
        Ok(())
    }
}
