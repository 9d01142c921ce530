//! Round-robin dispatch.
//!
//! Ready processes form a rotation. Each dispatch runs at most one quantum
//! of instructions; a process with burst remaining afterwards re-enters the
//! rotation behind any processes that arrived during its slice. Waiting time
//! is the total elapsed time not spent executing, refreshed at each dispatch
//! as `start - arrival - executed_so_far`.

use std::collections::VecDeque;

use crate::common::SimError;
use crate::engine::{ExecMode, ExecutionEngine};
use crate::process::ProcessState;

use super::{Policy, Scheduler};

impl Scheduler {
    /// Runs the backlog under round-robin with the given instruction quantum.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidQuantum`] for a zero quantum,
    /// [`SimError::BurstsNotComputed`] if burst measurement has not run, and
    /// [`SimError::AllocationExhausted`] if no Ready process can be admitted.
    pub fn run_rr(&mut self, engine: &mut ExecutionEngine, quantum: u64) -> Result<(), SimError> {
        if quantum == 0 {
            return Err(SimError::InvalidQuantum);
        }
        self.begin_run(Policy::Rr { quantum })?;

        let mut pending = self.arrival_order();
        let mut rotation: VecDeque<usize> = VecDeque::new();

        while !pending.is_empty() || !rotation.is_empty() {
            let now = self.clock.now();
            rotation.extend(self.admit_arrivals(&mut pending, now));
            if rotation.is_empty() {
                self.idle_jump(&pending);
                continue;
            }

            // First admissible process in rotation order; non-resident
            // candidates are deferred while every frame is claimed.
            let idx = self.take_next_admissible(&mut rotation)?;
            self.ensure_resident(idx)?;

            let start = self.clock.now();
            self.processes[idx].note_dispatch(start);

            let slice = self.processes[idx].burst_time.min(quantum);
            tracing::trace!(pid = %self.processes[idx].pid, at = start, slice, "RR dispatch");
            let executed = engine.execute_process(
                &mut self.clock,
                &mut self.processes[idx],
                Some(slice),
                None,
                ExecMode::Real,
            );
            let end = self.clock.now();
            {
                let process = &mut self.processes[idx];
                process.executed_burst_time += executed;
                process.burst_time -= executed;
            }
            self.log.record(&self.processes[idx].pid, start, end);

            if self.processes[idx].burst_time == 0 {
                self.finish(idx, end)?;
            } else {
                // Arrivals during the slice enter the rotation ahead of the
                // preempted process.
                rotation.extend(self.admit_arrivals(&mut pending, end));
                self.processes[idx].state = ProcessState::Ready;
                rotation.push_back(idx);
            }
        }
        Ok(())
    }
}
