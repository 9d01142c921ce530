//! Per-process performance metrics.
//!
//! Reported once per process after a policy run: arrival, measured burst,
//! response, turnaround, and turnaround normalized by the measured burst.

use serde::Serialize;

use crate::common::{Pid, SimError, SimTime};

use super::Scheduler;

/// Final metrics for one process under the policy just run.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival instant.
    pub arrival_time: SimTime,
    /// Measured total burst (`initial_burst_time`).
    pub burst_time: u64,
    /// Time from arrival to first dispatch; `None` if never dispatched.
    pub response_time: Option<SimTime>,
    /// Time from arrival to completion.
    pub turnaround_time: SimTime,
    /// Turnaround divided by the measured burst.
    pub normalized_turnaround_time: f64,
}

impl Scheduler {
    /// Produces per-process metrics in backlog insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DegenerateBurst`] if any process has a zero
    /// measured burst; normalization would otherwise divide by zero. Burst
    /// measurement rejects such programs up front, so this guards re-entry
    /// with an unmeasured backlog.
    pub fn performance_metrics(&self) -> Result<Vec<ProcessMetrics>, SimError> {
        self.processes()
            .iter()
            .map(|process| {
                if process.initial_burst_time == 0 {
                    return Err(SimError::DegenerateBurst(process.pid.clone()));
                }
                Ok(ProcessMetrics {
                    pid: process.pid.clone(),
                    arrival_time: process.arrival_time,
                    burst_time: process.initial_burst_time,
                    response_time: process.response_time,
                    turnaround_time: process.turnaround_time,
                    normalized_turnaround_time: process.turnaround_time as f64
                        / process.initial_burst_time as f64,
                })
            })
            .collect()
    }
}
