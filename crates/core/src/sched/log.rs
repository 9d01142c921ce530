//! Activity log with contiguous-interval coalescing.
//!
//! Records when each process occupied the engine as an ordered sequence of
//! `(pid, start, end)` intervals. When a recorded slice starts exactly where
//! the previous interval for the same process ended, the two merge into one
//! interval; the log is appended in time order, so only the most recent
//! entry can ever be contiguous with a new slice.

use serde::Serialize;

use crate::common::{Pid, SimTime};

/// One half-open interval `[start, end)` of engine occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// The occupying process.
    pub pid: Pid,
    /// First tick of the slice.
    pub start: SimTime,
    /// One past the last tick of the slice.
    pub end: SimTime,
}

/// Ordered record of engine occupancy over a run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ActivityLog {
    intervals: Vec<Interval>,
}

impl ActivityLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Records an executed slice, coalescing with the preceding interval
    /// when it belongs to the same process and ends exactly at `start`.
    ///
    /// Zero-length slices are not recorded.
    pub fn record(&mut self, pid: &Pid, start: SimTime, end: SimTime) {
        debug_assert!(start <= end);
        if start == end {
            return;
        }
        if let Some(last) = self.intervals.last_mut() {
            if last.pid == *pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.intervals.push(Interval {
            pid: pid.clone(),
            start,
            end,
        });
    }

    /// The recorded intervals, in time order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of recorded intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// End of the last interval: the makespan of the run.
    pub fn makespan(&self) -> SimTime {
        self.intervals.last().map_or(0, |i| i.end)
    }

    /// Discards all recorded intervals.
    pub fn clear(&mut self) {
        self.intervals.clear();
    }
}
