//! Fixed-capacity frame allocator.
//!
//! Maps process identifiers to frame slots, first-fit over ascending frame
//! index. At most `capacity` processes are resident at once. A frame is
//! claimed when a process is first dispatched and released when it finishes;
//! residency persists across preemption, so exhaustion is a real admission
//! condition the scheduler must handle, not an ignorable signal.

use std::collections::HashMap;

use crate::common::{Pid, SimError};

/// Fixed-size table of frame slots with a pid-to-frame mapping.
#[derive(Debug, Clone)]
pub struct FrameAllocator {
    frames: Vec<Option<Pid>>,
    table: HashMap<Pid, usize>,
}

impl FrameAllocator {
    /// Creates an allocator with `capacity` empty frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![None; capacity],
            table: HashMap::with_capacity(capacity),
        }
    }

    /// Total number of frames.
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of currently resident processes.
    pub fn resident(&self) -> usize {
        self.table.len()
    }

    /// Whether at least one frame is free.
    pub fn has_free_frame(&self) -> bool {
        self.table.len() < self.frames.len()
    }

    /// Allocates the lowest-indexed free frame to `pid`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::AllocationExhausted`] without mutating any state
    /// when every frame is occupied.
    ///
    /// # Returns
    ///
    /// The index of the claimed frame.
    pub fn allocate(&mut self, pid: &Pid) -> Result<usize, SimError> {
        let index = self
            .frames
            .iter()
            .position(Option::is_none)
            .ok_or_else(|| SimError::AllocationExhausted(pid.clone()))?;
        self.frames[index] = Some(pid.clone());
        let _ = self.table.insert(pid.clone(), index);
        tracing::trace!(%pid, frame = index, "frame allocated");
        Ok(index)
    }

    /// Releases the frame recorded for `pid`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::NotResident`] when `pid` has no recorded frame.
    ///
    /// # Returns
    ///
    /// The index of the released frame.
    pub fn deallocate(&mut self, pid: &Pid) -> Result<usize, SimError> {
        let index = self
            .table
            .remove(pid)
            .ok_or_else(|| SimError::NotResident(pid.clone()))?;
        self.frames[index] = None;
        tracing::trace!(%pid, frame = index, "frame released");
        Ok(index)
    }

    /// Returns the frame index recorded for `pid`, if resident.
    pub fn lookup(&self, pid: &Pid) -> Option<usize> {
        self.table.get(pid).copied()
    }

    /// Empties every frame for a fresh run.
    pub fn clear(&mut self) {
        self.frames.fill(None);
        self.table.clear();
    }
}
