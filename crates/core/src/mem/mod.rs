//! Memory admission bookkeeping.
//!
//! The simulator models memory residency as a fixed-size table of frames,
//! each holding at most one process. Allocation is first-fit over ascending
//! frame indices; there is no paging behavior beyond the bookkeeping itself.

/// Fixed-capacity frame allocator.
pub mod frames;

pub use frames::FrameAllocator;
