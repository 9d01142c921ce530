//! Discrete-event CPU scheduling simulator library.
//!
//! This crate implements a deterministic simulator of instruction execution and
//! process scheduling with the following:
//! 1. **Engine:** A minimal instruction-set interpreter with a register file, an
//!    address-keyed store, and real/dry-run execution modes.
//! 2. **ISA:** A closed instruction enum, text-descriptor decoding, and programs
//!    indexed from 1.
//! 3. **Scheduler:** Four dispatch policies (FCFS, RR, SPN, SRT) with per-policy
//!    queueing, preemption, and timing bookkeeping.
//! 4. **Memory:** A fixed-capacity first-fit frame allocator for admission
//!    bookkeeping.
//! 5. **Simulation:** Descriptor loading, configuration, activity logging, and
//!    performance metrics.

/// Common types and errors (process identifiers, simulated time, registers).
pub mod common;
/// Simulator configuration (defaults and deserializable config structure).
pub mod config;
/// Execution engine (interpreter state, simulated clock, execution modes).
pub mod engine;
/// Instruction set (instruction enum, programs, descriptor decoding).
pub mod isa;
/// Frame allocation (fixed-capacity first-fit admission bookkeeping).
pub mod mem;
/// Process descriptor (program plus scheduling bookkeeping).
pub mod process;
/// Scheduler (dispatch policies, activity log, performance metrics).
pub mod sched;
/// Descriptor loading from the filesystem.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Simulator error taxonomy.
pub use crate::common::SimError;
/// Execution engine; interprets programs against registers and the store.
pub use crate::engine::{ExecMode, ExecutionEngine, SimClock};
/// Frame allocator; fixed-capacity first-fit admission bookkeeping.
pub use crate::mem::FrameAllocator;
/// Process descriptor; one simulated job.
pub use crate::process::{Process, ProcessState};
/// Scheduler and its dispatch policies.
pub use crate::sched::{ActivityLog, Policy, ProcessMetrics, Scheduler};
