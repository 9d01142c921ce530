//! Error types for the simulator.
//!
//! One taxonomy covers every failure the simulator can report:
//! 1. **Decode:** Unknown mnemonics and malformed descriptor lines, fatal at
//!    load time.
//! 2. **Admission:** Frame-allocator exhaustion and bookkeeping mismatches,
//!    surfaced to the scheduler rather than silently ignored.
//! 3. **Measurement:** Degenerate (zero-instruction) programs and policy runs
//!    attempted before burst measurement.
//! 4. **External:** I/O and configuration parse failures from the loader.

use thiserror::Error;

use super::types::Pid;

/// Simulator-wide error type.
#[derive(Debug, Error)]
pub enum SimError {
    /// An instruction mnemonic is not part of the instruction set.
    ///
    /// Raised at descriptor-decode time; the instruction set is a closed enum,
    /// so an unknown mnemonic can never reach the engine. Fatal to the run.
    #[error("unsupported opcode `{0}`")]
    UnsupportedOpcode(String),

    /// A descriptor line could not be decoded.
    ///
    /// Covers non-integer arrival times, wrong operand counts, register
    /// indices outside the register file, and out-of-range shift amounts.
    #[error("malformed descriptor at line {line}: {reason}")]
    MalformedDescriptor {
        /// 1-based line number within the descriptor.
        line: usize,
        /// Human-readable description of the defect.
        reason: String,
    },

    /// The frame allocator has no free slot for the process.
    ///
    /// Recoverable at policy level: dispatch loops defer non-resident
    /// candidates until a frame frees. Propagates only when no process can be
    /// admitted at all.
    #[error("no free frame to admit process {0}")]
    AllocationExhausted(Pid),

    /// A frame release was requested for a process with no recorded frame.
    #[error("process {0} is not resident in any frame")]
    NotResident(Pid),

    /// A process's measured burst time is zero.
    ///
    /// A zero-instruction program would make normalized turnaround undefined;
    /// it is rejected during burst measurement instead of dividing by zero.
    #[error("process {0} has a zero-instruction program")]
    DegenerateBurst(Pid),

    /// A policy run was requested before burst times were measured.
    #[error("burst times have not been computed; run compute_burst_times first")]
    BurstsNotComputed,

    /// A round-robin quantum of zero instructions was requested.
    #[error("time quantum must be at least one instruction")]
    InvalidQuantum,

    /// A descriptor or directory could not be read.
    #[error("descriptor I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be deserialized.
    #[error("malformed configuration: {0}")]
    MalformedConfig(#[from] serde_json::Error),
}
