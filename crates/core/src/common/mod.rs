//! Common types shared throughout the scheduling simulator.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Identifiers:** The opaque process identifier type.
//! 2. **Time:** The simulated-time representation.
//! 3. **Registers:** The engine's fixed-width register file.
//! 4. **Errors:** The simulator-wide error taxonomy.

/// Error types for the simulator.
pub mod error;

/// Register file implementation.
pub mod reg;

/// Process identifier and simulated time definitions.
pub mod types;

pub use error::SimError;
pub use reg::{NUM_REGISTERS, Reg, RegisterFile};
pub use types::{Pid, SimTime};
