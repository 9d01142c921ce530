//! Process identifier and simulated time definitions.
//!
//! Simulated time is an integer tick counter advanced explicitly by the
//! execution engine; one tick corresponds to one executed instruction. There
//! is no wall-clock component anywhere in the simulator.

use std::fmt;

use serde::Serialize;

/// Simulated-time instant or duration, measured in instruction ticks.
pub type SimTime = u64;

/// Opaque process identifier, unique across a simulation run.
///
/// Identifiers are assigned by whoever constructs the process (the loader uses
/// the descriptor file stem) and carry no meaning beyond equality and display
/// ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pid(String);

impl Pid {
    /// Creates a process identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pid {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
