//! Configuration for the scheduling simulator.
//!
//! Configuration is supplied as JSON or built with `Config::default()`. The
//! surface is deliberately small: the frame-allocator capacity and the
//! default round-robin quantum.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants.
mod defaults {
    /// Frame-allocator capacity: how many processes may be resident at once.
    pub const NUM_FRAMES: usize = 10;

    /// Round-robin instruction quantum used when none is given explicitly.
    pub const TIME_QUANTUM: u64 = 2;
}

/// Simulator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of memory frames available for admission.
    pub num_frames: usize,
    /// Default round-robin quantum, in instructions.
    pub time_quantum: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_frames: defaults::NUM_FRAMES,
            time_quantum: defaults::TIME_QUANTUM,
        }
    }
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedConfig`] when the text is not valid JSON
    /// or contains unknown fields.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }
}
