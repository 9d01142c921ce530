//! Simulation setup: loading process descriptors from the filesystem.

/// Descriptor file and directory loading.
pub mod loader;

pub use loader::{load_descriptor, load_directory};
