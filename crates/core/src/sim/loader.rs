//! Descriptor file and directory loading.
//!
//! A workload is a directory of `*.txt` process descriptors. Each file's stem
//! becomes the process identifier, its first line the arrival time, and its
//! remaining lines the program (see [`crate::isa::parse`]). Files load in
//! lexicographic order so a workload produces the same backlog on every run.

use std::fs;
use std::path::Path;

use crate::common::{Pid, SimError};
use crate::isa::parse_descriptor;
use crate::process::Process;

/// Loads one process descriptor file.
///
/// The process identifier is the file stem.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the file cannot be read and decode errors
/// from [`parse_descriptor`].
pub fn load_descriptor(path: &Path) -> Result<Process, SimError> {
    let text = fs::read_to_string(path)?;
    let pid = Pid::new(
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    );
    let (arrival_time, program) = parse_descriptor(&text)?;
    tracing::debug!(%pid, arrival = arrival_time, instructions = program.len(), "descriptor loaded");
    Ok(Process::new(pid, arrival_time, program))
}

/// Loads every `*.txt` descriptor in a directory, in lexicographic order.
///
/// # Errors
///
/// Returns [`SimError::Io`] when the directory cannot be read and any error
/// from [`load_descriptor`]; the first failing descriptor aborts the load.
pub fn load_directory(dir: &Path) -> Result<Vec<Process>, SimError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_descriptor(path)).collect()
}
