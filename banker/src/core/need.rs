//! Need derivation (`need = max - allocation`).

use crate::core::types::{Process, Units};

/// Return copies of `processes` with `need` recomputed from `max - allocation`.
///
/// Any previously stored need is discarded. Components where allocation
/// exceeds max come out negative; rejecting those is the validator's job.
/// Mismatched vector lengths yield a need over the common prefix.
pub fn derive_needs(processes: &[Process]) -> Vec<Process> {
    processes
        .iter()
        .map(|process| Process {
            need: need_of(process),
            ..process.clone()
        })
        .collect()
}

fn need_of(process: &Process) -> Vec<Units> {
    process
        .max
        .iter()
        .zip(&process.allocation)
        .map(|(max, held)| max.saturating_sub(*held))
        .collect()
}
