//! Test-only helpers for constructing processes and scenarios.

use crate::core::types::{Process, Scenario, Units};

/// Create a process with an underived need.
pub fn process(id: &str, allocation: &[Units], max: &[Units]) -> Process {
    Process::new(id, allocation.to_vec(), max.to_vec())
}

/// The classic five-process, three-resource textbook table.
pub fn textbook_processes() -> Vec<Process> {
    vec![
        process("P0", &[0, 1, 0], &[7, 5, 3]),
        process("P1", &[2, 0, 0], &[3, 2, 2]),
        process("P2", &[3, 0, 2], &[9, 0, 2]),
        process("P3", &[2, 1, 1], &[2, 2, 2]),
        process("P4", &[0, 0, 2], &[4, 3, 3]),
    ]
}

/// Textbook processes with available `[3, 3, 2]`.
pub fn textbook_scenario() -> Scenario {
    Scenario {
        resources: Some(3),
        available: vec![3, 3, 2],
        processes: textbook_processes(),
    }
}

/// Replay a completion order against need-derived processes.
///
/// Returns the id of the first process whose need exceeds the running work,
/// or `None` when every process in `sequence` could be granted in turn.
/// Unknown ids count as failures.
pub fn replay_sequence(
    processes: &[Process],
    available: &[Units],
    sequence: &[String],
) -> Option<String> {
    let mut work = available.to_vec();
    for id in sequence {
        let Some(process) = processes.iter().find(|p| &p.id == id) else {
            return Some(id.clone());
        };
        let fits = process.need.iter().zip(&work).all(|(need, free)| need <= free);
        if !fits {
            return Some(id.clone());
        }
        for (free, held) in work.iter_mut().zip(&process.allocation) {
            *free = free.saturating_add(*held);
        }
    }
    None
}

/// Brute-force search for any complete safe order (small inputs only).
pub fn any_safe_order_exists(processes: &[Process], available: &[Units]) -> bool {
    fn search(processes: &[Process], work: &[Units], finished: &mut [bool]) -> bool {
        if finished.iter().all(|done| *done) {
            return true;
        }
        for (index, process) in processes.iter().enumerate() {
            if finished[index] {
                continue;
            }
            if !process.need.iter().zip(work).all(|(need, free)| need <= free) {
                continue;
            }
            let next: Vec<Units> = work
                .iter()
                .zip(&process.allocation)
                .map(|(free, held)| free.saturating_add(*held))
                .collect();
            finished[index] = true;
            if search(processes, &next, finished) {
                return true;
            }
            finished[index] = false;
        }
        false
    }

    let mut finished = vec![false; processes.len()];
    search(processes, available, &mut finished)
}
