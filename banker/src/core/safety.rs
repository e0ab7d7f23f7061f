//! Banker's safety search.
//!
//! Greedy and deterministic: each pass scans unfinished processes in the order
//! given, grants the first one whose need fits in `work`, releases its
//! allocation into `work`, then restarts from the top. The run ends when every
//! process finished (safe) or a full pass found nothing to grant (unsafe).

use crate::core::types::{AlgorithmResult, Process, SafetyInput, Step, Units};

/// Run the safety search over need-derived processes.
///
/// Never mutates the input and never fails: an unsafe verdict is a regular
/// result carrying the partial trace up to exhaustion.
pub fn evaluate_safety(input: &SafetyInput<'_>) -> AlgorithmResult {
    let processes = input.processes;
    let mut work: Vec<Units> = input.available.to_vec();
    let mut finished = vec![false; processes.len()];
    let mut sequence = Vec::with_capacity(processes.len());
    let mut steps = Vec::new();

    while sequence.len() < processes.len() {
        let granted = scan_pass(
            processes,
            &finished,
            &mut work,
            input.resource_count,
            &mut steps,
        );
        let Some(index) = granted else {
            return AlgorithmResult {
                safe: false,
                steps,
                safe_sequence: None,
            };
        };
        finished[index] = true;
        sequence.push(processes[index].id.clone());
    }

    AlgorithmResult {
        safe: true,
        steps,
        safe_sequence: Some(sequence),
    }
}

/// Test unfinished processes in order until one fits.
///
/// Records one step per test. On a hit, releases the process's allocation into
/// `work` and returns its index.
fn scan_pass(
    processes: &[Process],
    finished: &[bool],
    work: &mut [Units],
    resource_count: usize,
    steps: &mut Vec<Step>,
) -> Option<usize> {
    for (index, process) in processes.iter().enumerate() {
        if finished[index] {
            continue;
        }

        let satisfied = fits(&process.need, work, resource_count);
        let mut step = Step {
            process_id: process.id.clone(),
            work: work.to_vec(),
            satisfied,
            work_after: None,
        };

        if satisfied {
            release(work, &process.allocation);
            step.work_after = Some(work.to_vec());
            steps.push(step);
            return Some(index);
        }
        steps.push(step);
    }

    None
}

fn fits(need: &[Units], work: &[Units], resource_count: usize) -> bool {
    need.iter()
        .zip(work)
        .take(resource_count)
        .all(|(need, free)| need <= free)
}

/// Saturates at `Units::MAX`; validated scenarios never reach it.
fn release(work: &mut [Units], allocation: &[Units]) {
    for (free, held) in work.iter_mut().zip(allocation) {
        *free = free.saturating_add(*held);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::need::derive_needs;
    use crate::test_support::{process, textbook_processes};

    fn run(processes: &[Process], available: &[Units]) -> AlgorithmResult {
        let derived = derive_needs(processes);
        evaluate_safety(&SafetyInput {
            processes: &derived,
            available,
            resource_count: available.len(),
        })
    }

    fn step(id: &str, work: &[Units], after: Option<&[Units]>) -> Step {
        Step {
            process_id: id.to_string(),
            work: work.to_vec(),
            satisfied: after.is_some(),
            work_after: after.map(<[Units]>::to_vec),
        }
    }

    #[test]
    fn textbook_scenario_is_safe_with_restart_from_top_order() {
        let result = run(&textbook_processes(), &[3, 3, 2]);
        assert!(result.safe);
        assert_eq!(
            result.safe_sequence,
            Some(
                ["P1", "P3", "P0", "P2", "P4"]
                    .map(String::from)
                    .to_vec()
            )
        );
    }

    /// Pins the exact trace: a hit restarts the scan at the first unfinished process.
    #[test]
    fn textbook_trace_restarts_after_each_grant() {
        let result = run(&textbook_processes(), &[3, 3, 2]);
        assert_eq!(
            result.steps,
            vec![
                step("P0", &[3, 3, 2], None),
                step("P1", &[3, 3, 2], Some(&[5, 3, 2])),
                step("P0", &[5, 3, 2], None),
                step("P2", &[5, 3, 2], None),
                step("P3", &[5, 3, 2], Some(&[7, 4, 3])),
                step("P0", &[7, 4, 3], Some(&[7, 5, 3])),
                step("P2", &[7, 5, 3], Some(&[10, 5, 5])),
                step("P4", &[10, 5, 5], Some(&[10, 5, 7])),
            ]
        );
    }

    #[test]
    fn deadlocked_scenario_is_unsafe_with_partial_trace() {
        let processes = vec![process("A", &[0, 1], &[2, 1]), process("B", &[1, 0], &[1, 2])];
        let result = run(&processes, &[1, 0]);
        assert!(!result.safe);
        assert_eq!(result.safe_sequence, None);
        assert_eq!(
            result.steps,
            vec![step("A", &[1, 0], None), step("B", &[1, 0], None)]
        );
    }

    #[test]
    fn unsafe_after_partial_progress_keeps_earlier_grants_in_trace() {
        let processes = vec![process("X", &[0, 0], &[1, 1]), process("Y", &[1, 0], &[3, 0])];
        let result = run(&processes, &[1, 1]);
        assert!(!result.safe);
        assert_eq!(
            result.steps,
            vec![
                step("X", &[1, 1], Some(&[1, 1])),
                step("Y", &[1, 1], None),
            ]
        );
    }

    #[test]
    fn empty_collection_is_trivially_safe() {
        let result = run(&[], &[1, 2]);
        assert_eq!(
            result,
            AlgorithmResult {
                safe: true,
                steps: Vec::new(),
                safe_sequence: Some(Vec::new()),
            }
        );
    }

    #[test]
    fn zero_need_completes_even_with_nothing_available() {
        let processes = vec![process("Z", &[2, 3], &[2, 3])];
        let result = run(&processes, &[0, 0]);
        assert!(result.safe);
        assert_eq!(result.steps, vec![step("Z", &[0, 0], Some(&[2, 3]))]);
    }

    #[test]
    fn evaluation_does_not_alias_available() {
        let available = vec![3, 3, 2];
        let derived = derive_needs(&textbook_processes());
        let _ = evaluate_safety(&SafetyInput {
            processes: &derived,
            available: &available,
            resource_count: 3,
        });
        assert_eq!(available, vec![3, 3, 2]);
    }

    #[test]
    fn release_saturates_instead_of_overflowing() {
        let processes = derive_needs(&[process("A", &[1], &[1])]);
        let result = evaluate_safety(&SafetyInput {
            processes: &processes,
            available: &[Units::MAX],
            resource_count: 1,
        });
        assert!(result.safe);
        assert_eq!(result.steps[0].work_after, Some(vec![Units::MAX]));
    }

    /// Vectors shorter or longer than `resource_count` are compared on the common prefix.
    #[test]
    fn mismatched_lengths_compare_common_prefix() {
        let processes = vec![
            Process {
                need: vec![1],
                ..process("short", &[1], &[2])
            },
            Process {
                need: vec![0, 0, 9],
                ..process("long", &[1, 1, 1, 1], &[1, 1, 1, 1])
            },
        ];
        let result = evaluate_safety(&SafetyInput {
            processes: &processes,
            available: &[1, 0],
            resource_count: 2,
        });
        assert!(result.safe);
        assert_eq!(
            result.steps,
            vec![
                step("short", &[1, 0], Some(&[2, 0])),
                step("long", &[2, 0], Some(&[3, 1])),
            ]
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let first = run(&textbook_processes(), &[3, 3, 2]);
        let second = run(&textbook_processes(), &[3, 3, 2]);
        assert_eq!(first, second);
    }
}
