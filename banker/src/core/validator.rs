//! Scenario consistency checks run before the safety evaluator.
//!
//! Checks run in a fixed order and stop at the first violation:
//! - process count matches the supplied collection
//! - every vector has exactly `resource_count` entries
//! - every entry is non-negative
//! - `allocation <= max` per process and resource
//! - available plus all allocations fits in `Units` per resource
//! - process ids are non-empty and unique
//!
//! An empty process collection is valid; it evaluates trivially safe.

use std::collections::HashSet;

use crate::core::types::{Process, Units, Validation};

/// Validate a scenario, returning the first violation found.
pub fn validate(
    process_count: usize,
    resource_count: usize,
    processes: &[Process],
    available: &[Units],
) -> Validation {
    match first_violation(process_count, resource_count, processes, available) {
        Some(error) => Validation::Invalid { error },
        None => Validation::Valid,
    }
}

fn first_violation(
    process_count: usize,
    resource_count: usize,
    processes: &[Process],
    available: &[Units],
) -> Option<String> {
    if processes.len() != process_count {
        return Some(format!(
            "expected {} processes but {} were provided",
            process_count,
            processes.len()
        ));
    }

    check_lengths(resource_count, processes, available)
        .or_else(|| check_non_negative(processes, available))
        .or_else(|| check_allocation_within_max(processes))
        .or_else(|| check_totals_fit(processes, available))
        .or_else(|| check_ids(processes))
}

fn check_lengths(
    resource_count: usize,
    processes: &[Process],
    available: &[Units],
) -> Option<String> {
    if available.len() != resource_count {
        return Some(format!(
            "available has {} entries but there are {} resource types",
            available.len(),
            resource_count
        ));
    }

    for process in processes {
        for (label, vector) in [("allocation", &process.allocation), ("max", &process.max)] {
            if vector.len() != resource_count {
                return Some(format!(
                    "process '{}': {} has {} entries but there are {} resource types",
                    process.id,
                    label,
                    vector.len(),
                    resource_count
                ));
            }
        }
    }

    None
}

fn check_non_negative(processes: &[Process], available: &[Units]) -> Option<String> {
    if let Some((resource, value)) = first_negative(available) {
        return Some(format!(
            "available[{}] is {}; resource counts must be non-negative",
            resource, value
        ));
    }

    for process in processes {
        for (label, vector) in [("allocation", &process.allocation), ("max", &process.max)] {
            if let Some((resource, value)) = first_negative(vector) {
                return Some(format!(
                    "process '{}': {}[{}] is {}; resource counts must be non-negative",
                    process.id, label, resource, value
                ));
            }
        }
    }

    None
}

fn check_allocation_within_max(processes: &[Process]) -> Option<String> {
    for process in processes {
        let over = process
            .allocation
            .iter()
            .zip(&process.max)
            .position(|(held, max)| held > max);
        if let Some(resource) = over {
            return Some(format!(
                "process '{}': allocation exceeds max for resource {} ({} > {})",
                process.id, resource, process.allocation[resource], process.max[resource]
            ));
        }
    }

    None
}

/// Work never exceeds available plus every allocation, so this bounds the search.
fn check_totals_fit(processes: &[Process], available: &[Units]) -> Option<String> {
    for (resource, free) in available.iter().enumerate() {
        let total = processes.iter().try_fold(*free, |total, process| {
            total.checked_add(process.allocation[resource])
        });
        if total.is_none() {
            return Some(format!(
                "resource {}: available plus allocations exceeds {} units",
                resource,
                Units::MAX
            ));
        }
    }

    None
}

fn check_ids(processes: &[Process]) -> Option<String> {
    let mut seen = HashSet::new();
    for (index, process) in processes.iter().enumerate() {
        if process.id.trim().is_empty() {
            return Some(format!("process at position {} has an empty id", index));
        }
        if !seen.insert(process.id.as_str()) {
            return Some(format!("duplicate process id '{}'", process.id));
        }
    }

    None
}

fn first_negative(vector: &[Units]) -> Option<(usize, Units)> {
    vector
        .iter()
        .copied()
        .enumerate()
        .find(|(_, value)| *value < 0)
}
