//! Orchestration for `banker run`: validate, derive needs, evaluate.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::need::derive_needs;
use crate::core::safety::evaluate_safety;
use crate::core::types::{AlgorithmResult, Process, SafetyInput, Scenario, Validation};
use crate::core::validator::validate;
use crate::io::scenario::load_scenario;

/// Outcome of a full validate -> derive -> evaluate chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Validation failed; the search was not attempted.
    Invalid(String),
    /// Search ran; `result.safe` holds the verdict.
    Evaluated {
        /// Processes with derived needs, in scenario order.
        processes: Vec<Process>,
        result: AlgorithmResult,
    },
}

/// Validate a scenario without running the search.
pub fn validate_scenario(scenario: &Scenario) -> Validation {
    validate(
        scenario.processes.len(),
        scenario.resource_count(),
        &scenario.processes,
        &scenario.available,
    )
}

/// Run the safety evaluation for an in-memory scenario.
pub fn evaluate_scenario(scenario: &Scenario) -> Evaluation {
    if let Validation::Invalid { error } = validate_scenario(scenario) {
        debug!(%error, "scenario rejected");
        return Evaluation::Invalid(error);
    }

    if scenario.processes.is_empty() {
        warn!("scenario has no processes; reporting trivially safe");
    }

    let processes = derive_needs(&scenario.processes);
    let result = evaluate_safety(&SafetyInput {
        processes: &processes,
        available: &scenario.available,
        resource_count: scenario.resource_count(),
    });
    info!(
        safe = result.safe,
        steps = result.steps.len(),
        processes = processes.len(),
        "safety evaluation finished"
    );

    Evaluation::Evaluated { processes, result }
}

/// Load a scenario file and evaluate it.
pub fn evaluate_path(path: &Path) -> Result<Evaluation> {
    let scenario =
        load_scenario(path).with_context(|| format!("load scenario {}", path.display()))?;
    Ok(evaluate_scenario(&scenario))
}
