//! Shared deterministic types for the safety engine.
//!
//! These types define stable contracts between the need deriver, the input
//! validator and the safety evaluator. They do not depend on external state or
//! I/O and serialize the same way across runs.

use serde::{Deserialize, Serialize};

/// Resource unit count.
///
/// Signed so that negative input can be represented and rejected by the
/// validator, and so that an unvalidated `allocation > max` yields a negative
/// need rather than wrapping.
pub type Units = i64;

/// A process competing for resources.
///
/// `allocation`, `max` and `need` share one resource order across the whole
/// scenario. `need` is derived (`max - allocation`) and is never read from
/// scenario files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: String,
    pub allocation: Vec<Units>,
    pub max: Vec<Units>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Vec::is_empty")]
    pub need: Vec<Units>,
}

impl Process {
    /// Build a process with an empty (not yet derived) need.
    pub fn new(id: impl Into<String>, allocation: Vec<Units>, max: Vec<Units>) -> Self {
        Self {
            id: id.into(),
            allocation,
            max,
            need: Vec::new(),
        }
    }
}

/// Outcome of input validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Validation {
    /// Scenario is well-formed; the evaluator may run.
    Valid,
    /// First violation found, as a human-readable message.
    Invalid { error: String },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { error } => Some(error),
        }
    }
}

/// Borrowed input to the safety evaluator.
///
/// `processes` must already carry derived needs.
#[derive(Debug, Clone, Copy)]
pub struct SafetyInput<'a> {
    pub processes: &'a [Process],
    pub available: &'a [Units],
    pub resource_count: usize,
}

/// One decision point of the safety search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Process whose need was tested.
    pub process_id: String,
    /// Work vector at the time of the test.
    pub work: Vec<Units>,
    /// True if every need component fit within `work`.
    pub satisfied: bool,
    /// Work vector after the process released its allocation.
    ///
    /// Present only when `satisfied` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_after: Option<Vec<Units>>,
}

/// Verdict plus the full search trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub safe: bool,
    pub steps: Vec<Step>,
    /// Completion order of process ids; `None` when unsafe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_sequence: Option<Vec<String>>,
}

/// Processes plus the available vector.
///
/// `resources` may be omitted in scenario files; it then defaults to the
/// length of `available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<usize>,
    pub available: Vec<Units>,
    #[serde(default)]
    pub processes: Vec<Process>,
}

impl Scenario {
    /// Number of resource types this scenario declares.
    pub fn resource_count(&self) -> usize {
        self.resources.unwrap_or(self.available.len())
    }
}
