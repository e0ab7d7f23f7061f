//! Banker's algorithm safety evaluator.
//!
//! Given processes with current allocations and maximum demands plus the
//! available resource vector, decides whether the system is in a safe state
//! and records the full search trace. The architecture enforces a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (need derivation, validation, the
//!   safety search). No I/O, fully testable in isolation.
//! - **[`io`]**: Scenario files on disk.
//!
//! [`evaluate`] chains validation, need derivation and the safety search;
//! [`report`] renders the outcome for the CLI.

pub mod core;
pub mod evaluate;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
