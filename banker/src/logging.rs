//! Diagnostic tracing for the banker CLI.
//!
//! Diagnostics go to stderr. Product output (need tables, traces, verdicts)
//! goes to stdout and is unaffected by the filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a compact stderr subscriber.
///
/// `RUST_LOG=banker=debug banker run scenario.toml` shows scenario loading
/// and the evaluation summary.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
