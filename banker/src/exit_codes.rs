//! Stable exit codes for banker CLI commands.

/// Command succeeded; for `banker run`, the scenario is safe.
pub const OK: i32 = 0;
/// Scenario failed validation, or the file could not be read or parsed.
pub const INVALID: i32 = 1;
/// `banker run` evaluated the scenario as unsafe.
pub const UNSAFE: i32 = 2;
