//! I/O helpers for banker commands.

pub mod scenario;
