//! Deterministic, pure logic of the safety engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod need;
pub mod safety;
pub mod types;
pub mod validator;
