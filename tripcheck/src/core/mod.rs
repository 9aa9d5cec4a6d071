//! Deterministic, pure calculation logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod numbers;
pub mod trip;
pub mod types;
