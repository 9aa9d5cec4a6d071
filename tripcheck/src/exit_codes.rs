//! Stable exit codes for the tripcheck CLI.

/// Report printed successfully.
pub const OK: i32 = 0;
/// A calculation or output step failed.
pub const INVALID: i32 = 1;
