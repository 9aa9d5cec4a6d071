//! Number validation and trip fuel planning.
//!
//! Two unrelated calculators share this crate:
//!
//! - **[`core::numbers`]**: checks four numbers against four predicates
//!   (sum, parity, upper bound, uniqueness).
//! - **[`core::trip`]**: fuel, cost and duration estimates for a fixed trip at
//!   several speeds, plus selection of the cheapest speed.
//!
//! [`core`] is pure and deterministic. [`report`] composes both calculators
//! into the program output consumed by the CLI.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::Error;
