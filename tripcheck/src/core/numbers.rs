//! Predicates over a set of four numbers.

use std::collections::HashSet;

use tracing::trace;

use crate::core::types::{NumberSet, ValidationResult};
use crate::error::Error;

/// Target sum for [`sum_equals_50`].
pub const TARGET_SUM: i64 = 50;
/// Upper bound checked by [`none_over_25`] (inclusive).
pub const MAX_VALUE: i64 = 25;
/// Minimum odd count required by [`at_least_two_odd`].
pub const MIN_ODD: usize = 2;

/// True if the values add up to exactly 50.
pub fn sum_equals_50(values: &[i64]) -> bool {
    // Widen so extreme inputs cannot overflow.
    values.iter().map(|&value| i128::from(value)).sum::<i128>() == i128::from(TARGET_SUM)
}

/// True if at least two values are odd. Negative odd values count.
pub fn at_least_two_odd(values: &[i64]) -> bool {
    values.iter().filter(|&&value| value % 2 != 0).count() >= MIN_ODD
}

/// True if no value is greater than 25.
pub fn none_over_25(values: &[i64]) -> bool {
    !values.iter().any(|&value| value > MAX_VALUE)
}

/// True if no two values are equal.
pub fn all_unique(values: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value))
}

/// Evaluate every predicate for `numbers`.
pub fn validate(numbers: &NumberSet) -> ValidationResult {
    let values = numbers.values();
    let result = ValidationResult {
        sum_equals_50: sum_equals_50(values),
        at_least_two_odd: at_least_two_odd(values),
        none_over_25: none_over_25(values),
        all_unique: all_unique(values),
    };
    trace!(?values, ?result, "validated numbers");
    result
}

/// Overall validity of a four-value sequence.
///
/// Returns `InvalidArgument` if `numbers` does not hold exactly four values.
pub fn validate_numbers(numbers: &[i64]) -> Result<bool, Error> {
    let set = NumberSet::try_from(numbers)?;
    Ok(validate(&set).is_valid())
}
