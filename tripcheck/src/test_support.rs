//! Test-only fixtures for the calculators.

use crate::core::trip::SpeedTable;

/// Validity of four numbers written as one unfactored expression.
///
/// Kept only to prove the factored predicates in [`crate::core::numbers`]
/// compute the same answer.
pub fn inline_validity(n1: i64, n2: i64, n3: i64, n4: i64) -> bool {
    ((n1 + n2 + n3 + n4) == 50)
        && ((n1 % 2).abs() + (n2 % 2).abs() + (n3 % 2).abs() + (n4 % 2).abs() >= 2)
        && !(n1 > 25 || n2 > 25 || n3 > 25 || n4 > 25)
        && (n1 != n2 && n1 != n3 && n1 != n4 && n2 != n3 && n2 != n4 && n3 != n4)
}

/// Four-number inputs covering each predicate passing and failing.
pub fn sample_number_sets() -> Vec<[i64; 4]> {
    vec![
        [10, 15, 20, 5],
        [5, 20, 15, 10],
        [10, 10, 20, 10],
        [10, 15, 20, 6],
        [10, 12, 20, 8],
        [30, 15, 0, 5],
        [25, 1, 3, 21],
        [26, -1, 24, 1],
        [-3, -5, 33, 25],
        [0, 0, 0, 0],
        [7, 9, 11, 23],
        [1, 1, 24, 24],
    ]
}

/// Efficiency table where 55 and 60 mph cost the same.
pub fn tied_speed_table() -> SpeedTable {
    SpeedTable::new([(55, 30.0), (60, 30.0), (75, 23.0)])
}

/// Assert two floats agree to within a cent.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected}, got {actual}"
    );
}
